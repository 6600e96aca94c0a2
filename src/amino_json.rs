//! Legacy canonical-JSON signing documents
//!
//! The preimage is compact JSON with object keys in lexicographic order;
//! `serde_json::Map` is a `BTreeMap` here (no `preserve_order`), so
//! serializing a `Value` already yields the canonical byte sequence.
//! 64-bit integers are rendered as decimal strings.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};

use crate::error::SignerResult;
use crate::types::{Amount, Fee, SendCoins, SigningInput};

/// Legacy type tag of a coin transfer
pub const DEFAULT_SEND_TYPE: &str = "cosmos-sdk/MsgSend";
/// Legacy type tag of a secp256k1 public key
pub const PUBKEY_SECP256K1_TYPE: &str = "tendermint/PubKeySecp256k1";

fn amounts_json(amounts: &[Amount]) -> Value {
    Value::Array(
        amounts
            .iter()
            .map(|a| {
                json!({
                    "amount": a.amount.to_string(),
                    "denom": a.denom,
                })
            })
            .collect(),
    )
}

/// `{"amount": [...], "gas": "<n>"}`
pub fn fee_json(fee: &Fee) -> Value {
    json!({
        "amount": amounts_json(&fee.amounts),
        "gas": fee.gas.to_string(),
    })
}

/// `{"type": "cosmos-sdk/MsgSend", "value": {...}}`
pub fn send_message_json(send: &SendCoins) -> Value {
    let msg_type = send
        .type_prefix
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SEND_TYPE);

    json!({
        "type": msg_type,
        "value": {
            "amount": amounts_json(&send.amounts),
            "from_address": send.from_address,
            "to_address": send.to_address,
        },
    })
}

fn messages_json(input: &SigningInput) -> SignerResult<Value> {
    let send = input.send_message()?;
    Ok(Value::Array(vec![send_message_json(send)]))
}

/// The document whose serialization is hashed and signed
pub fn sign_doc_json(input: &SigningInput) -> SignerResult<Value> {
    Ok(json!({
        "account_number": input.account_number.to_string(),
        "chain_id": input.chain_id,
        "fee": fee_json(&input.fee),
        "memo": input.memo,
        "msgs": messages_json(input)?,
        "sequence": input.sequence.to_string(),
    }))
}

/// Canonical preimage bytes for the JSON signing mode
pub fn sign_doc_bytes(input: &SigningInput) -> SignerResult<Vec<u8>> {
    Ok(serde_json::to_vec(&sign_doc_json(input)?)?)
}

/// The final broadcastable document carrying the signature
pub fn transaction_json(
    input: &SigningInput,
    signature: &[u8],
    public_key: &[u8],
) -> SignerResult<Value> {
    let tx = json!({
        "fee": fee_json(&input.fee),
        "memo": input.memo,
        "msg": messages_json(input)?,
        "signatures": [{
            "pub_key": {
                "type": PUBKEY_SECP256K1_TYPE,
                "value": STANDARD.encode(public_key),
            },
            "signature": STANDARD.encode(signature),
        }],
    });

    Ok(json!({
        "mode": input.mode.as_str(),
        "tx": tx,
    }))
}
