//! End-to-end signing tests
//!
//! Decodes the produced envelopes with the crate's own protobuf records and
//! checks every signature against the preimage the ledger would rebuild.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use cosmos_signer::proto::{mode_info, AuthInfo, MsgSend, PubKey, SignDoc, SignMode, TxBody, TxRaw};
use cosmos_signer::{
    verify_signature, Amount, ErrorCode, Fee, Message, PrivateKey, PrivateKeyBytes, SendCoins,
    Signer, SigningInput, SigningMode,
};
use prost::Message as _;
use serde_json::Value;

const KEY_HEX: &str = "80e81ea269e66a0a05b11236df7919fb7fbeedba87452d667489d7403a02f005";
const FROM: &str = "cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02";
const TO: &str = "cosmos1zt50azupanqlfam5afhv3hexwyutnukeh4c573";

fn scenario(mode: SigningMode) -> SigningInput {
    SigningInput {
        signing_mode: mode,
        account_number: 12,
        chain_id: "testchain-1".into(),
        memo: String::new(),
        sequence: 5,
        fee: Fee {
            amounts: vec![Amount::new("atom", 1)],
            gas: 200_000,
        },
        messages: vec![Message::Send(SendCoins {
            from_address: FROM.into(),
            to_address: TO.into(),
            amounts: vec![Amount::new("atom", 100)],
            type_prefix: None,
        })],
        private_key: PrivateKeyBytes::from_hex(KEY_HEX).unwrap(),
        ..Default::default()
    }
}

fn public_key() -> [u8; 33] {
    PrivateKey::from_bytes(&hex::decode(KEY_HEX).unwrap())
        .unwrap()
        .public_key()
}

#[test]
fn protobuf_scenario_envelope_layout() {
    let output = Signer::sign(&scenario(SigningMode::Protobuf)).unwrap();

    assert_eq!(output.signature.len(), 64);
    assert!(output.json.is_empty());

    // base64 decodes to the exact binary envelope
    let decoded = STANDARD.decode(&output.serialized_base64).unwrap();
    assert_eq!(decoded, output.serialized);

    let raw = TxRaw::decode(output.serialized.as_slice()).unwrap();
    assert_eq!(raw.signatures, vec![output.signature.clone()]);
    assert_eq!(raw.encode_to_vec(), output.serialized);

    // body: one packed MsgSend, empty memo, no timeout
    let body = TxBody::decode(raw.body_bytes.as_slice()).unwrap();
    assert_eq!(body.messages.len(), 1);
    assert_eq!(body.messages[0].type_url, "/cosmos.bank.v1beta1.MsgSend");
    assert_eq!(body.memo, "");
    assert_eq!(body.timeout_height, 0);

    let send = MsgSend::decode(body.messages[0].value.as_slice()).unwrap();
    assert_eq!(send.from_address, FROM);
    assert_eq!(send.to_address, TO);
    assert_eq!(send.amount.len(), 1);
    assert_eq!(send.amount[0].denom, "atom");
    assert_eq!(send.amount[0].amount, "100");

    // auth info: single signer, direct mode, sequence 5, gas 200000
    let auth = AuthInfo::decode(raw.auth_info_bytes.as_slice()).unwrap();
    assert_eq!(auth.signer_infos.len(), 1);
    let signer = &auth.signer_infos[0];
    assert_eq!(signer.sequence, 5);

    let pk_any = signer.public_key.as_ref().unwrap();
    assert_eq!(pk_any.type_url, "/cosmos.crypto.secp256k1.PubKey");
    assert_eq!(PubKey::decode(pk_any.value.as_slice()).unwrap().key, public_key().to_vec());

    let Some(mode_info::Sum::Single(single)) = signer.mode_info.as_ref().and_then(|m| m.sum.clone()) else {
        panic!("expected single mode info");
    };
    assert_eq!(single.mode, SignMode::Direct as i32);

    let fee = auth.fee.as_ref().unwrap();
    assert_eq!(fee.gas_limit, 200_000);
    assert_eq!(fee.amount.len(), 1);
    assert_eq!(fee.amount[0].amount, "1");
    assert_eq!(fee.payer, "");
    assert_eq!(fee.granter, "");
}

#[test]
fn protobuf_signature_verifies_against_sign_doc() {
    let output = Signer::sign(&scenario(SigningMode::Protobuf)).unwrap();
    let raw = TxRaw::decode(output.serialized.as_slice()).unwrap();

    let sign_doc = SignDoc {
        body_bytes: raw.body_bytes.clone(),
        auth_info_bytes: raw.auth_info_bytes.clone(),
        chain_id: "testchain-1".into(),
        account_number: 12,
    }
    .encode_to_vec();

    assert!(verify_signature(&public_key(), &sign_doc, &output.signature).unwrap());

    // a different account number is a different preimage
    let other = SignDoc {
        body_bytes: raw.body_bytes,
        auth_info_bytes: raw.auth_info_bytes,
        chain_id: "testchain-1".into(),
        account_number: 13,
    }
    .encode_to_vec();
    assert!(!verify_signature(&public_key(), &other, &output.signature).unwrap());
}

#[test]
fn protobuf_envelope_prefix_matches_ledger_encoding() {
    let mut input = scenario(SigningMode::Protobuf);
    input.account_number = 1037;
    input.chain_id = "gaia-13003".into();
    input.sequence = 8;
    input.fee = Fee {
        amounts: vec![Amount::new("muon", 200)],
        gas: 200_000,
    };
    input.messages = vec![Message::Send(SendCoins {
        from_address: FROM.into(),
        to_address: TO.into(),
        amounts: vec![Amount::new("muon", 1)],
        type_prefix: None,
    })];

    let output = Signer::sign(&input).unwrap();
    // TxRaw{body: TxBody{messages: [Any{"/cosmos.bank.v1beta1.MsgSend", ..}]}}
    assert!(output
        .serialized_base64
        .starts_with("CowBCokBChwvY29zbW9zLmJhbmsudjFiZXRhMS5Nc2dTZW5k"));
}

#[test]
fn json_scenario_document_and_signature() {
    let input = scenario(SigningMode::Json);
    let output = Signer::sign(&input).unwrap();

    assert_eq!(output.signature.len(), 64);
    assert!(output.serialized.is_empty());
    assert!(output.serialized_base64.is_empty());

    let doc: Value = serde_json::from_str(&output.json).unwrap();
    assert_eq!(doc["mode"], "block");
    assert_eq!(doc["tx"]["memo"], "");
    assert_eq!(doc["tx"]["fee"]["amount"][0]["amount"], "1");
    assert_eq!(doc["tx"]["msg"][0]["type"], "cosmos-sdk/MsgSend");
    assert_eq!(doc["tx"]["msg"][0]["value"]["amount"][0]["amount"], "100");

    let sig_b64 = doc["tx"]["signatures"][0]["signature"].as_str().unwrap();
    assert_eq!(STANDARD.decode(sig_b64).unwrap(), output.signature);

    let preimage = concat!(
        r#"{"account_number":"12","chain_id":"testchain-1","#,
        r#""fee":{"amount":[{"amount":"1","denom":"atom"}],"gas":"200000"},"memo":"","#,
        r#""msgs":[{"type":"cosmos-sdk/MsgSend","value":{"amount":[{"amount":"100","denom":"atom"}],"#,
        r#""from_address":"cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02","#,
        r#""to_address":"cosmos1zt50azupanqlfam5afhv3hexwyutnukeh4c573"}}],"sequence":"5"}"#
    );
    assert!(verify_signature(&public_key(), preimage.as_bytes(), &output.signature).unwrap());
}

#[test]
fn modes_sign_different_preimages() {
    let proto = Signer::sign(&scenario(SigningMode::Protobuf)).unwrap();
    let json = Signer::sign(&scenario(SigningMode::Json)).unwrap();
    assert_ne!(proto.signature, json.signature);
}

#[test]
fn unsupported_inputs_fail_explicitly() {
    let mut empty = scenario(SigningMode::Protobuf);
    empty.messages.clear();
    assert_eq!(Signer::sign(&empty).unwrap_err().code, ErrorCode::EmptyMessageList);

    let mut other = scenario(SigningMode::Protobuf);
    other.messages = vec![Message::Unsupported("stakeMessage".into())];
    let err = Signer::sign(&other).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnsupportedMessageKind);
    assert_eq!(err.details.as_deref(), Some("stakeMessage"));

    let mut two = scenario(SigningMode::Json);
    let first = two.messages[0].clone();
    two.messages.push(first);
    assert_eq!(Signer::sign(&two).unwrap_err().code, ErrorCode::TooManyMessages);
}

#[test]
fn raw_json_entry_point() {
    let request = format!(
        r#"{{
            "signingMode": "JSON",
            "accountNumber": "12",
            "chainId": "testchain-1",
            "sequence": "5",
            "fee": {{"amounts": [{{"denom": "atom", "amount": "1"}}], "gas": "200000"}},
            "messages": [{{"sendCoinsMessage": {{
                "fromAddress": "{FROM}",
                "toAddress": "{TO}",
                "amounts": [{{"denom": "atom", "amount": "100"}}]
            }}}}]
        }}"#
    );
    let key = hex::decode(KEY_HEX).unwrap();

    let signed = Signer::sign_json(&request, &key).unwrap();
    assert_eq!(signed, Signer::sign(&scenario(SigningMode::Json)).unwrap().json);

    // protobuf requests carry no JSON document
    let proto_request = request.replace(r#""JSON""#, r#""Protobuf""#);
    assert_eq!(Signer::sign_json(&proto_request, &key).unwrap(), "");

    assert_eq!(
        Signer::sign_json("[1, 2", &key).unwrap_err().code,
        ErrorCode::JsonError
    );
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..4u64)
        .map(|seq| {
            std::thread::spawn(move || {
                let mut input = scenario(SigningMode::Protobuf);
                input.sequence = seq;
                Signer::sign(&input).unwrap()
            })
        })
        .collect();

    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (seq, output) in outputs.iter().enumerate() {
        let mut input = scenario(SigningMode::Protobuf);
        input.sequence = seq as u64;
        assert_eq!(output, &Signer::sign(&input).unwrap());
    }
}
