//! Signer entry points
//!
//! `Signer::sign` dispatches on the signing mode to one of two pipelines:
//!
//! - Protobuf (direct): `TxBody` + `AuthInfo` → `SignDoc` → signature → `TxRaw`
//! - JSON (legacy): canonical sign document → signature → signed JSON document
//!
//! Every call is independent. Unsupported transaction shapes are rejected
//! before any key material is touched.

use crate::amino_json;
use crate::auth_info::serialize_auth_info;
use crate::body::serialize_tx_body;
use crate::error::SignerResult;
use crate::keys::{PrivateKey, PrivateKeyBytes};
use crate::sign_doc::build_sign_doc;
use crate::signature::sign_preimage;
use crate::tx_raw::{build_tx_raw, encode_base64};
use crate::types::{SigningInput, SigningMode, SigningOutput};
use crate::{log_debug, log_warn};

const MODULE: &str = "signer";

/// Cosmos transaction signer
pub struct Signer;

impl Signer {
    /// Sign a transaction in the mode selected by `input.signing_mode`
    pub fn sign(input: &SigningInput) -> SignerResult<SigningOutput> {
        log_debug!(
            MODULE,
            "Signing transaction",
            signing_mode = format!("{:?}", input.signing_mode),
            chain_id = input.chain_id,
            account_number = input.account_number,
            sequence = input.sequence,
            message_count = input.messages.len(),
        );

        if let Err(e) = input.send_message() {
            log_warn!(MODULE, "Rejected transaction", reason = e);
            return Err(e);
        }

        let output = match input.signing_mode {
            SigningMode::Json => Self::sign_json_serialized(input)?,
            SigningMode::Protobuf => Self::sign_protobuf(input)?,
        };

        log_debug!(
            MODULE,
            "Signed transaction",
            signature_len = output.signature.len(),
            serialized_len = output.serialized.len(),
            json_len = output.json.len(),
        );
        Ok(output)
    }

    /// Direct-mode pipeline
    pub fn sign_protobuf(input: &SigningInput) -> SignerResult<SigningOutput> {
        let key = PrivateKey::from_bytes(input.private_key.as_bytes())?;

        let body_bytes = serialize_tx_body(input)?;
        let auth_info_bytes = serialize_auth_info(input, &key.public_key());
        let sign_doc = build_sign_doc(
            &body_bytes,
            &auth_info_bytes,
            &input.chain_id,
            input.account_number,
        );
        let signature = sign_preimage(&key, &sign_doc);
        let serialized = build_tx_raw(&body_bytes, &auth_info_bytes, &signature);

        Ok(SigningOutput {
            signature: signature.to_vec(),
            json: String::new(),
            serialized_base64: encode_base64(&serialized),
            serialized,
        })
    }

    /// Legacy JSON pipeline
    pub fn sign_json_serialized(input: &SigningInput) -> SignerResult<SigningOutput> {
        let key = PrivateKey::from_bytes(input.private_key.as_bytes())?;

        let preimage = amino_json::sign_doc_bytes(input)?;
        let signature = sign_preimage(&key, &preimage);
        let tx = amino_json::transaction_json(input, &signature, &key.public_key())?;

        Ok(SigningOutput {
            signature: signature.to_vec(),
            json: serde_json::to_string(&tx)?,
            serialized: Vec::new(),
            serialized_base64: String::new(),
        })
    }

    /// Sign a JSON-encoded request, injecting the key after parsing, and
    /// return only the signed JSON document.
    ///
    /// The document's own `signingMode` still selects the pipeline; for a
    /// protobuf request the returned string is empty.
    pub fn sign_json(json: &str, private_key: &[u8]) -> SignerResult<String> {
        let input = SigningInput::from_json(json)?
            .with_private_key(PrivateKeyBytes::new(private_key));
        Ok(Self::sign(&input)?.json)
    }
}
