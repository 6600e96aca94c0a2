//! Raw transaction envelope (`TxRaw`)

use base64::{engine::general_purpose::STANDARD, Engine as _};
use prost::Message as _;

use crate::proto::TxRaw;

/// Serialize the broadcastable envelope with a single signature
pub fn build_tx_raw(body_bytes: &[u8], auth_info_bytes: &[u8], signature: &[u8]) -> Vec<u8> {
    TxRaw {
        body_bytes: body_bytes.to_vec(),
        auth_info_bytes: auth_info_bytes.to_vec(),
        signatures: vec![signature.to_vec()],
    }
    .encode_to_vec()
}

/// Standard (padded) base64 of a serialized envelope
pub fn encode_base64(serialized: &[u8]) -> String {
    STANDARD.encode(serialized)
}
