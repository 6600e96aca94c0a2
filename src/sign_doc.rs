//! Sign-document assembly (`SignDoc`)
//!
//! Field order is fixed by the verifying ledger: body bytes, auth-info
//! bytes, chain id, account number.

use prost::Message as _;

use crate::proto::SignDoc;

/// Serialize the direct-mode sign document; these bytes are the preimage
pub fn build_sign_doc(
    body_bytes: &[u8],
    auth_info_bytes: &[u8],
    chain_id: &str,
    account_number: u64,
) -> Vec<u8> {
    SignDoc {
        body_bytes: body_bytes.to_vec(),
        auth_info_bytes: auth_info_bytes.to_vec(),
        chain_id: chain_id.to_string(),
        account_number,
    }
    .encode_to_vec()
}
