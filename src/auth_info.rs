//! Authorization info builder (`AuthInfo`)
//!
//! One signer, direct sign mode, no fee delegation and no tip.

use prost::Message as _;

use crate::coin::convert_coins;
use crate::proto::{self, pack_any, ModeInfo, SignMode};
use crate::types::SigningInput;

/// Build the signer's `SignerInfo`
pub fn build_signer_info(public_key: &[u8], sequence: u64) -> proto::SignerInfo {
    let pub_key = proto::PubKey {
        key: public_key.to_vec(),
    };

    proto::SignerInfo {
        public_key: Some(pack_any(&pub_key)),
        mode_info: Some(ModeInfo::single(SignMode::Direct)),
        sequence,
    }
}

/// Build the `Fee` record; payer and granter stay empty
pub fn build_fee(input: &SigningInput) -> proto::Fee {
    proto::Fee {
        amount: convert_coins(&input.fee.amounts),
        gas_limit: input.fee.gas,
        payer: String::new(),
        granter: String::new(),
    }
}

/// Assemble the `AuthInfo` record for a compressed secp256k1 public key
pub fn build_auth_info(input: &SigningInput, public_key: &[u8]) -> proto::AuthInfo {
    proto::AuthInfo {
        signer_infos: vec![build_signer_info(public_key, input.sequence)],
        fee: Some(build_fee(input)),
    }
}

/// Serialized `AuthInfo` bytes
pub fn serialize_auth_info(input: &SigningInput, public_key: &[u8]) -> Vec<u8> {
    build_auth_info(input, public_key).encode_to_vec()
}
