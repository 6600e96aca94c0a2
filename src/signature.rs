//! Signature producer
//!
//! SHA-256 the preimage, sign the digest over secp256k1 and emit the
//! 64-byte R || S form the ledger expects.

use sha2::{Digest, Sha256};

use crate::error::SignerResult;
use crate::keys::{self, PrivateKey, RECOVERABLE_SIGNATURE_LEN};

/// Length of an emitted signature
pub const SIGNATURE_LEN: usize = 64;

/// SHA-256 digest of a preimage
pub fn sha256(preimage: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(preimage);
    hasher.finalize().into()
}

/// Drop the trailing recovery id from a 65-byte recoverable signature.
///
/// The ledger verifies against the signer's public key and never recovers
/// it; a 65-byte signature is rejected as malformed.
pub fn strip_recovery_byte(
    signature: &[u8; RECOVERABLE_SIGNATURE_LEN],
) -> [u8; SIGNATURE_LEN] {
    let mut out = [0u8; SIGNATURE_LEN];
    out.copy_from_slice(&signature[..SIGNATURE_LEN]);
    out
}

/// Hash and sign a preimage
pub fn sign_preimage(key: &PrivateKey, preimage: &[u8]) -> [u8; SIGNATURE_LEN] {
    let digest = sha256(preimage);
    strip_recovery_byte(&key.sign_recoverable(&digest))
}

/// Check a 64-byte signature over `preimage` against a compressed public key
pub fn verify_signature(public_key: &[u8], preimage: &[u8], signature: &[u8]) -> SignerResult<bool> {
    let digest = sha256(preimage);
    keys::verify_digest(public_key, &digest, signature).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "80e81ea269e66a0a05b11236df7919fb7fbeedba87452d667489d7403a02f005";

    fn key() -> PrivateKey {
        PrivateKey::from_bytes(&hex::decode(KEY_HEX).unwrap()).unwrap()
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_strip_recovery_byte_keeps_r_and_s() {
        let mut recoverable = [0u8; RECOVERABLE_SIGNATURE_LEN];
        for (i, b) in recoverable.iter_mut().enumerate() {
            *b = i as u8;
        }
        let stripped = strip_recovery_byte(&recoverable);
        assert_eq!(stripped.len(), 64);
        assert_eq!(&stripped[..], &recoverable[..64]);
    }

    #[test]
    fn test_sign_preimage_matches_recoverable_prefix() {
        let key = key();
        let preimage = b"sign me";
        let full = key.sign_recoverable(&sha256(preimage));
        let sig = sign_preimage(&key, preimage);
        assert_eq!(&sig[..], &full[..64]);
    }

    #[test]
    fn test_round_trip_verification() {
        let key = key();
        let sig = sign_preimage(&key, b"preimage");
        assert!(verify_signature(&key.public_key(), b"preimage", &sig).unwrap());
        assert!(!verify_signature(&key.public_key(), b"other", &sig).unwrap());
    }
}
