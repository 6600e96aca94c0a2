//! secp256k1 key material
//!
//! Private key bytes live in a zeroizing buffer for the duration of one
//! signing call. The curve operations themselves are delegated to
//! libsecp256k1 (RFC 6979 deterministic nonces, low-S signatures).

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a compressed secp256k1 public key
pub const PUBLIC_KEY_LEN: usize = 33;
/// Length of a recoverable signature: R (32) || S (32) || recovery id (1)
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

/// Errors raised by the key capability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
}

/// Raw private key bytes, wiped from memory on drop
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyBytes(Vec<u8>);

impl PrivateKeyBytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode from a hex string (an optional `0x` prefix is accepted)
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        hex::decode(trimmed)
            .map(Self)
            .map_err(|e| KeyError::InvalidPrivateKey(format!("hex decoding failed: {}", e)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PrivateKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyBytes")
            .field("len", &self.0.len())
            .finish()
    }
}

/// A validated secp256k1 signing key
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Parse a 32-byte secp256k1 scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 32 {
            return Err(KeyError::InvalidPrivateKey(format!(
                "Private key must be 32 bytes, got {}",
                bytes.len()
            )));
        }

        let secret = SecretKey::from_slice(bytes)
            .map_err(|e| KeyError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { secret })
    }

    /// Compressed SEC1 public key (33 bytes)
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        let secp = Secp256k1::signing_only();
        PublicKey::from_secret_key(&secp, &self.secret).serialize()
    }

    /// Sign a 32-byte digest, returning R || S || recovery id
    pub fn sign_recoverable(&self, digest: &[u8; 32]) -> [u8; RECOVERABLE_SIGNATURE_LEN] {
        let secp = Secp256k1::signing_only();
        let msg = Message::from_digest(*digest);
        let sig = secp.sign_ecdsa_recoverable(&msg, &self.secret);

        let (recovery_id, compact) = sig.serialize_compact();

        let mut out = [0u8; RECOVERABLE_SIGNATURE_LEN];
        out[..64].copy_from_slice(&compact);
        out[64] = recovery_id.to_i32() as u8;
        out
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.secret.non_secure_erase();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Verify a 64-byte R || S signature over a 32-byte digest
pub fn verify_digest(
    public_key: &[u8],
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<bool, KeyError> {
    if signature.len() != 64 {
        return Err(KeyError::InvalidSignature(format!(
            "Signature must be 64 bytes, got {}",
            signature.len()
        )));
    }

    let secp = Secp256k1::verification_only();
    let pk = PublicKey::from_slice(public_key)
        .map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
    let sig = Signature::from_compact(signature)
        .map_err(|e| KeyError::InvalidSignature(e.to_string()))?;
    let msg = Message::from_digest(*digest);

    Ok(secp.verify_ecdsa(&msg, &sig, &pk).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "80e81ea269e66a0a05b11236df7919fb7fbeedba87452d667489d7403a02f005";

    fn test_key() -> PrivateKey {
        let bytes = PrivateKeyBytes::from_hex(KEY_HEX).unwrap();
        PrivateKey::from_bytes(bytes.as_bytes()).unwrap()
    }

    #[test]
    fn test_public_key_is_compressed() {
        let pk = test_key().public_key();
        assert_eq!(pk.len(), PUBLIC_KEY_LEN);
        assert!(pk[0] == 0x02 || pk[0] == 0x03);
    }

    #[test]
    fn test_rejects_bad_lengths_and_zero_scalar() {
        assert!(matches!(
            PrivateKey::from_bytes(&[1u8; 31]),
            Err(KeyError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 32]),
            Err(KeyError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            PrivateKey::from_bytes(&[0xffu8; 32]),
            Err(KeyError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_from_hex_accepts_prefix() {
        let plain = PrivateKeyBytes::from_hex(KEY_HEX).unwrap();
        let prefixed = PrivateKeyBytes::from_hex(&format!("0x{}", KEY_HEX)).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.len(), 32);
        assert!(PrivateKeyBytes::from_hex("zz").is_err());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let bytes = PrivateKeyBytes::from_hex(KEY_HEX).unwrap();
        let rendered = format!("{:?} {:?}", bytes, test_key());
        assert!(!rendered.contains("80e81e"));
        assert!(rendered.contains("len: 32"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_recoverable_signature_is_deterministic_and_verifies() {
        let key = test_key();
        let digest = [7u8; 32];

        let first = key.sign_recoverable(&digest);
        let second = key.sign_recoverable(&digest);
        assert_eq!(first, second);
        assert!(first[64] <= 3);

        assert!(verify_digest(&key.public_key(), &digest, &first[..64]).unwrap());
        assert!(!verify_digest(&key.public_key(), &[8u8; 32], &first[..64]).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_length() {
        let key = test_key();
        let err = verify_digest(&key.public_key(), &[0u8; 32], &[0u8; 65]).unwrap_err();
        assert!(matches!(err, KeyError::InvalidSignature(_)));
    }
}
