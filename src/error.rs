//! Unified error types for the Cosmos signer
//!
//! All errors flow through this module so that the CLI and the C ABI can
//! report them as JSON with a stable, machine-readable code.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::keys::KeyError;

/// Main error type for all signing operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl SignerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn empty_message_list() -> Self {
        Self::new(
            ErrorCode::EmptyMessageList,
            "Transaction must contain exactly one message, got none",
        )
    }

    pub fn unsupported_message_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedMessageKind, "Only send messages can be signed")
            .with_details(kind)
    }

    pub fn too_many_messages(count: usize) -> Self {
        Self::new(
            ErrorCode::TooManyMessages,
            format!("Transaction must contain exactly one message, got {}", count),
        )
    }

    pub fn invalid_private_key(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPrivateKey, msg)
    }

    pub fn crypto_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CryptoError, msg)
    }

    pub fn signing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SigningFailed, msg)
    }

    pub fn verification_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::VerificationFailed, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for SignerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for SignerError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidPrivateKey,
    InvalidPublicKey,

    // Unsupported transaction shapes
    EmptyMessageList,
    UnsupportedMessageKind,
    TooManyMessages,

    // Crypto errors
    CryptoError,
    SigningFailed,
    VerificationFailed,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    Internal,
}

/// Result type alias for signing operations
pub type SignerResult<T> = Result<T, SignerError>;

// Conversions from common error types

impl From<KeyError> for SignerError {
    fn from(e: KeyError) -> Self {
        let code = match e {
            KeyError::InvalidPrivateKey(_) => ErrorCode::InvalidPrivateKey,
            KeyError::InvalidPublicKey(_) => ErrorCode::InvalidPublicKey,
            KeyError::InvalidSignature(_) => ErrorCode::VerificationFailed,
        };
        SignerError::new(code, e.to_string())
    }
}

impl From<serde_json::Error> for SignerError {
    fn from(e: serde_json::Error) -> Self {
        SignerError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for SignerError {
    fn from(e: hex::FromHexError) -> Self {
        SignerError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<base64::DecodeError> for SignerError {
    fn from(e: base64::DecodeError) -> Self {
        SignerError::new(ErrorCode::ParseError, format!("Base64 error: {}", e))
    }
}

impl From<prost::DecodeError> for SignerError {
    fn from(e: prost::DecodeError) -> Self {
        SignerError::new(ErrorCode::ParseError, format!("Protobuf decode error: {}", e))
    }
}

impl From<secp256k1::Error> for SignerError {
    fn from(e: secp256k1::Error) -> Self {
        SignerError::new(ErrorCode::CryptoError, format!("Secp256k1 error: {}", e))
    }
}
