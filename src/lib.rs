//! Cosmos Transaction Signer
//!
//! Produces signed, broadcast-ready Cosmos SDK transactions from an
//! unsigned transaction description and a secp256k1 private key.
//!
//! # Architecture
//!
//! Two signing pipelines share one input type:
//! - **Protobuf / direct**: `body` + `auth_info` → `sign_doc` → `signature` → `tx_raw`
//! - **Legacy JSON**: `amino_json` sign document → `signature` → signed JSON
//!
//! `signer::Signer` dispatches between them. The `ffi` module exposes the
//! same entry points over a C ABI with JSON in and JSON out.
//!
//! # Security
//!
//! Private key bytes are held in a zeroizing buffer and are never written
//! to logs or to serialized output.
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_signer::{Signer, SigningInput, PrivateKeyBytes};
//!
//! let input = SigningInput::from_json(request_json)?
//!     .with_private_key(PrivateKeyBytes::from_hex(key_hex)?);
//! let output = Signer::sign(&input)?;
//! println!("{}", output.serialized_base64);
//! ```

pub mod logging;
pub mod error;
pub mod config;
pub mod serde_helpers;
pub mod keys;
pub mod types;
pub mod proto;
pub mod coin;
pub mod body;
pub mod auth_info;
pub mod sign_doc;
pub mod signature;
pub mod tx_raw;
pub mod amino_json;
pub mod signer;
pub mod ffi;

pub use config::SignerConfig;
pub use error::{ErrorCode, SignerError, SignerResult};
pub use keys::{PrivateKey, PrivateKeyBytes};
pub use signature::{sign_preimage, strip_recovery_byte, verify_signature};
pub use signer::Signer;
pub use types::*;

pub use ffi::{cosmos_signer_free_string, cosmos_signer_sign, cosmos_signer_sign_json};
