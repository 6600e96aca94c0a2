//! Core types for the Cosmos signer
//!
//! These types are shared by both signing pipelines, the CLI and the C ABI.
//! JSON field names follow the protobuf-JSON mapping (camelCase); the
//! snake_case proto names are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{SignerError, SignerResult};
use crate::keys::PrivateKeyBytes;
use crate::serde_helpers::{hex_bytes, u64_string_or_number};

/// Message kind name of a coin transfer, in both accepted spellings
pub const SEND_COINS_KIND: &str = "sendCoinsMessage";
const SEND_COINS_KIND_SNAKE: &str = "send_coins_message";

/// Which preimage encoding to sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SigningMode {
    /// Legacy canonical-JSON preimage
    #[serde(rename = "JSON")]
    Json,
    /// Binary protobuf ("direct") preimage
    #[default]
    Protobuf,
}

impl SigningMode {
    /// Lenient parse: only an explicit JSON selector picks the JSON path
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim().eq_ignore_ascii_case("json") {
            SigningMode::Json
        } else {
            SigningMode::Protobuf
        }
    }
}

impl<'de> Deserialize<'de> for SigningMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 0 is the JSON enum value on the wire; everything else falls back to protobuf
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => SigningMode::from_selector(&s),
            Value::Number(n) if n.as_u64() == Some(0) => SigningMode::Json,
            _ => SigningMode::Protobuf,
        })
    }
}

/// Broadcast mode embedded in the legacy signed JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    #[default]
    #[serde(alias = "BLOCK")]
    Block,
    #[serde(alias = "SYNC")]
    Sync,
    #[serde(alias = "ASYNC")]
    Async,
}

impl BroadcastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastMode::Block => "block",
            BroadcastMode::Sync => "sync",
            BroadcastMode::Async => "async",
        }
    }
}

/// A denomination and a non-negative integer amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
    pub denom: String,
    #[serde(with = "u64_string_or_number")]
    pub amount: u64,
}

impl Amount {
    pub fn new(denom: impl Into<String>, amount: u64) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Transaction fee: coins paid plus the gas limit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    pub amounts: Vec<Amount>,
    #[serde(with = "u64_string_or_number")]
    pub gas: u64,
}

/// Coin transfer between two bech32 addresses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SendCoins {
    #[serde(alias = "from_address")]
    pub from_address: String,
    #[serde(alias = "to_address")]
    pub to_address: String,
    pub amounts: Vec<Amount>,
    /// Overrides the legacy JSON message type (`cosmos-sdk/MsgSend`)
    #[serde(alias = "type_prefix", skip_serializing_if = "Option::is_none")]
    pub type_prefix: Option<String>,
}

/// A transaction message
///
/// On the JSON wire a message is an object with a single key naming its
/// kind. Only coin transfers are signable; other kinds are kept by name so
/// the signer can refuse them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub enum Message {
    Send(SendCoins),
    Unsupported(String),
}

impl Message {
    /// Kind name as it appears on the JSON wire
    pub fn kind(&self) -> &str {
        match self {
            Message::Send(_) => SEND_COINS_KIND,
            Message::Unsupported(kind) => kind,
        }
    }
}

impl TryFrom<Map<String, Value>> for Message {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "message must name exactly one kind, found {} keys",
                map.len()
            ));
        }

        let Some((kind, body)) = map.into_iter().next() else {
            return Err("message must name exactly one kind".to_string());
        };
        match kind.as_str() {
            SEND_COINS_KIND | SEND_COINS_KIND_SNAKE => serde_json::from_value(body)
                .map(Message::Send)
                .map_err(|e| format!("invalid {}: {}", SEND_COINS_KIND, e)),
            _ => Ok(Message::Unsupported(kind)),
        }
    }
}

impl From<Message> for Map<String, Value> {
    fn from(message: Message) -> Self {
        let mut map = Map::new();
        match message {
            Message::Send(send) => {
                let body = serde_json::to_value(send).unwrap_or_default();
                map.insert(SEND_COINS_KIND.to_string(), body);
            }
            Message::Unsupported(kind) => {
                map.insert(kind, Value::Object(Map::new()));
            }
        }
        map
    }
}

/// Everything needed to produce one signed transaction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SigningInput {
    #[serde(alias = "signing_mode")]
    pub signing_mode: SigningMode,
    #[serde(alias = "account_number", with = "u64_string_or_number")]
    pub account_number: u64,
    #[serde(alias = "chain_id")]
    pub chain_id: String,
    pub fee: Fee,
    pub memo: String,
    #[serde(with = "u64_string_or_number")]
    pub sequence: u64,
    pub messages: Vec<Message>,
    /// Broadcast mode for the legacy JSON envelope
    pub mode: BroadcastMode,
    /// Never read from or written to JSON; injected by the caller
    #[serde(skip)]
    pub private_key: PrivateKeyBytes,
}

impl SigningInput {
    /// Parse a JSON signing request. The private key must be supplied separately.
    pub fn from_json(json: &str) -> SignerResult<Self> {
        let input: SigningInput = serde_json::from_str(json)?;
        Ok(input)
    }

    pub fn with_private_key(mut self, key: PrivateKeyBytes) -> Self {
        self.private_key = key;
        self
    }

    /// The single coin transfer this transaction carries
    pub fn send_message(&self) -> SignerResult<&SendCoins> {
        match self.messages.as_slice() {
            [] => Err(SignerError::empty_message_list()),
            [Message::Send(send)] => Ok(send),
            [Message::Unsupported(kind)] => Err(SignerError::unsupported_message_kind(kind.clone())),
            more => Err(SignerError::too_many_messages(more.len())),
        }
    }
}

/// Result of one signing call
///
/// Fields that belong to the other signing mode are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SigningOutput {
    /// 64-byte R || S signature
    #[serde(with = "hex_bytes")]
    pub signature: Vec<u8>,
    /// Signed legacy JSON document (JSON mode only)
    pub json: String,
    /// Serialized TxRaw (protobuf mode only)
    #[serde(with = "hex_bytes")]
    pub serialized: Vec<u8>,
    /// Base64 of `serialized` (protobuf mode only)
    pub serialized_base64: String,
}

/// API response wrapper for FFI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<SignerError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: SignerError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed","details":null}}"#.to_string()
        })
    }
}
