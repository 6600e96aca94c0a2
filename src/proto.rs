//! Protobuf wire records for Cosmos SDK transactions
//!
//! Hand-declared `prost` messages mirroring `cosmos.base.v1beta1`,
//! `cosmos.bank.v1beta1`, `cosmos.crypto.secp256k1` and `cosmos.tx.v1beta1`.
//! Only the fields this signer populates are declared; prost encodes fields
//! in tag order and omits zero values, matching the ledger's canonical form.

use prost::Message;
pub use prost_types::Any;

/// Prefix prepended to the type name when packing an `Any`.
///
/// Must stay empty (not `type.googleapis.com`): validators only resolve
/// `/cosmos.bank.v1beta1.MsgSend`-style urls and reject anything else.
pub const ANY_TYPE_URL_PREFIX: &str = "";

/// Fully-qualified protobuf type name of a message
pub trait TypeName {
    const TYPE_NAME: &'static str;
}

/// Type url for `M` under [`ANY_TYPE_URL_PREFIX`]
pub fn type_url<M: TypeName>() -> String {
    format!("{}/{}", ANY_TYPE_URL_PREFIX, M::TYPE_NAME)
}

/// Pack a message into an `Any`
pub fn pack_any<M: Message + TypeName>(msg: &M) -> Any {
    Any {
        type_url: type_url::<M>(),
        value: msg.encode_to_vec(),
    }
}

/// cosmos.base.v1beta1.Coin
#[derive(Clone, PartialEq, Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

/// cosmos.bank.v1beta1.MsgSend
#[derive(Clone, PartialEq, Message)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

impl TypeName for MsgSend {
    const TYPE_NAME: &'static str = "cosmos.bank.v1beta1.MsgSend";
}

/// cosmos.crypto.secp256k1.PubKey
#[derive(Clone, PartialEq, Message)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

impl TypeName for PubKey {
    const TYPE_NAME: &'static str = "cosmos.crypto.secp256k1.PubKey";
}

/// cosmos.tx.v1beta1.TxBody
#[derive(Clone, PartialEq, Message)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
}

/// cosmos.tx.signing.v1beta1.SignMode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SignMode {
    Unspecified = 0,
    Direct = 1,
    Textual = 2,
    LegacyAminoJson = 127,
}

/// cosmos.tx.v1beta1.ModeInfo
#[derive(Clone, PartialEq, Message)]
pub struct ModeInfo {
    #[prost(oneof = "mode_info::Sum", tags = "1")]
    pub sum: Option<mode_info::Sum>,
}

pub mod mode_info {
    use prost::Message;

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Single(Single),
    }

    /// Single signer using one sign mode
    #[derive(Clone, PartialEq, Message)]
    pub struct Single {
        #[prost(enumeration = "super::SignMode", tag = "1")]
        pub mode: i32,
    }
}

impl ModeInfo {
    pub fn single(mode: SignMode) -> Self {
        Self {
            sum: Some(mode_info::Sum::Single(mode_info::Single { mode: mode as i32 })),
        }
    }
}

/// cosmos.tx.v1beta1.SignerInfo
#[derive(Clone, PartialEq, Message)]
pub struct SignerInfo {
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<Any>,
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfo>,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

/// cosmos.tx.v1beta1.Fee
#[derive(Clone, PartialEq, Message)]
pub struct Fee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

/// cosmos.tx.v1beta1.AuthInfo
#[derive(Clone, PartialEq, Message)]
pub struct AuthInfo {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
}

/// cosmos.tx.v1beta1.SignDoc
#[derive(Clone, PartialEq, Message)]
pub struct SignDoc {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
}

/// cosmos.tx.v1beta1.TxRaw
#[derive(Clone, PartialEq, Message)]
pub struct TxRaw {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}
