//! Transaction body builder (`TxBody`)

use prost::Message as _;

use crate::coin::convert_coins;
use crate::error::SignerResult;
use crate::proto::{self, pack_any};
use crate::types::{SendCoins, SigningInput};

/// Timeout height written into every body; zero means no timeout
pub const TIMEOUT_HEIGHT: u64 = 0;

/// Build the protobuf `MsgSend` for a coin transfer
pub fn build_msg_send(send: &SendCoins) -> proto::MsgSend {
    proto::MsgSend {
        from_address: send.from_address.clone(),
        to_address: send.to_address.clone(),
        amount: convert_coins(&send.amounts),
    }
}

/// Assemble the `TxBody` record
///
/// Fails with `EmptyMessageList`, `UnsupportedMessageKind` or
/// `TooManyMessages` rather than producing an empty body.
pub fn build_tx_body(input: &SigningInput) -> SignerResult<proto::TxBody> {
    let send = input.send_message()?;

    Ok(proto::TxBody {
        messages: vec![pack_any(&build_msg_send(send))],
        memo: input.memo.clone(),
        timeout_height: TIMEOUT_HEIGHT,
    })
}

/// Serialized `TxBody` bytes
pub fn serialize_tx_body(input: &SigningInput) -> SignerResult<Vec<u8>> {
    Ok(build_tx_body(input)?.encode_to_vec())
}
