//! Amount to ledger coin conversion
//!
//! The ledger carries coin amounts as base-10 strings so that large values
//! survive JSON round trips without precision loss.

use crate::proto;
use crate::types::Amount;

/// Convert an [`Amount`] into the protobuf `Coin` record
pub fn convert_coin(amount: &Amount) -> proto::Coin {
    proto::Coin {
        denom: amount.denom.clone(),
        amount: amount.amount.to_string(),
    }
}

/// Convert a list of amounts, preserving order
pub fn convert_coins(amounts: &[Amount]) -> Vec<proto::Coin> {
    amounts.iter().map(convert_coin).collect()
}
