#[cfg(test)]
mod tests;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

pub type AccountId = u64;
pub type TransactionId = u64;
pub type DocumentNumber = u64;

/// Signed transaction amount. Serialized as a JSON number.
pub type Amount = Decimal;

/// Reads an optional amount from a JSON number.
///
/// Strings are refused outright. A non-zero number that does not survive the
/// conversion to [`Amount`] with its sign intact (too small or too large) is refused too.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Amount>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let amount = Decimal::from_str(&value.to_string())
        .map_err(|err| D::Error::custom(format!("amount [{value}] is not a valid decimal: {err}")))?;

    if amount.is_zero() && value != 0.0 {
        return Err(D::Error::custom(format!("amount [{value}] is too small to be represented")));
    }

    Ok(Some(amount))
}
