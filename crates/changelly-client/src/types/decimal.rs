/*
[INPUT]:  Decimal amounts as sent by the service (strings or JSON numbers)
[OUTPUT]: rust_decimal values parsed at the client boundary
[POS]:    Data layer - the single place wire amounts become numbers
[UPDATE]: When the service changes how amounts are encoded
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::http::{ChangellyError, Result};

/// Parse a decimal string coming off the wire.
///
/// Accepts plain and scientific notation (`"1e-8"`); surrounding whitespace is
/// ignored.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|err| ChangellyError::InvalidDecimal(format!("{raw:?}: {err}")))
}

fn decimal_from_value(value: &Value) -> std::result::Result<Option<Decimal>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => parse_decimal(raw).map(Some).map_err(|err| err.to_string()),
        // Number's text form keeps the digits the service sent
        Value::Number(number) => parse_decimal(&number.to_string())
            .map(Some)
            .map_err(|err| err.to_string()),
        other => Err(format!("expected decimal string or number, got {other}")),
    }
}

/// A bare decimal `result`, as returned by `getMinAmount` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct WireDecimal(#[serde(deserialize_with = "deserialize_decimal")] pub Decimal);

/// Required amount that may arrive as `"1.5"` or `1.5`.
pub(crate) fn deserialize_decimal<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value(&value)
        .map_err(serde::de::Error::custom)?
        .ok_or_else(|| serde::de::Error::custom("missing decimal value"))
}

/// Amount where `null`, `""` and absence all mean zero.
pub(crate) fn deserialize_decimal_or_zero<'de, D>(
    deserializer: D,
) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value(&value)
        .map(|parsed| parsed.unwrap_or(Decimal::ZERO))
        .map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_decimal_option<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decimal_from_value(&value).map_err(serde::de::Error::custom)
}

pub(crate) fn serialize_decimal<S>(value: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.normalize().to_string())
}

pub(crate) fn serialize_decimal_option<S>(
    value: &Option<Decimal>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize_decimal(value, serializer),
        None => serializer.serialize_none(),
    }
}
