/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{
    deserialize_decimal, deserialize_decimal_option, deserialize_decimal_or_zero,
    serialize_decimal, serialize_decimal_option,
};
use super::enums::TransactionStatus;

/// Secondary destination identifier (memo, tag, payment id).
///
/// Some currencies use numeric tags; the value is sent exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraId {
    Text(String),
    Number(u64),
}

impl From<&str> for ExtraId {
    fn from(value: &str) -> Self {
        ExtraId::Text(value.to_string())
    }
}

impl From<String> for ExtraId {
    fn from(value: String) -> Self {
        ExtraId::Text(value)
    }
}

impl From<u64> for ExtraId {
    fn from(value: u64) -> Self {
        ExtraId::Number(value)
    }
}

impl fmt::Display for ExtraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraId::Text(text) => f.write_str(text),
            ExtraId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Full currency descriptor from `getCurrenciesFull`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub fix_rate_enabled: bool,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_count")]
    pub payin_confirmations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_id_name: Option<String>,
    #[serde(default)]
    pub address_url: String,
    #[serde(default)]
    pub transaction_url: String,
    #[serde(default)]
    pub image: String,
    /// Seconds a fixed-rate quote stays locked.
    #[serde(default, deserialize_with = "serde_helpers::deserialize_count")]
    pub fixed_time: u32,
}

impl Currency {
    /// Older responses omit `ticker`; `name` carries the same code.
    pub(crate) fn with_ticker_fallback(mut self) -> Self {
        if self.ticker.is_empty() {
            self.ticker = self.name.clone();
        }
        self
    }

    /// Whether the currency needs an extra-id next to the address.
    pub fn requires_extra_id(&self) -> bool {
        self.extra_id_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Transaction record returned by `createTransaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub api_extra_fee: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub changelly_fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payin_extra_id: Option<ExtraId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_extra_id: Option<ExtraId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_extra_id: Option<ExtraId>,
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub amount_expected_from: Decimal,
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub amount_expected_to: Decimal,
    pub status: TransactionStatus,
    pub currency_from: String,
    pub currency_to: String,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub amount_to: Decimal,
    pub payin_address: String,
    pub payout_address: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub kyc_required: bool,
}

/// Transaction as listed by `getTransactions`, with settlement details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_count")]
    pub payin_confirmations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payin_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_hash: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub money_received: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub money_sent: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub network_fee: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_option",
        serialize_with = "serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_option",
        serialize_with = "serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_from: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_option",
        serialize_with = "serialize_decimal_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_url: Option<String>,
}

impl std::ops::Deref for ExtendedTransaction {
    type Target = Transaction;

    fn deref(&self) -> &Self::Target {
        &self.transaction
    }
}

/// One quote of a batch `getExchangeAmount` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeAmount {
    pub from: String,
    pub to: String,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub network_fee: Decimal,
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub amount: Decimal,
    /// Amount the user receives, fees included.
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub result: Decimal,
    /// Amount before fees.
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub visible_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub rate: Decimal,
    #[serde(
        default,
        deserialize_with = "deserialize_decimal_or_zero",
        serialize_with = "serialize_decimal"
    )]
    pub fee: Decimal,
}

/// Outcome of `validateAddress`.
///
/// The service answers either with a bare boolean or with
/// `{"result": bool, "message": "..."}`; both decode into this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_helpers::AddressValidationWire")]
pub struct AddressValidation {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

mod serde_helpers {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::AddressValidation;

    // Above this a unix timestamp is taken to be in milliseconds.
    const MILLIS_THRESHOLD: i64 = 100_000_000_000;

    /// Accepts RFC 3339 text or unix seconds/milliseconds (number or string).
    pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let unix = match &value {
            Value::Number(number) => number.as_i64(),
            Value::String(raw) => {
                if let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) {
                    return Ok(parsed.with_timezone(&Utc));
                }
                raw.trim().parse::<i64>().ok()
            }
            _ => None,
        };

        let unix = unix
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}")))?;
        let parsed = if unix.abs() >= MILLIS_THRESHOLD {
            Utc.timestamp_millis_opt(unix).single()
        } else {
            Utc.timestamp_opt(unix, 0).single()
        };
        parsed.ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {unix}")))
    }

    /// Counts the service sometimes sends as strings (`"3"`).
    pub fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(0),
            Value::Number(number) => number
                .as_u64()
                .and_then(|count| u32::try_from(count).ok())
                .ok_or_else(|| serde::de::Error::custom(format!("invalid count: {value}"))),
            Value::String(raw) if raw.trim().is_empty() => Ok(0),
            Value::String(raw) => raw.trim().parse::<u32>().map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom(format!("invalid count: {value}"))),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub enum AddressValidationWire {
        Flag(bool),
        Detailed {
            result: bool,
            #[serde(default)]
            message: Option<String>,
        },
    }

    impl From<AddressValidationWire> for AddressValidation {
        fn from(wire: AddressValidationWire) -> Self {
            match wire {
                AddressValidationWire::Flag(result) => AddressValidation {
                    result,
                    message: None,
                },
                AddressValidationWire::Detailed { result, message } => {
                    AddressValidation { result, message }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().expect("decimal literal")
    }

    #[test]
    fn test_transaction_from_create_response() {
        let raw = r#"{
            "id": "jev5lt0qmg26h48v",
            "apiExtraFee": "0",
            "changellyFee": "0.5",
            "payinExtraId": null,
            "payoutExtraId": null,
            "amountExpectedFrom": 2.14,
            "amountExpectedTo": "1.98",
            "status": "new",
            "currencyFrom": "btc",
            "currencyTo": "ltc",
            "amountTo": 0,
            "payinAddress": "3PbJ6bTZ5S1zpS2Q6Kx4a8Q2zZ3Yk1QzrA",
            "payoutAddress": "Lapj4kBqZzmwUvXnPSyBNMPsJ2EtQbF6jd",
            "createdAt": "2018-09-24T10:31:18.000Z",
            "kycRequired": false
        }"#;

        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.amount_expected_to, dec("1.98"));
        assert_eq!(tx.amount_expected_from, dec("2.14"));
        assert_eq!(tx.changelly_fee, dec("0.5"));
        assert_eq!(tx.amount_to, Decimal::ZERO);
        assert_eq!(tx.status, TransactionStatus::New);
        assert_eq!(tx.payin_extra_id, None);
        assert_eq!(tx.created_at.timestamp(), 1_537_785_078);
        assert!(!tx.kyc_required);
    }

    #[test]
    fn test_extended_transaction_from_listing() {
        let raw = r#"{
            "id": "6qfyn33ohmwtrk2w",
            "createdAt": 1527591128,
            "payinConfirmations": "2",
            "status": "finished",
            "currencyFrom": "eth",
            "currencyTo": "xrp",
            "payinAddress": "0x4d8e7b0fa6b8d1e2d0b8c6f1e8a6f7a5d3c2b1a0",
            "payinExtraId": null,
            "payinHash": "0xabc",
            "amountExpectedFrom": "1",
            "payoutAddress": "rLdHvsDjC5aKR7P7Rj8zVeZUzZyf1VfXhw",
            "payoutExtraId": 123456,
            "payoutHash": "F2C6",
            "refundHash": null,
            "amountFrom": "1",
            "amountTo": "1342.5",
            "amountExpectedTo": "1342.5",
            "networkFee": "0.25",
            "changellyFee": "0.5",
            "apiExtraFee": "0",
            "totalFee": "0.75",
            "moneyReceived": "1",
            "moneySent": "1342.5"
        }"#;

        let tx: ExtendedTransaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.id, "6qfyn33ohmwtrk2w");
        assert_eq!(tx.created_at.timestamp(), 1_527_591_128);
        assert_eq!(tx.payin_confirmations, 2);
        assert_eq!(tx.payout_extra_id, Some(ExtraId::Number(123_456)));
        assert_eq!(tx.payin_hash.as_deref(), Some("0xabc"));
        assert_eq!(tx.refund_hash, None);
        assert_eq!(tx.network_fee, dec("0.25"));
        assert_eq!(tx.money_sent, dec("1342.5"));
        assert_eq!(tx.total_fee, Some(dec("0.75")));
        assert_eq!(tx.rate, None);
        assert!(tx.status.is_final());
    }

    #[test]
    fn test_currency_descriptor() {
        let raw = r#"{
            "name": "xrp",
            "fullName": "Ripple",
            "enabled": true,
            "fixRateEnabled": false,
            "payinConfirmations": 1,
            "extraIdName": "Destination tag",
            "addressUrl": "https://xrpcharts.ripple.com/#/graph/%1$s",
            "transactionUrl": "https://xrpcharts.ripple.com/#/transactions/%1$s",
            "image": "https://web-api.changelly.com/api/coins/xrp.png",
            "fixedTime": 1200
        }"#;

        let currency: Currency = serde_json::from_str::<Currency>(raw)
            .unwrap()
            .with_ticker_fallback();
        assert_eq!(currency.ticker, "xrp");
        assert_eq!(currency.full_name, "Ripple");
        assert_eq!(currency.fixed_time, 1200);
        assert!(currency.requires_extra_id());
    }

    #[test]
    fn test_exchange_amount_quote() {
        let raw = r#"{
            "from": "btc",
            "to": "eth",
            "networkFee": "0.0044",
            "amount": "1",
            "result": "26.88",
            "visibleAmount": "27.02",
            "rate": "27.02",
            "fee": "0.135"
        }"#;

        let quote: ExchangeAmount = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.result, dec("26.88"));
        assert_eq!(quote.visible_amount, dec("27.02"));
        assert_eq!(quote.fee, dec("0.135"));
    }

    #[test]
    fn test_address_validation_shapes() {
        let flag: AddressValidation = serde_json::from_str("true").unwrap();
        assert!(flag.result);
        assert_eq!(flag.message, None);

        let detailed: AddressValidation =
            serde_json::from_str(r#"{"result": false, "message": "Invalid address"}"#).unwrap();
        assert!(!detailed.result);
        assert_eq!(detailed.message.as_deref(), Some("Invalid address"));
    }

    #[test]
    fn test_timestamp_in_milliseconds() {
        let raw = r#"{
            "id": "x",
            "amountExpectedFrom": "1",
            "amountExpectedTo": "2",
            "status": "waiting",
            "currencyFrom": "btc",
            "currencyTo": "eth",
            "payinAddress": "a",
            "payoutAddress": "b",
            "createdAt": 1527591128000
        }"#;

        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.created_at.timestamp(), 1_527_591_128);
    }

    #[test]
    fn test_extra_id_serializes_as_given() {
        assert_eq!(serde_json::to_string(&ExtraId::from(42u64)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&ExtraId::from("memo")).unwrap(), "\"memo\"");
    }
}
