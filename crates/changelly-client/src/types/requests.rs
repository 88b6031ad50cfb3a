/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{deserialize_decimal, serialize_decimal};
use super::models::ExtraId;

/// Canonical form of a ticker as the service expects it.
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CurrencyPairParams {
    pub from: String,
    pub to: String,
}

impl CurrencyPairParams {
    pub(crate) fn new(from: &str, to: &str) -> Self {
        Self {
            from: normalize_ticker(from),
            to: normalize_ticker(to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ValidateAddressParams {
    pub currency: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TransactionIdParams {
    pub id: String,
}

/// One leg of an exchange-amount quote. Amounts go out as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeAmountRequest {
    pub from: String,
    pub to: String,
    #[serde(serialize_with = "serialize_decimal", deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
}

impl ExchangeAmountRequest {
    pub fn new(from: &str, to: &str, amount: Decimal) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    pub(crate) fn normalized(&self) -> Self {
        Self {
            from: normalize_ticker(&self.from),
            to: normalize_ticker(&self.to),
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub from: String,
    pub to: String,
    pub address: String,
    #[serde(serialize_with = "serialize_decimal", deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_id: Option<ExtraId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_extra_id: Option<ExtraId>,
}

impl CreateTransactionRequest {
    pub fn new(from: &str, to: &str, amount: Decimal, address: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            address: address.to_string(),
            amount,
            extra_id: None,
            refund_address: None,
            refund_extra_id: None,
        }
    }

    pub fn with_extra_id(mut self, extra_id: impl Into<ExtraId>) -> Self {
        self.extra_id = Some(extra_id.into());
        self
    }

    pub fn with_refund_address(mut self, address: &str) -> Self {
        self.refund_address = Some(address.to_string());
        self
    }

    pub fn with_refund_extra_id(mut self, extra_id: impl Into<ExtraId>) -> Self {
        self.refund_extra_id = Some(extra_id.into());
        self
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            from: normalize_ticker(&self.from),
            to: normalize_ticker(&self.to),
            ..self
        }
    }
}

/// Filters for `getTransactions`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_id: Option<ExtraId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn extra_id(mut self, extra_id: impl Into<ExtraId>) -> Self {
        self.extra_id = Some(extra_id.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            currency: self.currency.as_deref().map(normalize_ticker),
            ..self
        }
    }
}
