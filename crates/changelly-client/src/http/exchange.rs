/*
[INPUT]:  Currency pairs and amounts
[OUTPUT]: Minimum amounts and exchange quotes as decimals
[POS]:    HTTP layer - rate and amount estimation methods
[UPDATE]: When adding quote endpoints or changing response format
*/

use rust_decimal::Decimal;

use crate::http::{ChangellyClient, ChangellyError, Result};
use crate::types::decimal::WireDecimal;
use crate::types::{CurrencyPairParams, ExchangeAmount, ExchangeAmountRequest};

impl ChangellyClient {
    /// Minimum amount of `from` accepted for an exchange into `to`
    ///
    /// RPC getMinAmount
    pub async fn get_min_amount(&self, from: &str, to: &str) -> Result<Decimal> {
        let params = CurrencyPairParams::new(from, to);
        let data = self
            .send_request::<_, WireDecimal>("getMinAmount", &params)
            .await?;
        Ok(data.result.0)
    }

    /// Estimated amount of `to` received for `amount` of `from`, fees included
    ///
    /// RPC getExchangeAmount
    pub async fn get_exchange_amount(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal> {
        let params = ExchangeAmountRequest::new(from, to, amount).normalized();
        let data = self
            .send_request::<_, WireDecimal>("getExchangeAmount", &params)
            .await?;
        Ok(data.result.0)
    }

    /// Quote several pairs in one call.
    ///
    /// RPC getExchangeAmount with array params. Quotes come back in request
    /// order; an empty slice returns without a network call.
    pub async fn get_bulk_exchange_amount(
        &self,
        requests: &[ExchangeAmountRequest],
    ) -> Result<Vec<ExchangeAmount>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let params: Vec<ExchangeAmountRequest> =
            requests.iter().map(ExchangeAmountRequest::normalized).collect();
        let data = self
            .send_request::<_, Vec<ExchangeAmount>>("getExchangeAmount", &params)
            .await?;

        if data.result.len() != params.len() {
            return Err(ChangellyError::MalformedResponse(format!(
                "expected {} quotes, got {}",
                params.len(),
                data.result.len()
            )));
        }
        Ok(data.result)
    }
}
