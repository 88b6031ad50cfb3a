/*
[INPUT]:  Currency tickers and destination addresses
[OUTPUT]: Supported currency lists and address validation results
[POS]:    HTTP layer - currency metadata methods
[UPDATE]: When adding currency endpoints or changing response format
*/

use crate::http::{ChangellyClient, Result};
use crate::types::{AddressValidation, Currency, ValidateAddressParams, normalize_ticker};

impl ChangellyClient {
    /// List tickers of currencies currently available for exchange
    ///
    /// RPC getCurrencies
    pub async fn get_currencies(&self) -> Result<Vec<String>> {
        let data = self
            .send_request::<_, Vec<String>>("getCurrencies", &serde_json::json!({}))
            .await?;
        Ok(data.result)
    }

    /// List currencies with full metadata, disabled ones included
    ///
    /// RPC getCurrenciesFull
    pub async fn get_currencies_full(&self) -> Result<Vec<Currency>> {
        let data = self
            .send_request::<_, Vec<Currency>>("getCurrenciesFull", &serde_json::json!({}))
            .await?;
        Ok(data
            .result
            .into_iter()
            .map(Currency::with_ticker_fallback)
            .collect())
    }

    /// Check whether `address` is a valid destination for `currency`
    ///
    /// RPC validateAddress
    pub async fn validate_address(&self, currency: &str, address: &str) -> Result<bool> {
        Ok(self.validate_address_detailed(currency, address).await?.result)
    }

    /// Same as [`validate_address`](Self::validate_address), keeping the
    /// service's explanation when the address is rejected
    pub async fn validate_address_detailed(
        &self,
        currency: &str,
        address: &str,
    ) -> Result<AddressValidation> {
        let params = ValidateAddressParams {
            currency: normalize_ticker(currency),
            address: address.to_string(),
        };
        let data = self
            .send_request::<_, AddressValidation>("validateAddress", &params)
            .await?;
        Ok(data.result)
    }
}
