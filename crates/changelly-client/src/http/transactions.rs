/*
[INPUT]:  Transaction requests, filters and ids
[OUTPUT]: Created transactions, transaction listings and statuses
[POS]:    HTTP layer - exchange transaction methods
[UPDATE]: When adding transaction endpoints or changing response format
*/

use crate::http::{ChangellyClient, Result};
use crate::types::{
    CreateTransactionRequest, ExtendedTransaction, Transaction, TransactionFilter,
    TransactionIdParams, TransactionStatus,
};

impl ChangellyClient {
    /// Create an exchange transaction.
    ///
    /// RPC createTransaction. Not idempotent: a failed call may still have
    /// created the transaction upstream, so do not resend blindly.
    pub async fn create_transaction(&self, req: CreateTransactionRequest) -> Result<Transaction> {
        let params = req.normalized();
        let data = self
            .send_request::<_, Transaction>("createTransaction", &params)
            .await?;
        Ok(data.result)
    }

    /// List transactions matching `filter`
    ///
    /// RPC getTransactions
    pub async fn get_transactions(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<ExtendedTransaction>> {
        let params = filter.normalized();
        let data = self
            .send_request::<_, Vec<ExtendedTransaction>>("getTransactions", &params)
            .await?;
        Ok(data.result)
    }

    /// Current status of transaction `id`
    ///
    /// RPC getStatus
    pub async fn get_status(&self, id: &str) -> Result<TransactionStatus> {
        let params = TransactionIdParams { id: id.to_string() };
        let data = self
            .send_request::<_, TransactionStatus>("getStatus", &params)
            .await?;
        Ok(data.result)
    }
}
