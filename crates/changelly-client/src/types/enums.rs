/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an exchange transaction as reported by `getStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    New,
    Waiting,
    Confirming,
    Exchanging,
    Sending,
    Finished,
    Failed,
    Refunded,
    Overdue,
    Hold,
    Expired,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 11] = [
        TransactionStatus::New,
        TransactionStatus::Waiting,
        TransactionStatus::Confirming,
        TransactionStatus::Exchanging,
        TransactionStatus::Sending,
        TransactionStatus::Finished,
        TransactionStatus::Failed,
        TransactionStatus::Refunded,
        TransactionStatus::Overdue,
        TransactionStatus::Hold,
        TransactionStatus::Expired,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::New => "new",
            TransactionStatus::Waiting => "waiting",
            TransactionStatus::Confirming => "confirming",
            TransactionStatus::Exchanging => "exchanging",
            TransactionStatus::Sending => "sending",
            TransactionStatus::Finished => "finished",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
            TransactionStatus::Overdue => "overdue",
            TransactionStatus::Hold => "hold",
            TransactionStatus::Expired => "expired",
        }
    }

    /// No further transitions are expected once a transaction reaches one of
    /// these states. `hold` is excluded: it resumes after a KYC/AML check.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Finished
                | TransactionStatus::Failed
                | TransactionStatus::Refunded
                | TransactionStatus::Overdue
                | TransactionStatus::Expired
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
