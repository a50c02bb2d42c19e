use serde::{Deserialize, Serialize};

use crate::models::OperationType;
use crate::types::{AccountId, Amount, TransactionId};

/// A persisted ledger entry.
///
/// The amount is stored exactly as submitted: its sign is never flipped or normalized.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the store on creation.
    pub transaction_id: TransactionId,
    /// The account the entry is booked against.
    pub account_id: AccountId,
    /// Category of the entry, travelling as its numeric id.
    #[serde(rename = "operation_type_id")]
    pub operation_type: OperationType,
    /// Signed amount of the entry.
    pub amount: Amount
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub operation_type: OperationType,
    pub amount: Amount
}

impl NewTransaction {
    pub fn into_transaction(self, transaction_id: TransactionId) -> Transaction {
        Transaction {
            transaction_id,
            account_id: self.account_id,
            operation_type: self.operation_type,
            amount: self.amount
        }
    }
}
