use serde::{Deserialize, Serialize};

use crate::types::{AccountId, DocumentNumber};

/// An account holder's record.
///
/// Accounts are immutable once stored; the ledger never updates or deletes them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Assigned by the store on creation.
    pub account_id: AccountId,
    /// External identifier of the holder (e.g. a national ID). Always positive.
    pub document_number: DocumentNumber
}

impl Account {
    pub fn new(account_id: AccountId, document_number: DocumentNumber) -> Self {
        Self {
            account_id,
            document_number
        }
    }
}
