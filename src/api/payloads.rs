use serde::Deserialize;

use crate::types::{deserialize_amount, AccountId, Amount, DocumentNumber};
use crate::validation::TransactionRequest;

/// Body of `POST /accounts`.
///
/// A missing or `null` document number reads as 0 and is rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPayload {
    #[serde(default)]
    pub document_number: Option<DocumentNumber>
}

impl AccountPayload {
    pub fn document_number(&self) -> DocumentNumber {
        self.document_number.unwrap_or_default()
    }
}

/// Body of `POST /transactions`.
///
/// Missing or `null` fields read as 0. Negative ids, strings, other
/// non-numeric values and amounts that would lose their sign fail to parse at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionPayload {
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub operation_type_id: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: Option<Amount>
}

impl From<TransactionPayload> for TransactionRequest {
    fn from(payload: TransactionPayload) -> Self {
        Self {
            account_id: payload.account_id.unwrap_or_default(),
            operation_type_id: payload.operation_type_id.unwrap_or_default(),
            amount: payload.amount.unwrap_or_default()
        }
    }
}
