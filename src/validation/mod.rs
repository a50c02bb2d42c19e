//! Transport-independent validation of candidate ledger requests.
//!
//! Transaction rules are evaluated independently so that every problem with a
//! request is reported at once, in a fixed order.

mod errors;

use crate::models::{is_valid_operation_amount, is_valid_operation_type, NewTransaction, OperationType};
use crate::types::{AccountId, Amount, DocumentNumber};

pub use errors::{ValidationError, Violations};

pub const ACCOUNT_ID_VIOLATION: &str = "The account_id must be a valid positive integer.";
pub const OPERATION_TYPE_VIOLATION: &str = "The operation_type_id must be one of the following valid values: 1, 2, 3, 4";
pub const AMOUNT_SIGN_VIOLATION: &str = "Purchases and withdraw operations must have a negative amount. Payment operations must have a positive amount.";

/// A transaction as submitted by a caller, before any rule has been checked.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TransactionRequest {
    pub account_id: AccountId,
    pub operation_type_id: u32,
    pub amount: Amount
}

/// Returns every rule `request` breaks, in evaluation order. Empty means valid.
pub fn transaction_violations(request: &TransactionRequest) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if request.account_id == 0 {
        violations.push(ACCOUNT_ID_VIOLATION);
    }

    if !is_valid_operation_type(request.operation_type_id) {
        violations.push(OPERATION_TYPE_VIOLATION);
    }

    if !is_valid_operation_amount(request.operation_type_id, request.amount) {
        violations.push(AMOUNT_SIGN_VIOLATION);
    }

    violations
}

/// Checks `request` and, when it breaks no rule, returns it as a typed [`NewTransaction`].
pub fn validate_transaction(request: &TransactionRequest) -> Result<NewTransaction, Violations> {
    let violations = transaction_violations(request);

    if !violations.is_empty() {
        return Err(Violations::new(violations));
    }

    let operation_type = OperationType::try_from(request.operation_type_id)
        .map_err(|_| Violations::new(vec![OPERATION_TYPE_VIOLATION]))?;

    Ok(NewTransaction {
        account_id: request.account_id,
        operation_type,
        amount: request.amount
    })
}

pub fn validate_document_number(document_number: DocumentNumber) -> Result<DocumentNumber, ValidationError> {
    if document_number == 0 {
        return Err(ValidationError::InvalidDocumentNumber);
    }

    Ok(document_number)
}

pub fn validate_account_id(account_id: AccountId) -> Result<AccountId, ValidationError> {
    if account_id == 0 {
        return Err(ValidationError::InvalidAccountId);
    }

    Ok(account_id)
}
