use thiserror::Error;

use crate::storage::StorageError;
use crate::validation::{ValidationError, Violations};

/// How the boundary layer should classify a failed request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound
}

/// Outcome of a rejected ledger request.
///
/// The display text is the client-facing message. Store failures keep the
/// underlying [`StorageError`] as their source for logging only.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("The document_number must be a valid positive integer.")]
    InvalidDocumentNumber,
    #[error("The account_id must be a valid positive integer.")]
    InvalidAccountId,
    #[error("The account_id and operation_type_id must be valid positive integers. The amount must be a valid decimal.")]
    MalformedTransaction,
    #[error("{0}")]
    InvalidTransaction(Violations),
    #[error("An error occurred when creating the account.")]
    AccountCreationFailed {
        #[source]
        source: StorageError
    },
    #[error("No account found for the provided account ID.")]
    AccountNotFound {
        #[source]
        source: StorageError
    },
    #[error("An error occurred when fetching the account from the database.")]
    AccountFetchFailed {
        #[source]
        source: StorageError
    },
    #[error("The provided account does not exist.")]
    UnknownAccount {
        #[source]
        source: StorageError
    }
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccountNotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidRequest
        }
    }

    pub fn account_creation_failed(source: StorageError) -> Self {
        Self::AccountCreationFailed { source }
    }

    /// Keeps "not found" apart from every other lookup failure.
    pub fn account_lookup_failed(source: StorageError) -> Self {
        if source.is_not_found() {
            Self::AccountNotFound { source }
        } else {
            Self::AccountFetchFailed { source }
        }
    }

    pub fn unknown_account(source: StorageError) -> Self {
        Self::UnknownAccount { source }
    }
}

impl From<ValidationError> for LedgerError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::InvalidDocumentNumber => Self::InvalidDocumentNumber,
            ValidationError::InvalidAccountId => Self::InvalidAccountId
        }
    }
}

impl From<Violations> for LedgerError {
    fn from(violations: Violations) -> Self {
        Self::InvalidTransaction(violations)
    }
}
