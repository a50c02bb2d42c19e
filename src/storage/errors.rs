use crate::types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No account found for id [{account_id}]")]
    NotFound {
        account_id: AccountId
    },
    #[error("Account [{account_id}] does not exist")]
    UnknownAccount {
        account_id: AccountId
    },
    #[error("Identifier [{0}] does not fit the backing store")]
    IdentifierOutOfRange(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError)
}

impl StorageError {
    pub fn not_found(account_id: AccountId) -> Self {
        Self::NotFound { account_id }
    }

    pub fn unknown_account(account_id: AccountId) -> Self {
        Self::UnknownAccount { account_id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
