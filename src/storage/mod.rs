mod errors;
mod memory_storage;
mod postgres_storage;

use std::future::Future;

use crate::models::{Account, NewTransaction, Transaction};
use crate::types::{AccountId, DocumentNumber};

pub use errors::StorageError;
pub use memory_storage::{InMemoryAccountStore, InMemoryTransactionStore};
pub use postgres_storage::{connect, PostgresAccountStore, PostgresTransactionStore};

/// Read/write access to stored accounts.
pub trait AccountStore: Send + Sync + 'static {
    /// Stores a new account and returns it with its assigned id.
    fn create(&self, document_number: DocumentNumber) -> impl Future<Output = Result<Account, StorageError>> + Send;

    /// Looks an account up. A missing row is reported as [`StorageError::NotFound`].
    fn find_by_id(&self, account_id: AccountId) -> impl Future<Output = Result<Account, StorageError>> + Send;
}

/// Append-only access to stored transactions.
pub trait TransactionStore: Send + Sync + 'static {
    /// Stores a validated transaction and returns it with its assigned id.
    ///
    /// Fails when the referenced account does not exist; this is the only place the
    /// account reference is enforced.
    fn create(&self, transaction: NewTransaction) -> impl Future<Output = Result<Transaction, StorageError>> + Send;
}
