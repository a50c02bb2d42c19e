use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::engine::LedgerError;
use crate::models::{Account, Transaction};
use crate::storage::{AccountStore, InMemoryAccountStore, InMemoryTransactionStore, TransactionStore};
use crate::types::{AccountId, DocumentNumber};
use crate::validation::{validate_account_id, validate_document_number, validate_transaction, TransactionRequest};

/// Runs the ledger use cases: validate, then persist, then hand back a record or an error.
///
/// The engine holds no mutable state of its own. Every request is independent and the
/// stores are the only shared resource.
pub struct LedgerEngine<A, T> {
    accounts: Arc<A>,
    transactions: Arc<T>
}

impl<A, T> Clone for LedgerEngine<A, T> {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone()
        }
    }
}

impl LedgerEngine<InMemoryAccountStore, InMemoryTransactionStore> {
    /// Creates an engine backed by process-local stores that share one account table.
    pub fn in_memory() -> Self {
        let accounts = Arc::new(InMemoryAccountStore::new());
        let transactions = Arc::new(InMemoryTransactionStore::new(accounts.clone()));

        Self::new(accounts, transactions)
    }
}

impl<A: AccountStore, T: TransactionStore> LedgerEngine<A, T> {
    pub fn new(accounts: Arc<A>, transactions: Arc<T>) -> Self {
        Self {
            accounts,
            transactions
        }
    }

    pub fn transactions(&self) -> &Arc<T> {
        &self.transactions
    }

    /// Opens an account for `document_number`.
    ///
    /// # Errors
    /// - `InvalidDocumentNumber` when `document_number` is 0. The store is not called.
    /// - `AccountCreationFailed` when the store fails.
    pub async fn create_account(&self, document_number: DocumentNumber) -> Result<Account, LedgerError> {
        let document_number = validate_document_number(document_number)?;

        let account = self.accounts.create(document_number).await.map_err(|err| {
            error!("Could not create account: {err}");
            LedgerError::account_creation_failed(err)
        })?;

        debug!("Account [{}] created", account.account_id);

        Ok(account)
    }

    /// Fetches the account stored under `account_id`.
    ///
    /// # Errors
    /// - `InvalidAccountId` when `account_id` is 0.
    /// - `AccountNotFound` when no such account exists.
    /// - `AccountFetchFailed` for any other store failure.
    pub async fn get_account(&self, account_id: AccountId) -> Result<Account, LedgerError> {
        let account_id = validate_account_id(account_id)?;

        self.accounts.find_by_id(account_id).await.map_err(|err| {
            if err.is_not_found() {
                warn!("{err}");
            } else {
                error!("Could not fetch account [{account_id}]: {err}");
            }

            LedgerError::account_lookup_failed(err)
        })
    }

    /// Records a transaction after checking every rule on `request`.
    ///
    /// Account existence is left to the transaction store. The stored amount and
    /// operation type are echoed back exactly as submitted.
    ///
    /// # Errors
    /// - `InvalidTransaction` carrying every broken rule. The store is not called.
    /// - `UnknownAccount` when the store rejects the entry, including for a missing account.
    pub async fn create_transaction(&self, request: TransactionRequest) -> Result<Transaction, LedgerError> {
        let transaction = validate_transaction(&request).inspect_err(|violations| {
            warn!("Transaction for account [{}] rejected: {violations}", request.account_id);
        })?;

        let transaction = self.transactions.create(transaction).await.map_err(|err| {
            error!("Could not store transaction for account [{}]: {err}", request.account_id);
            LedgerError::unknown_account(err)
        })?;

        debug!(
            "Transaction [{}]:[{}] for account [{}] recorded",
            transaction.transaction_id, transaction.operation_type, transaction.account_id
        );

        Ok(transaction)
    }
}
