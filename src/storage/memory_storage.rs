use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::iter::Iter;
use dashmap::DashMap;
use tracing::debug;

use crate::models::{Account, NewTransaction, Transaction};
use crate::storage::{AccountStore, StorageError, TransactionStore};
use crate::types::{AccountId, DocumentNumber, TransactionId};

/// Process-local account table. Ids are handed out sequentially from 1.
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    sequence: AtomicU64
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            sequence: AtomicU64::new(0)
        }
    }

    pub fn iter(&self) -> Iter<'_, AccountId, Account> {
        self.accounts.iter()
    }

    pub fn contains(&self, account_id: AccountId) -> bool {
        self.accounts.contains_key(&account_id)
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    async fn create(&self, document_number: DocumentNumber) -> Result<Account, StorageError> {
        let account_id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let account = Account::new(account_id, document_number);

        self.accounts.insert(account_id, account.clone());
        debug!("Stored account [{account_id}]");

        Ok(account)
    }

    async fn find_by_id(&self, account_id: AccountId) -> Result<Account, StorageError> {
        self.accounts.get(&account_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::not_found(account_id))
    }
}

/// Process-local transaction log. Rejects entries whose account is missing from `accounts`.
pub struct InMemoryTransactionStore {
    accounts: Arc<InMemoryAccountStore>,
    transactions: DashMap<TransactionId, Transaction>,
    sequence: AtomicU64
}

impl InMemoryTransactionStore {
    pub fn new(accounts: Arc<InMemoryAccountStore>) -> Self {
        Self {
            accounts,
            transactions: DashMap::new(),
            sequence: AtomicU64::new(0)
        }
    }

    pub fn iter(&self) -> Iter<'_, TransactionId, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, StorageError> {
        if !self.accounts.contains(transaction.account_id) {
            return Err(StorageError::unknown_account(transaction.account_id));
        }

        let transaction_id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let transaction = transaction.into_transaction(transaction_id);

        self.transactions.insert(transaction_id, transaction.clone());
        debug!("Stored transaction [{transaction_id}] for account [{}]", transaction.account_id);

        Ok(transaction)
    }
}
