//! `PostgreSQL` adapters for the account and transaction stores.
//!
//! Each call runs a single statement against the shared pool. The schema lives in
//! `migrations/` and is applied by [`connect`].

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

use crate::models::{Account, NewTransaction, Transaction};
use crate::storage::{AccountStore, StorageError, TransactionStore};
use crate::types::{AccountId, DocumentNumber};

/// Opens a connection pool and brings the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database schema is up to date");

    Ok(pool)
}

pub(crate) fn to_database_id(id: u64) -> Result<i64, StorageError> {
    i64::try_from(id).map_err(|_| StorageError::IdentifierOutOfRange(id.to_string()))
}

pub(crate) fn from_database_id(id: i64) -> Result<u64, StorageError> {
    u64::try_from(id).map_err(|_| StorageError::IdentifierOutOfRange(id.to_string()))
}

#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: PgPool
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountStore for PostgresAccountStore {
    async fn create(&self, document_number: DocumentNumber) -> Result<Account, StorageError> {
        let (account_id,): (i64,) = sqlx::query_as("INSERT INTO accounts (document_number) VALUES ($1) RETURNING account_id")
            .bind(to_database_id(document_number)?)
            .fetch_one(&self.pool)
            .await?;

        Ok(Account::new(from_database_id(account_id)?, document_number))
    }

    async fn find_by_id(&self, account_id: AccountId) -> Result<Account, StorageError> {
        let row: Option<(i64, i64)> = sqlx::query_as("SELECT account_id, document_number FROM accounts WHERE account_id = $1 LIMIT 1")
            .bind(to_database_id(account_id)?)
            .fetch_optional(&self.pool)
            .await?;

        let Some((stored_id, document_number)) = row else {
            return Err(StorageError::not_found(account_id));
        };

        Ok(Account::new(from_database_id(stored_id)?, from_database_id(document_number)?))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresTransactionStore {
    pool: PgPool
}

impl PostgresTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionStore for PostgresTransactionStore {
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, StorageError> {
        let query = "INSERT INTO transactions (account_id, operation_type_id, amount) VALUES ($1, $2, $3) RETURNING transaction_id";

        //NOTE: operation type ids are 1..=4, so the cast to INTEGER cannot truncate
        let result: Result<(i64,), sqlx::Error> = sqlx::query_as(query)
            .bind(to_database_id(transaction.account_id)?)
            .bind(transaction.operation_type.id() as i32)
            .bind(transaction.amount)
            .fetch_one(&self.pool)
            .await;

        let (transaction_id,) = result.map_err(|err| {
            error!("Database query ({query}) failed: {err}");
            StorageError::from(err)
        })?;

        Ok(transaction.into_transaction(from_database_id(transaction_id)?))
    }
}
