use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::api::{AccountPayload, TransactionPayload};
use crate::engine::{LedgerEngine, LedgerError};
use crate::models::{Account, Transaction};
use crate::storage::{AccountStore, TransactionStore};
use crate::types::AccountId;

/// `POST /accounts`
pub async fn create_account<A: AccountStore, T: TransactionStore>(
    State(engine): State<LedgerEngine<A, T>>,
    payload: Result<Json<AccountPayload>, JsonRejection>
) -> Result<(StatusCode, Json<Account>), LedgerError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Unreadable account payload: {rejection}");
        LedgerError::InvalidDocumentNumber
    })?;

    let account = engine.create_account(payload.document_number()).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// `GET /accounts/{account_id}`
pub async fn get_account<A: AccountStore, T: TransactionStore>(
    State(engine): State<LedgerEngine<A, T>>,
    Path(account_id): Path<String>
) -> Result<Json<Account>, LedgerError> {
    let account = engine.get_account(parse_account_id(&account_id)?).await?;

    Ok(Json(account))
}

/// Accepts plain decimal digits only, so a leading `+` is an invalid id.
pub fn parse_account_id(raw: &str) -> Result<AccountId, LedgerError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        debug!("Unreadable account id [{raw}]");
        return Err(LedgerError::InvalidAccountId);
    }

    raw.parse().map_err(|err| {
        debug!("Unreadable account id [{raw}]: {err}");
        LedgerError::InvalidAccountId
    })
}

/// `POST /transactions`
pub async fn create_transaction<A: AccountStore, T: TransactionStore>(
    State(engine): State<LedgerEngine<A, T>>,
    payload: Result<Json<TransactionPayload>, JsonRejection>
) -> Result<(StatusCode, Json<Transaction>), LedgerError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Unreadable transaction payload: {rejection}");
        LedgerError::MalformedTransaction
    })?;

    let transaction = engine.create_transaction(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
