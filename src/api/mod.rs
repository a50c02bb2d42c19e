//! HTTP boundary of the ledger.
//!
//! Handlers parse and type the request, hand it to [`LedgerEngine`] and render the
//! outcome. Every failure leaves as `{"status": ..., "error": ...}`.

mod errors;
mod handlers;
mod payloads;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::engine::LedgerEngine;
use crate::storage::{AccountStore, TransactionStore};

pub use errors::ErrorResponse;
pub use handlers::{create_account, create_transaction, get_account, parse_account_id};
pub use payloads::{AccountPayload, TransactionPayload};

/// Builds the ledger routes on top of `engine`.
pub fn router<A: AccountStore, T: TransactionStore>(engine: LedgerEngine<A, T>) -> Router {
    Router::new()
        .route("/accounts", post(create_account::<A, T>))
        .route("/accounts/{account_id}", get(get_account::<A, T>))
        .route("/transactions", post(create_transaction::<A, T>))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}
