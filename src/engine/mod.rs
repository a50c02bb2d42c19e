mod errors;
mod ledger_engine;

pub use errors::{ErrorKind, LedgerError};
pub use ledger_engine::LedgerEngine;
