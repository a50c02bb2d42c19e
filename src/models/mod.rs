mod account;
mod operation_type;
#[cfg(test)]
mod tests;
mod transaction;

pub use account::Account;
pub use operation_type::{is_valid_operation_amount, is_valid_operation_type, OperationType, UnknownOperationType};
pub use transaction::{NewTransaction, Transaction};
