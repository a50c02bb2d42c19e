use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::Amount;

/// Category of a ledger entry. The category decides which sign its amount must carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum OperationType {
    CashPurchase = 1,
    InstallmentPurchase = 2,
    Withdraw = 3,
    Payment = 4
}

impl OperationType {
    pub const ALL: [OperationType; 4] = [
        OperationType::CashPurchase,
        OperationType::InstallmentPurchase,
        OperationType::Withdraw,
        OperationType::Payment
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Purchases and withdrawals take money out of the account and are recorded as debits.
    pub fn requires_negative_amount(self) -> bool {
        !matches!(self, OperationType::Payment)
    }

    /// Returns true when `amount` carries the sign this operation type demands.
    /// Zero is never accepted.
    pub fn accepts_amount(self, amount: Amount) -> bool {
        if self.requires_negative_amount() {
            amount.is_sign_negative() && !amount.is_zero()
        } else {
            amount.is_sign_positive() && !amount.is_zero()
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OperationType::CashPurchase => "CASH_PURCHASE",
            OperationType::InstallmentPurchase => "INSTALLMENT_PURCHASE",
            OperationType::Withdraw => "WITHDRAW",
            OperationType::Payment => "PAYMENT"
        }
    }
}

impl From<OperationType> for u32 {
    fn from(operation_type: OperationType) -> Self {
        operation_type.id()
    }
}

impl TryFrom<u32> for OperationType {
    type Error = UnknownOperationType;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        OperationType::ALL.into_iter()
            .find(|operation_type| operation_type.id() == id)
            .ok_or(UnknownOperationType(id))
    }
}

impl Display for OperationType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.description())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("Unknown operation type [{0}]")]
pub struct UnknownOperationType(pub u32);

/// True iff `operation_type_id` names one of the four known operation types.
pub fn is_valid_operation_type(operation_type_id: u32) -> bool {
    OperationType::try_from(operation_type_id).is_ok()
}

/// Applies the sign rule for `operation_type_id`.
///
/// Unknown ids pass: the amount check is a no-op for them because
/// [`is_valid_operation_type`] reports that problem on its own.
pub fn is_valid_operation_amount(operation_type_id: u32, amount: Amount) -> bool {
    match OperationType::try_from(operation_type_id) {
        Ok(operation_type) => operation_type.accepts_amount(amount),
        Err(_) => true
    }
}
