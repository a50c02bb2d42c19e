use super::{is_valid_operation_amount, is_valid_operation_type, Account, NewTransaction, OperationType, Transaction};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

#[test]
fn test_known_operation_types_are_valid() {
    for operation_type_id in 1..=4 {
        assert!(is_valid_operation_type(operation_type_id), "operation type [{operation_type_id}] should be valid");
    }
}

#[test]
fn test_unknown_operation_types_are_invalid() {
    for operation_type_id in [0, 5, 6, 42, u32::MAX] {
        assert!(!is_valid_operation_type(operation_type_id), "operation type [{operation_type_id}] should be invalid");
    }
}

#[test]
fn test_purchases_and_withdrawals_require_negative_amounts() -> Result<()> {
    for operation_type_id in 1..=3 {
        assert!(is_valid_operation_amount(operation_type_id, Decimal::from_str("-100.0")?));
        assert!(is_valid_operation_amount(operation_type_id, Decimal::from_str("-0.01")?));
        assert!(!is_valid_operation_amount(operation_type_id, Decimal::from_str("100.0")?));
        assert!(!is_valid_operation_amount(operation_type_id, Decimal::ZERO));
    }

    Ok(())
}

#[test]
fn test_payments_require_positive_amounts() -> Result<()> {
    assert!(is_valid_operation_amount(4, Decimal::from_str("100.0")?));
    assert!(is_valid_operation_amount(4, Decimal::from_str("0.01")?));
    assert!(!is_valid_operation_amount(4, Decimal::from_str("-100.0")?));
    assert!(!is_valid_operation_amount(4, Decimal::ZERO));

    Ok(())
}

#[test]
fn test_negative_zero_is_rejected_for_every_operation_type() -> Result<()> {
    let negative_zero = Decimal::from_str("-0.00")?;

    for operation_type in OperationType::ALL {
        assert!(!operation_type.accepts_amount(negative_zero));
    }

    Ok(())
}

#[test]
fn test_amount_check_is_a_no_op_for_unknown_operation_types() -> Result<()> {
    assert!(is_valid_operation_amount(0, Decimal::from_str("-100.0")?));
    assert!(is_valid_operation_amount(5, Decimal::from_str("100.0")?));
    assert!(is_valid_operation_amount(5, Decimal::ZERO));

    Ok(())
}

#[test]
fn test_operation_type_converts_to_and_from_its_id() -> Result<()> {
    for operation_type in OperationType::ALL {
        assert_eq!(OperationType::try_from(operation_type.id())?, operation_type);
    }

    assert_eq!(OperationType::CashPurchase.id(), 1);
    assert_eq!(OperationType::Payment.id(), 4);
    assert!(OperationType::try_from(0).is_err());

    Ok(())
}

#[test]
fn test_transaction_serializes_operation_type_as_its_id() -> Result<()> {
    let transaction = NewTransaction {
        account_id: 123456789,
        operation_type: OperationType::InstallmentPurchase,
        amount: Decimal::from_str("-50.5")?
    }.into_transaction(7);

    let value = serde_json::to_value(&transaction)?;

    assert_eq!(value["transaction_id"], 7);
    assert_eq!(value["account_id"], 123456789);
    assert_eq!(value["operation_type_id"], 2);
    assert_eq!(value["amount"].as_f64(), Some(-50.5));

    let parsed: Transaction = serde_json::from_value(value)?;

    assert_eq!(parsed, transaction);

    Ok(())
}

#[test]
fn test_transaction_with_unknown_operation_type_fails_to_deserialize() {
    let json = r#"{"transaction_id":1,"account_id":1,"operation_type_id":9,"amount":-1.0}"#;

    assert!(serde_json::from_str::<Transaction>(json).is_err());
}

#[test]
fn test_account_serializes_with_wire_field_names() -> Result<()> {
    let value = serde_json::to_value(Account::new(1, 123456789))?;

    assert_eq!(value, serde_json::json!({"account_id": 1, "document_number": 123456789}));

    Ok(())
}
