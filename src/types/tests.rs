use super::Amount;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_deserializes_from_json_numbers() -> Result<()> {
    let test_cases = vec![
        ("-100.0", "-100"),
        ("100", "100"),
        ("0.25", "0.25"),
        ("-0.01", "-0.01"),
    ];

    for (input, expected) in test_cases {
        let amount: Amount = serde_json::from_str(input)?;
        assert_eq!(amount, Decimal::from_str(expected)?);
    }

    Ok(())
}

#[test]
fn test_amount_rejects_non_numeric_values() {
    assert!(serde_json::from_str::<Amount>("\"invalid\"").is_err());
    assert!(serde_json::from_str::<Amount>("true").is_err());
    assert!(serde_json::from_str::<Amount>("{}").is_err());
}

#[test]
fn test_amount_serializes_as_json_number() -> Result<()> {
    let value = serde_json::to_value(Decimal::from_str("-100.0")?)?;

    assert_eq!(value.as_f64(), Some(-100.0));

    Ok(())
}

#[derive(Debug, serde::Deserialize)]
struct AmountField {
    #[serde(default, deserialize_with = "super::deserialize_amount")]
    amount: Option<Amount>
}

#[test]
fn test_amount_field_reads_numbers_and_null() -> Result<()> {
    let negative: AmountField = serde_json::from_str(r#"{"amount": -100.0}"#)?;
    let integer: AmountField = serde_json::from_str(r#"{"amount": 60}"#)?;
    let null: AmountField = serde_json::from_str(r#"{"amount": null}"#)?;
    let missing: AmountField = serde_json::from_str("{}")?;

    assert_eq!(negative.amount, Some(Decimal::from_str("-100.0")?));
    assert_eq!(integer.amount, Some(Decimal::from(60)));
    assert_eq!(null.amount, None);
    assert_eq!(missing.amount, None);

    Ok(())
}

#[test]
fn test_amount_field_refuses_numeric_strings() {
    for body in [r#"{"amount": "-100.0"}"#, r#"{"amount": "100"}"#, r#"{"amount": "invalid"}"#] {
        assert!(serde_json::from_str::<AmountField>(body).is_err(), "{body} should not parse");
    }
}

#[test]
fn test_amount_field_refuses_values_a_decimal_cannot_hold() {
    for body in [r#"{"amount": 1e-30}"#, r#"{"amount": -1e-30}"#, r#"{"amount": 1e30}"#] {
        assert!(serde_json::from_str::<AmountField>(body).is_err(), "{body} should not parse");
    }
}

#[test]
fn test_amount_field_keeps_zero_as_zero() -> Result<()> {
    let zero: AmountField = serde_json::from_str(r#"{"amount": 0}"#)?;

    assert_eq!(zero.amount, Some(Decimal::ZERO));

    Ok(())
}
