//! Inputs that must be rejected with `InvalidArgument`

use a1notation::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_rejects_malformed() {
    let inputs = [
        "",
        "A1:",
        ":B2",
        "A1:B",
        "A:B2",
        "0:10",
        "01:10",
        "Sheet1!",
        "Sheet1!A0",
        "!A1",
        "''!A1",
        "'Bad",
        "a1:b2",
        "Sheet1!a1",
        "A1:B2:C3",
        "$A$1",
        "R1C1:R2C2",
    ];

    for input in inputs {
        let err = a1notation::parse(input).unwrap_err();
        assert!(err.is_invalid_argument(), "{input:?} gave {err:?}");
    }
}

#[test]
fn test_unsupported_message() {
    let err = a1notation::parse("A1:").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported A1 notation: A1:");
}

#[test]
fn test_value_constructors() {
    assert!(Column::new("").unwrap_err().is_invalid_argument());
    assert!(Column::new("A1").unwrap_err().is_invalid_argument());
    assert!(Row::new(0).unwrap_err().is_invalid_argument());
    assert!(Row::new(-1).unwrap_err().is_invalid_argument());
    assert!(SheetName::new("").unwrap_err().is_invalid_argument());
}

#[test]
fn test_builder_without_sheet() {
    let err = NotationBuilder::new().sheet_only().unwrap_err();
    assert_eq!(err, Error::MissingSheet);
}

#[test]
fn test_inverted_row_bounds() {
    assert!(Notation::rows(5, 4).unwrap_err().is_invalid_argument());
    // Columns keep their given order
    assert_eq!(Notation::columns("z", "a").unwrap().to_string(), "Z:A");
}
