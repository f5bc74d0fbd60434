//! Parsing then rendering gives back the original text

use a1notation::prelude::*;
use a1notation::stringify::sheet_name_str;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_round_trip_literals() {
    let inputs = [
        "A1",
        "Z999",
        "AA10",
        "A1:B2",
        "A:A",
        "1:10",
        "Sheet1!A1",
        "'My Custom Sheet'!A:A",
        r"'Jon\'s_Data'!A1:D5",
        "'My Custom Sheet'",
        "Sheet1",
        "Data_2025!5:9",
        "F10:C10",
        "XFD1048576",
    ];

    for input in inputs {
        let notation = a1notation::parse(input).unwrap();
        assert_eq!(notation.to_a1_string(), input);
        assert_eq!(notation.to_string(), input);
    }
}

#[test]
fn test_short_strings() {
    let cases = [
        ("Sheet1!A1", "A1"),
        ("'My Custom Sheet'!A:A", "A:A"),
        (r"'Jon\'s_Data'!A1:D5", "A1:D5"),
        ("5:9", "5:9"),
        ("'My Custom Sheet'", ""),
    ];

    for (input, short) in cases {
        assert_eq!(a1notation::parse(input).unwrap().to_short_string(), short);
    }
}

#[test]
fn test_sheet_precedence() {
    // Cell-shaped but bare: a sheet
    let sheet = a1notation::parse("Sheet1").unwrap();
    assert_eq!(sheet.kind(), NotationKind::Sheet);
    assert_eq!(sheet.sheet().unwrap().value(), "Sheet1");

    // With an explicit separator the same letters address a cell
    let cell = a1notation::parse("Sheet1!A1").unwrap();
    assert_eq!(cell.kind(), NotationKind::Cell);
}

#[test]
fn test_bare_sheet_with_space_is_requoted() {
    let sheet = a1notation::parse("My Sheet").unwrap();
    assert_eq!(sheet.kind(), NotationKind::Sheet);
    assert_eq!(sheet.to_string(), "'My Sheet'");
}

#[test]
fn test_builder_output_parses_to_same_value() {
    let builder = Notation::with_sheet("Q1 'Draft'").unwrap();
    let built = [
        builder.row(3).unwrap(),
        builder.rows(2, 8).unwrap(),
        builder.column("c").unwrap(),
        builder.columns("b", "aa").unwrap(),
        builder.cell("zz", 100).unwrap(),
        builder.range("a", 1, "c", 10).unwrap(),
        builder.sheet_only().unwrap(),
    ];

    for notation in built {
        let text = notation.to_string();
        assert_eq!(a1notation::parse(&text).unwrap(), notation, "{text}");
    }
}

fn cell() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}[1-9][0-9]{0,5}"
}

fn reference() -> impl Strategy<Value = String> {
    prop_oneof![
        cell(),
        (cell(), cell()).prop_map(|(a, b)| format!("{a}:{b}")),
        "[A-Z]{1,3}:[A-Z]{1,3}",
        "[1-9][0-9]{0,5}:[1-9][0-9]{0,5}",
    ]
}

/// Sheet names as they appear in notation: no `!` and no backslash
fn rendered_sheet() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 '._:é-]{1,12}".prop_map(|name| sheet_name_str(&SheetName::new(name).unwrap()))
}

proptest! {
    #[test]
    fn prop_reference_round_trip(reference in reference()) {
        let notation = a1notation::parse(&reference).unwrap();
        prop_assert_eq!(notation.to_a1_string(), reference);
    }

    #[test]
    fn prop_sheet_reference_round_trip(sheet in rendered_sheet(), reference in reference()) {
        let input = format!("{sheet}!{reference}");
        let notation = a1notation::parse(&input).unwrap();
        prop_assert_eq!(notation.to_a1_string(), input);
        prop_assert_eq!(notation.to_short_string(), reference);
    }

    #[test]
    fn prop_sheet_only_round_trip(sheet in rendered_sheet()) {
        let notation = a1notation::parse(&sheet).unwrap();
        prop_assert_eq!(notation.to_a1_string(), sheet);
    }
}
