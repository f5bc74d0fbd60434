//! Width and height of parsed and built references

use a1notation::prelude::*;

fn width(s: &str) -> Result<u32> {
    a1notation::parse(s).unwrap().width()
}

fn height(s: &str) -> Result<u32> {
    a1notation::parse(s).unwrap().height()
}

#[test]
fn test_cell_is_one_by_one() {
    assert_eq!(width("C5").unwrap(), 1);
    assert_eq!(height("C5").unwrap(), 1);
    assert_eq!(width("Sheet1!XFD1048576").unwrap(), 1);
}

#[test]
fn test_rectangular_ranges() {
    assert_eq!(height("C2:C8").unwrap(), 7);
    assert_eq!(width("C2:C8").unwrap(), 1);
    assert_eq!(width("B3:E9").unwrap(), 4);
    assert_eq!(height("B3:E9").unwrap(), 7);
    assert_eq!(width("A1:A1").unwrap(), 1);
    assert_eq!(width("Z1:AA1").unwrap(), 2);
}

#[test]
fn test_reversed_endpoints() {
    assert_eq!(width("F10:C10").unwrap(), 4);
    assert_eq!(height("B9:B3").unwrap(), 7);
}

#[test]
fn test_whole_columns() {
    assert_eq!(width("A:D").unwrap(), 4);
    assert_eq!(width("'My Custom Sheet'!AA:A").unwrap(), 27);

    let err = height("M:Q").unwrap_err();
    assert!(err.is_unbounded_dimension());
}

#[test]
fn test_whole_rows() {
    assert_eq!(height("5:9").unwrap(), 5);
    assert_eq!(height("9:5").unwrap(), 5);

    let err = width("11:15").unwrap_err();
    assert!(err.is_unbounded_dimension());
}

#[test]
fn test_sheet_only_is_unbounded() {
    for input in ["Sheet1", "'My Custom Sheet'"] {
        assert!(width(input).unwrap_err().is_unbounded_dimension());
        assert!(height(input).unwrap_err().is_unbounded_dimension());
    }
}

#[test]
fn test_built_dimensions() {
    assert_eq!(Notation::column("b").unwrap().width().unwrap(), 1);
    assert!(Notation::column("b").unwrap().height().is_err());
    assert_eq!(Notation::rows(10, 20).unwrap().height().unwrap(), 11);
    assert!(Notation::row(3).unwrap().width().is_err());
    assert_eq!(Notation::range("a", 1, "c", 10).unwrap().width().unwrap(), 3);
    assert_eq!(Notation::range("a", 1, "c", 10).unwrap().height().unwrap(), 10);
}
