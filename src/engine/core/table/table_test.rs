use serde_json::json;

use crate::engine::core::index::IndexWidth;
use crate::engine::core::{Table, TableOptions};
use crate::engine::errors::EngineError;
use crate::engine::types::{CellValue, ColumnKind, NullOrder, ValueRef};
use crate::test_helpers::factory::Factory;

#[test]
fn builds_columns_in_schema_order() {
    let table = Factory::people();

    assert_eq!(table.row_count(), 4);
    assert_eq!(table.visible_count(), 4);
    assert_eq!(table.columns().names().collect::<Vec<_>>(), vec!["name", "age"]);
    assert_eq!(table.column("name").unwrap().kind(), ColumnKind::Textual);
    assert_eq!(table.column("age").unwrap().kind(), ColumnKind::Numeric);
    assert_eq!(table.column("age").unwrap().value(1), ValueRef::Number(32.0));
}

#[test]
fn starts_with_identity_order_and_no_filter() {
    let table = Factory::people();
    assert_eq!(table.order().to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(table.order().width(), IndexWidth::U8);
    assert!(table.filter().is_none());
    assert!((0..4).all(|row| table.is_included(row)));
}

#[test]
fn record_reads_every_column_at_a_row() {
    let table = Factory::people();
    let record = table.record(2);
    assert_eq!(record["name"], CellValue::from("John"));
    assert_eq!(record["age"], CellValue::Number(29.0));
}

#[test]
fn unknown_kind_aborts_construction() {
    let source = Factory::source()
        .field("name", "string")
        .field("flag", "boolean")
        .row(json!({"name": "Ann", "flag": true}))
        .create();
    let err = Table::from_source_with(&source, TableOptions { null_order: NullOrder::First })
        .unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedKind(kind) if kind == "boolean"));
}

#[test]
fn kind_names_are_case_insensitive_with_aliases() {
    let source = Factory::source()
        .field("a", "Number")
        .field("b", "TEXT")
        .field("c", "date")
        .row(json!({"a": 1, "b": "x", "c": "2020-02-02"}))
        .create();
    let table = Table::from_source_with(&source, TableOptions { null_order: NullOrder::First })
        .unwrap();
    assert_eq!(table.column("a").unwrap().kind(), ColumnKind::Numeric);
    assert_eq!(table.column("b").unwrap().kind(), ColumnKind::Textual);
    assert_eq!(table.column("c").unwrap().kind(), ColumnKind::Temporal);
}

#[test]
fn empty_source_builds_empty_table() {
    let source = Factory::source().field("age", "number").create();
    let table = Table::from_source_with(&source, TableOptions { null_order: NullOrder::First })
        .unwrap();
    assert_eq!(table.row_count(), 0);
    assert!(table.order().is_empty());
    assert!(table.take(0, 10).is_empty());
}

#[test]
fn default_options_use_configured_null_order() {
    let options = TableOptions::default();
    assert_eq!(options.null_order, NullOrder::First);
}
