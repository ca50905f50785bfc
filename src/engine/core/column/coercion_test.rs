use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::engine::core::Query;
use crate::engine::core::column::coercion::{to_instant, to_number, to_text};
use crate::test_helpers::factory::Factory;

#[test]
fn numbers_keep_null_and_absent_as_null() {
    assert_eq!(to_number(None), None);
    assert_eq!(to_number(Some(&json!(null))), None);
    assert_eq!(to_number(Some(&json!(27))), Some(27.0));
    assert_eq!(to_number(Some(&json!(-1.5))), Some(-1.5));
}

#[test]
fn numbers_parse_text_and_booleans() {
    assert_eq!(to_number(Some(&json!(" 42 "))), Some(42.0));
    assert_eq!(to_number(Some(&json!(true))), Some(1.0));
    assert_eq!(to_number(Some(&json!(false))), Some(0.0));
    assert_eq!(to_number(Some(&json!(""))), None);
    assert_eq!(to_number(Some(&json!("abc"))), None);
    assert_eq!(to_number(Some(&json!("NaN"))), None);
    assert_eq!(to_number(Some(&json!([1]))), None);
}

#[test]
fn text_stringifies_scalars() {
    assert_eq!(to_text(None), None);
    assert_eq!(to_text(Some(&json!(null))), None);
    assert_eq!(to_text(Some(&json!("Ann"))), Some("Ann".to_string()));
    assert_eq!(to_text(Some(&json!(12))), Some("12".to_string()));
    assert_eq!(to_text(Some(&json!(true))), Some("true".to_string()));
    assert_eq!(to_text(Some(&json!({"a": 1}))), Some("{\"a\":1}".to_string()));
}

#[test]
fn instants_from_millis_and_strings() {
    let epoch_plus = Utc.timestamp_millis_opt(1_000).single();
    assert_eq!(to_instant(Some(&json!(1_000))), epoch_plus);

    let date = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).single();
    assert_eq!(to_instant(Some(&json!("1990-01-01"))), date);
    assert_eq!(to_instant(Some(&json!("1990-01-01T00:00:00Z"))), date);
    assert_eq!(to_instant(Some(&json!("1990-01-01T00:00:00"))), date);
}

#[test]
fn instants_reject_garbage() {
    assert_eq!(to_instant(None), None);
    assert_eq!(to_instant(Some(&json!(null))), None);
    assert_eq!(to_instant(Some(&json!("yesterday"))), None);
    assert_eq!(to_instant(Some(&json!(true))), None);
}

#[test]
fn text_prints_floats_like_their_shortest_numeric_form() {
    assert_eq!(to_text(Some(&json!(27.0))), Some("27".to_string()));
    assert_eq!(to_text(Some(&json!(-3.0))), Some("-3".to_string()));
    assert_eq!(to_text(Some(&json!(0.1))), Some("0.1".to_string()));
    assert_eq!(to_text(Some(&json!(-0.0))), Some("0".to_string()));
    assert_eq!(to_text(Some(&json!(1e20))), Some("100000000000000000000".to_string()));
    assert_eq!(to_text(Some(&json!(1e21))), Some("1e+21".to_string()));
    assert_eq!(to_text(Some(&json!(2.5e-7))), Some("2.5e-7".to_string()));
    assert_eq!(to_text(Some(&json!(0.000001))), Some("0.000001".to_string()));
}

#[test]
fn integral_float_text_is_queryable_by_its_digits() {
    let source = Factory::source()
        .field("code", "string")
        .row(json!({"code": 27.0}))
        .row(json!({"code": 27}))
        .row(json!({"code": "27.5"}));
    let table = Factory::table().with_source(source).create();

    let hits = table.query(&Query::new().one_of("code", ["27"])).unwrap();
    assert_eq!(hits.visible_count(), 2);
    assert!(hits.is_included(0));
    assert!(hits.is_included(1));
}

#[test]
fn numbers_accept_only_spelled_out_infinity() {
    assert_eq!(to_number(Some(&json!("Infinity"))), Some(f64::INFINITY));
    assert_eq!(to_number(Some(&json!("-Infinity"))), Some(f64::NEG_INFINITY));
    assert_eq!(to_number(Some(&json!("inf"))), None);
    assert_eq!(to_number(Some(&json!("infinity"))), None);
    assert_eq!(to_number(Some(&json!("+INF"))), None);
    assert_eq!(to_number(Some(&json!("1e5"))), Some(100000.0));
}

#[test]
fn numbers_parse_radix_prefixes() {
    assert_eq!(to_number(Some(&json!("0x1f"))), Some(31.0));
    assert_eq!(to_number(Some(&json!("0o17"))), Some(15.0));
    assert_eq!(to_number(Some(&json!("0b101"))), Some(5.0));
    assert_eq!(to_number(Some(&json!("0x"))), None);
    assert_eq!(to_number(Some(&json!("0xfg"))), None);
    assert_eq!(to_number(Some(&json!("-0x1f"))), None);
}
