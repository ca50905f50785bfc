use std::ops::Bound;

use crate::engine::core::Predicate;
use crate::engine::types::ValueRef;

#[test]
fn constructors_set_expected_bounds() {
    assert_eq!(
        Predicate::greater_than(27.0),
        Predicate::Range {
            min: Bound::Excluded(27.0),
            max: Bound::Unbounded
        }
    );
    assert_eq!(
        Predicate::between(1.0, 2.0),
        Predicate::Range {
            min: Bound::Included(1.0),
            max: Bound::Included(2.0)
        }
    );
}

#[test]
fn range_matches_numbers_only() {
    let p = Predicate::between(10.0, 20.0);
    assert!(p.matches(ValueRef::Number(10.0)));
    assert!(p.matches(ValueRef::Number(20.0)));
    assert!(!p.matches(ValueRef::Number(20.5)));
    assert!(!p.matches(ValueRef::Null));
    assert!(!p.matches(ValueRef::Text("15")));

    assert!(!Predicate::less_than(5.0).matches(ValueRef::Number(5.0)));
    assert!(Predicate::at_most(5.0).matches(ValueRef::Number(5.0)));
}

#[test]
fn set_matches_listed_values_and_optionally_null() {
    let p = Predicate::one_of(["cd", "ef"]);
    assert!(p.matches(ValueRef::Text("cd")));
    assert!(!p.matches(ValueRef::Text("ab")));
    assert!(!p.matches(ValueRef::Null));

    let with_null = p.or_null();
    assert!(with_null.matches(ValueRef::Null));
    assert!(Predicate::is_null().matches(ValueRef::Null));
    assert!(!Predicate::is_null().matches(ValueRef::Text("cd")));
}

#[test]
fn or_null_leaves_ranges_alone() {
    let range = Predicate::at_least(1.0);
    assert_eq!(range.clone().or_null(), range);
}
