use crate::test_helpers::factories::SourceFactory;

#[test]
fn people_source_has_four_rows_and_two_fields() {
    let source = SourceFactory::people().create();
    assert_eq!(source.data.len(), 4);
    let names: Vec<&str> = source.schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "age"]);
}

#[test]
fn random_source_is_deterministic_per_seed() {
    let a = SourceFactory::random(7, 50).create();
    let b = SourceFactory::random(7, 50).create();
    let c = SourceFactory::random(8, 50).create();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.data.iter().any(|row| row["value_a"].is_null()));
}
