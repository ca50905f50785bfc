use crate::engine::core::index::{IndexWidth, RowIndexes};

#[test]
fn identity_uses_narrowest_width() {
    let small = RowIndexes::identity(4);
    assert_eq!(small.width(), IndexWidth::U8);
    assert_eq!(small.to_vec(), vec![0, 1, 2, 3]);

    let wide = RowIndexes::identity(300);
    assert_eq!(wide.width(), IndexWidth::U16);
    assert_eq!(wide.get(299), 299);
}

#[test]
fn empty_identity() {
    let empty = RowIndexes::identity(0);
    assert!(empty.is_empty());
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn sorted_by_is_stable_and_leaves_source_untouched() {
    let keys = [2, 1, 2, 1, 0];
    let source = RowIndexes::identity(keys.len());
    let sorted = source.sorted_by(|a, b| keys[a].cmp(&keys[b]));

    assert_eq!(sorted.to_vec(), vec![4, 1, 3, 0, 2]);
    assert_eq!(source.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn partition_point_over_row_indices() {
    let keys = [5, 1, 3];
    let sorted = RowIndexes::identity(3).sorted_by(|a, b| keys[a].cmp(&keys[b]));
    // sorted rows: [1, 2, 0] -> keys [1, 3, 5]
    assert_eq!(sorted.partition_point(|row| keys[row] < 3), 1);
    assert_eq!(sorted.partition_point(|row| keys[row] <= 5), 3);
    assert_eq!(sorted.partition_point(|_| false), 0);
}
