//! Unit tests for Sequence.
//!
//! These tests exercise every positional and value-based operation through
//! the public API, including the guarded no-op paths.

use linkhash::collections::{Sequence, SequenceError};
use rstest::rstest;

fn letters() -> Sequence<&'static str> {
    Sequence::from_array(vec!["a", "b", "c", "b"])
}

// =============================================================================
// append / to_array
// =============================================================================

#[rstest]
fn test_append_preserves_order() {
    let mut sequence = Sequence::new();
    for value in ["x", "y", "z"] {
        sequence.append(value);
    }
    assert_eq!(sequence.to_array(), vec!["x", "y", "z"]);
    assert_eq!(sequence.len(), 3);
}

#[rstest]
fn test_to_array_is_a_snapshot() {
    let mut sequence = letters();
    let snapshot = sequence.to_array();
    sequence.append("d");
    sequence.replace_at(0, "A").unwrap();
    assert_eq!(snapshot, vec!["a", "b", "c", "b"]);
}

// =============================================================================
// find_first / find_last / find_all
// =============================================================================

#[rstest]
#[case("a", 0, 0)]
#[case("b", 1, 3)]
#[case("c", 2, 2)]
fn test_find_first_and_last(#[case] value: &'static str, #[case] first: usize, #[case] last: usize) {
    let sequence = letters();
    assert_eq!(sequence.find_first(&value), Ok(first));
    assert_eq!(sequence.find_last(&value), Ok(last));
}

#[rstest]
fn test_find_all_returns_every_position() {
    assert_eq!(letters().find_all(&"b"), Ok(vec![1, 3]));
}

#[rstest]
fn test_find_missing_value_fails_with_not_found() {
    let sequence = letters();
    assert_eq!(sequence.find_first(&"q"), Err(SequenceError::NotFound));
    assert_eq!(sequence.find_last(&"q"), Err(SequenceError::NotFound));
    assert_eq!(sequence.find_all(&"q"), Err(SequenceError::NotFound));
}

// =============================================================================
// get_at
// =============================================================================

#[rstest]
fn test_get_at_on_empty_sequence_is_out_of_range() {
    let sequence: Sequence<&str> = Sequence::new();
    assert_eq!(
        sequence.get_at(0),
        Err(SequenceError::IndexOutOfRange {
            index: 0,
            length: 0
        })
    );
}

#[rstest]
fn test_get_at_past_end_is_out_of_range() {
    assert!(letters().get_at(4).unwrap_err().is_index_out_of_range());
}

// =============================================================================
// insert_at / insert_after / insert_sequence_at
// =============================================================================

#[rstest]
fn test_insert_at_zero_on_empty_sequence() {
    let mut sequence = Sequence::new();
    assert_eq!(sequence.insert_at(0, "z"), Ok(()));
    assert_eq!(sequence.get_at(0), Ok(&"z"));
}

#[rstest]
#[case(0, vec!["n", "a", "b", "c", "b"])]
#[case(2, vec!["a", "b", "n", "c", "b"])]
#[case(4, vec!["a", "b", "c", "b", "n"])]
fn test_insert_at_positions(#[case] index: usize, #[case] expected: Vec<&str>) {
    let mut sequence = letters();
    sequence.insert_at(index, "n").unwrap();
    assert_eq!(sequence.to_array(), expected);
}

#[rstest]
fn test_insert_at_past_end_is_invalid_index() {
    let mut sequence = letters();
    assert_eq!(
        sequence.insert_at(5, "n"),
        Err(SequenceError::InvalidIndex {
            index: 5,
            length: 4
        })
    );
    assert_eq!(sequence.len(), 4);
}

#[rstest]
fn test_insert_after_first_anchor() {
    let mut sequence = letters();
    assert!(sequence.insert_after(&"b", "n"));
    assert_eq!(sequence.to_array(), vec!["a", "b", "n", "c", "b"]);
}

#[rstest]
fn test_insert_after_missing_anchor_changes_nothing() {
    let mut sequence = letters();
    assert!(!sequence.insert_after(&"q", "n"));
    assert_eq!(sequence.to_array(), vec!["a", "b", "c", "b"]);
}

#[rstest]
#[case(0, vec!["x", "y", "a", "b", "c", "b"])]
#[case(3, vec!["a", "b", "c", "x", "y", "b"])]
#[case(4, vec!["a", "b", "c", "b", "x", "y"])]
fn test_insert_sequence_at_keeps_relative_order(#[case] index: usize, #[case] expected: Vec<&str>) {
    let mut sequence = letters();
    assert_eq!(sequence.insert_sequence_at(index, ["x", "y"]), Ok(2));
    assert_eq!(sequence.to_array(), expected);
    assert_eq!(sequence.len(), 6);
}

#[rstest]
fn test_insert_sequence_at_invalid_index_inserts_nothing() {
    let mut sequence = letters();
    assert!(sequence.insert_sequence_at(9, ["x"]).unwrap_err().is_invalid_index());
    assert_eq!(sequence.len(), 4);
}

// =============================================================================
// delete_at / replace_at / replace_all
// =============================================================================

#[rstest]
fn test_delete_at_shifts_later_elements_left() {
    let mut sequence = letters();
    assert_eq!(sequence.delete_at(1), Ok("b"));
    assert_eq!(sequence.to_array(), vec!["a", "c", "b"]);
}

#[rstest]
fn test_delete_at_head_and_tail() {
    let mut sequence = letters();
    assert_eq!(sequence.delete_at(0), Ok("a"));
    assert_eq!(sequence.delete_at(2), Ok("b"));
    assert_eq!(sequence.to_array(), vec!["b", "c"]);
}

#[rstest]
fn test_delete_at_out_of_range() {
    let mut sequence = letters();
    assert!(sequence.delete_at(4).unwrap_err().is_index_out_of_range());
    assert_eq!(sequence.len(), 4);
}

#[rstest]
fn test_replace_at_returns_previous() {
    let mut sequence = letters();
    assert_eq!(sequence.replace_at(2, "C"), Ok("c"));
    assert_eq!(sequence.to_array(), vec!["a", "b", "C", "b"]);
    assert!(sequence.replace_at(4, "D").unwrap_err().is_index_out_of_range());
}

#[rstest]
fn test_replace_all_counts_replacements() {
    let mut sequence = letters();
    assert_eq!(sequence.replace_all(&"b", "B"), 2);
    assert_eq!(sequence.to_array(), vec!["a", "B", "c", "B"]);
    assert_eq!(sequence.replace_all(&"q", "Q"), 0);
}

// =============================================================================
// clear
// =============================================================================

#[rstest]
fn test_clear_without_confirmation_is_noop() {
    let mut sequence = letters();
    assert!(!sequence.clear(false));
    assert_eq!(sequence.len(), 4);
}

#[rstest]
fn test_clear_with_confirmation_empties() {
    let mut sequence = letters();
    assert!(sequence.clear(true));
    assert!(sequence.is_empty());
    assert_eq!(sequence.to_array(), Vec::<&str>::new());
    sequence.append("again");
    assert_eq!(sequence.to_array(), vec!["again"]);
}

// =============================================================================
// Bulk constructors
// =============================================================================

#[rstest]
fn test_from_pairs_keeps_pair_order() {
    let sequence = Sequence::from_pairs(vec![("k1", 1), ("k2", 2)]);
    assert_eq!(sequence.to_array(), vec![("k1", 1), ("k2", 2)]);
}

#[rstest]
fn test_from_chars_one_node_per_character() {
    let sequence = Sequence::from_chars("héllo");
    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence.get_at(1), Ok(&'é'));
}

#[rstest]
fn test_from_array_round_trip() {
    let values = vec![5, 3, 5, 1];
    assert_eq!(Sequence::from_array(values.clone()).to_array(), values);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn test_display_arrow_form() {
    assert_eq!(letters().to_string(), "a -> b -> c -> b -> None");
}
