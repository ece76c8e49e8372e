use snap_pdf::*;

fn letters(items: &str) -> Collection<char> {
    items.chars().collect()
}

fn order(collection: &Collection<char>) -> String {
    collection.iter().collect()
}

#[test]
fn test_add_appends_in_order() {
    let mut collection = letters("AB");
    collection.add(['C', 'D']);
    assert_eq!(order(&collection), "ABCD");
}

#[test]
fn test_add_is_order_preserving_across_calls() {
    let mut at_once = letters("S");
    at_once.add(['a', 'b']);

    let mut one_by_one = letters("S");
    one_by_one.add(['a']);
    one_by_one.add(['b']);

    assert_eq!(at_once.as_slice(), one_by_one.as_slice());
}

#[test]
fn test_add_allows_duplicates() {
    let mut collection = letters("A");
    collection.add(['A', 'A']);
    assert_eq!(order(&collection), "AAA");
}

#[test]
fn test_remove_at() {
    let mut collection = letters("ABCD");
    assert_eq!(collection.remove_at(1), Some('B'));
    assert_eq!(order(&collection), "ACD");
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut collection = letters("ABC");
    let revision = collection.revision();

    assert_eq!(collection.remove_at(3), None);
    assert_eq!(order(&collection), "ABC");
    assert_eq!(collection.revision(), revision);
}

#[test]
fn test_move_is_splice_not_swap() {
    let mut collection = letters("ABCD");
    assert!(collection.move_to(0, 2));
    assert_eq!(order(&collection), "BCAD");
}

#[test]
fn test_move_backwards() {
    let mut collection = letters("ABCD");
    assert!(collection.move_to(3, 0));
    assert_eq!(order(&collection), "DABC");
}

#[test]
fn test_move_to_last_position() {
    let mut collection = letters("ABCD");
    assert!(collection.move_to(1, 3));
    assert_eq!(order(&collection), "ACDB");
}

#[test]
fn test_move_out_of_range_is_noop() {
    let mut collection = letters("ABC");
    assert!(!collection.move_to(3, 0));
    assert!(!collection.move_to(0, 3));
    assert!(!collection.move_to(1, 1));
    assert_eq!(order(&collection), "ABC");
}

#[test]
fn test_move_matches_reference_splice_for_all_pairs() {
    let original = "ABCDE";
    for from in 0..original.len() {
        for to in 0..original.len() {
            if from == to {
                continue;
            }
            let mut collection = letters(original);
            collection.move_to(from, to);

            let mut expected: Vec<char> = original.chars().collect();
            let moved = expected.remove(from);
            expected.insert(to, moved);

            assert_eq!(collection.as_slice(), expected.as_slice(), "move {from} -> {to}");
            // The moved element lands at `to`; everything else keeps its relative order
            assert_eq!(collection.get(to), Some(&moved));
            let rest: Vec<char> = collection.iter().copied().filter(|&c| c != moved).collect();
            let original_rest: Vec<char> = original.chars().filter(|&c| c != moved).collect();
            assert_eq!(rest, original_rest);
        }
    }
}

#[test]
fn test_revision_tracks_mutations() {
    let mut collection = Collection::new();
    assert_eq!(collection.revision(), 0);

    collection.add(['A', 'B']);
    let after_add = collection.revision();
    assert!(after_add > 0);

    collection.add(std::iter::empty());
    assert_eq!(collection.revision(), after_add);

    collection.move_to(0, 1);
    assert!(collection.revision() > after_add);
}

#[test]
fn test_snapshot_is_independent() {
    let mut collection = letters("ABC");
    let snapshot = collection.snapshot();

    collection.move_to(0, 2);
    collection.remove_at(0);

    assert_eq!(snapshot, vec!['A', 'B', 'C']);
}
