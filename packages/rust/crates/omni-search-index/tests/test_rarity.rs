//! Tests for rarity module - bit position assignment.

use omni_search_index::{NgramSet, compile_ngrams};

fn set(ngrams: &[&str]) -> NgramSet {
    ngrams.iter().map(ToString::to_string).collect()
}

#[test]
fn test_rarest_ngram_gets_highest_position() {
    let base = ["aaa", "aab", "aac", "aad"];
    let ngram_sets: Vec<NgramSet> = (0..4).map(|n| set(&base[n..])).collect();

    let positions = compile_ngrams(&ngram_sets);

    assert_eq!(positions.len(), 4);
    assert_eq!(positions["aad"], 0);
    assert_eq!(positions["aac"], 1);
    assert_eq!(positions["aab"], 2);
    assert_eq!(positions["aaa"], 3);
}

#[test]
fn test_positions_independent_of_record_order() {
    let forward = vec![set(&["abc", "bcd"]), set(&["bcd", "cde"]), set(&["xyz"])];
    let mut backward = forward.clone();
    backward.reverse();

    assert_eq!(compile_ngrams(&forward), compile_ngrams(&backward));
}

#[test]
fn test_positions_are_dense() {
    let positions = compile_ngrams(&[set(&["#ab", ".ab", "abc"]), set(&["abc", "zzz"])]);

    let distinct: std::collections::BTreeSet<usize> = positions.values().copied().collect();
    assert_eq!(distinct.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(positions["#ab"], positions[".ab"]);
}

#[test]
fn test_empty_input() {
    assert!(compile_ngrams(&[]).is_empty());
    assert!(compile_ngrams(&[NgramSet::new()]).is_empty());
}
