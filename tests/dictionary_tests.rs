// Integration tests for the dictionary index

use boggle_solver::{Dictionary, Trie, WordIndex};
use proptest::prelude::*;

// ============ Dictionary Creation ============

#[test]
fn test_dictionary_creates_successfully() {
    let dict = Dictionary::new(["ABEF", "AB", "BCG"]);
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_count_by_length() {
    let dict = Dictionary::new(["AB", "CAT", "DOG", "HORSE", "SADDLE"]);
    let counts = dict.count_by_length();

    assert_eq!(counts.len(), 4);
    assert_eq!(counts.get(&3), Some(&2));

    let total: usize = counts.values().sum();
    assert_eq!(total, dict.len());
}

#[test]
fn test_duplicate_words_collapse() {
    let dict = Dictionary::new(["CAT", "CAT", "CAT"]);
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.words_with_length(3), 1);
}

// ============ Queries ============

#[test]
fn test_contains_exact_only() {
    let dict = Dictionary::new(["STABLE", "STABLES"]);

    assert!(dict.contains("STABLE"));
    assert!(dict.contains("STABLES"));
    assert!(!dict.contains("STAB"));
    assert!(!dict.contains("STABLESS"));
}

#[test]
fn test_has_prefix_includes_word_itself() {
    let dict = Dictionary::new(["QUEEN"]);

    assert!(dict.has_prefix("Q"));
    assert!(dict.has_prefix("QUE"));
    assert!(dict.has_prefix("QUEEN"));
    assert!(!dict.has_prefix("QUEENS"));
    assert!(!dict.has_prefix("QUA"));
}

#[test]
fn test_empty_dictionary_answers_false() {
    let dict = Dictionary::new(Vec::<&str>::new());
    for query in ["", "A", "QU", "ANYTHING"] {
        assert!(!dict.contains(query), "contains({:?})", query);
    }
    assert!(!dict.has_prefix("A"));
}

#[test]
fn test_lowercase_queries_miss() {
    let dict = Dictionary::new(["CAT"]);
    assert!(!dict.contains("cat"));
    assert!(!dict.has_prefix("ca"));
}

// ============ Against a Linear Scan ============

proptest! {
    #[test]
    fn trie_matches_linear_scan(
        words in prop::collection::vec("[A-E]{1,6}", 0..40),
        queries in prop::collection::vec("[A-E]{0,7}", 1..40),
    ) {
        let trie: Trie = words.iter().collect();
        let dict = Dictionary::new(&words);

        for q in &queries {
            let expect_contains = words.iter().any(|w| w == q);
            let expect_prefix = words.iter().any(|w| w.starts_with(q.as_str()));

            prop_assert_eq!(trie.contains(q), expect_contains, "contains({})", q);
            prop_assert_eq!(trie.has_prefix(q), expect_prefix, "has_prefix({})", q);
            prop_assert_eq!(dict.contains(q), expect_contains);
            prop_assert_eq!(dict.has_prefix(q), expect_prefix);
        }
    }

    #[test]
    fn len_counts_distinct_words(words in prop::collection::vec("[A-C]{1,3}", 0..60)) {
        let dict = Dictionary::new(&words);
        let distinct: std::collections::HashSet<&String> = words.iter().collect();
        prop_assert_eq!(dict.len(), distinct.len());
    }
}
