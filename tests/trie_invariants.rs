use std::collections::BTreeSet;

use completion_core::completion::Completer;
use completion_core::lexicon::Lexicon;
use completion_core::trie::{CompressedTrie, NodeSnapshot};

// A corpus that exercises every structural case: multi-way branching,
// words that are prefixes of other words, splits at and between existing
// boundaries, and an unrelated singleton.
const CORPUS: &[&str] = &[
    "stock", "bear", "bull", "bell", "bellow", "beacon", "be", "internal",
    "internet", "interval", "int", "data", "database", "date", "a", "ab",
];

fn build(list: &[&str]) -> CompressedTrie {
    let words = list.iter().map(|w| w.to_string()).collect();
    CompressedTrie::build(Lexicon::ingest(words).unwrap())
}

fn completions(trie: &CompressedTrie, prefix: &str) -> Option<BTreeSet<String>> {
    trie.completions(prefix).map(|ids| {
        ids.into_iter()
            .map(|id| trie.lexicon().word(id).to_string())
            .collect()
    })
}

/// Every prefix of every corpus word, plus probes that must miss.
fn probe_prefixes() -> Vec<String> {
    let mut probes = BTreeSet::new();
    for word in CORPUS {
        for end in 0..=word.len() {
            probes.insert(word[..end].to_string());
        }
    }
    for miss in ["z", "bex", "datz", "interna", "bearing", "stocks"] {
        probes.insert(miss.to_string());
    }
    probes.into_iter().collect()
}

#[test]
fn round_trip_every_inserted_word() {
    let trie = build(CORPUS);
    for word in CORPUS {
        let matched = completions(&trie, word)
            .unwrap_or_else(|| panic!("{word} not found after insertion"));
        assert!(matched.contains(*word), "{word} missing from its own completions");
    }
}

#[test]
fn completeness_of_the_empty_prefix() {
    let trie = build(CORPUS);
    let all = completions(&trie, "").unwrap();
    let expected: BTreeSet<String> = CORPUS.iter().map(|w| w.to_string()).collect();
    assert_eq!(all, expected);
}

#[test]
fn no_false_positives() {
    let trie = build(CORPUS);
    for prefix in probe_prefixes() {
        let Some(matched) = completions(&trie, &prefix) else {
            continue;
        };
        for word in &matched {
            assert!(
                word.starts_with(&prefix),
                "completions({prefix:?}) returned {word:?}"
            );
        }
    }
}

#[test]
fn extending_a_prefix_never_adds_matches() {
    let trie = build(CORPUS);
    for prefix in probe_prefixes() {
        let wider = completions(&trie, &prefix).unwrap_or_default();
        for c in b'a'..=b'z' {
            let mut longer = prefix.clone();
            longer.push(c as char);
            let narrower = completions(&trie, &longer).unwrap_or_default();
            assert!(
                narrower.is_subset(&wider),
                "completions({longer:?}) is not a subset of completions({prefix:?})"
            );
        }
    }
}

#[test]
fn absent_prefixes_are_none_not_empty() {
    let trie = build(CORPUS);
    for miss in ["z", "bex", "datz", "bearing", "stocks", "belll"] {
        assert_eq!(completions(&trie, miss), None, "expected {miss:?} to be absent");
    }
}

fn assert_siblings_disjoint(edges: &[NodeSnapshot], path: &str) {
    let mut leading = BTreeSet::new();
    for edge in edges {
        if let Some(first) = edge.label.bytes().next() {
            assert!(
                leading.insert(first),
                "two edges under {path:?} start with {:?}",
                first as char
            );
        }
        let deeper = format!("{path}{}", edge.label);
        assert_siblings_disjoint(&edge.children, &deeper);
    }
}

fn assert_at_most_one_empty_label(edges: &[NodeSnapshot], path: &str) {
    let empties = edges.iter().filter(|e| e.label.is_empty()).count();
    assert!(empties <= 1, "{empties} empty-label edges under {path:?}");
    for edge in edges {
        assert!(
            !edge.label.is_empty() || edge.children.is_empty(),
            "empty-label edge under {path:?} must be a leaf"
        );
        let deeper = format!("{path}{}", edge.label);
        assert_at_most_one_empty_label(&edge.children, &deeper);
    }
}

#[test]
fn sibling_labels_stay_disjoint_after_every_insert() {
    // Re-build word by word so the invariant is checked after each step.
    for end in 1..=CORPUS.len() {
        let trie = build(&CORPUS[..end]);
        let snapshot = trie.snapshot();
        assert_siblings_disjoint(&snapshot.edges, "");
        assert_at_most_one_empty_label(&snapshot.edges, "");
    }
}

#[test]
fn leaf_paths_spell_their_words() {
    fn walk(edges: &[NodeSnapshot], path: &str) {
        for edge in edges {
            let spelled = format!("{path}{}", edge.label);
            if let Some(word) = &edge.word {
                assert!(edge.children.is_empty());
                assert_eq!(&spelled, word, "leaf path does not spell its word");
            } else {
                assert!(!edge.children.is_empty(), "internal node without children");
            }
            walk(&edge.children, &spelled);
        }
    }

    let trie = build(CORPUS);
    walk(&trie.snapshot().edges, "");
}

#[test]
fn completion_set_is_insertion_order_independent() {
    let mut reversed: Vec<&str> = CORPUS.to_vec();
    reversed.reverse();

    let forward = Completer::from_words(CORPUS.iter().copied()).unwrap();
    let backward = Completer::from_words(reversed).unwrap();

    for prefix in probe_prefixes() {
        let f: Option<BTreeSet<String>> = forward
            .complete(&prefix)
            .map(|r| r.words.into_iter().map(|w| w.word).collect());
        let b: Option<BTreeSet<String>> = backward
            .complete(&prefix)
            .map(|r| r.words.into_iter().map(|w| w.word).collect());
        assert_eq!(f, b, "order-dependent result for {prefix:?}");
    }
}
