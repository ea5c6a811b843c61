use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::trie::node::NodeId;
use crate::trie::trie::CompressedTrie;
use crate::types::identifiers::LexiconVersion;

/// One edge of the trie with its label resolved to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub label: String,
    /// Set iff the node is a leaf: the full word its path spells.
    pub word: Option<String>,
    pub children: Vec<NodeSnapshot>,
}

/// A serializable copy of the trie structure.
///
/// Labels are resolved to owned strings so the snapshot stands alone;
/// the live trie keeps referencing the lexicon instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSnapshot {
    pub lexicon_version: LexiconVersion,
    pub word_count: usize,
    pub edges: Vec<NodeSnapshot>,
}

impl TrieSnapshot {
    pub fn capture(trie: &CompressedTrie) -> Self {
        let root = &trie.nodes()[0];
        TrieSnapshot {
            lexicon_version: trie.lexicon().version().clone(),
            word_count: trie.lexicon().len(),
            edges: capture_chain(trie, root.first_child),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Indented dump, one edge per line, leaves annotated with their word.
    pub fn render(&self) -> String {
        let mut out = String::from("root\n");
        render_chain(&self.edges, 1, &mut out);
        out
    }
}

fn capture_chain(trie: &CompressedTrie, first: Option<NodeId>) -> Vec<NodeSnapshot> {
    let mut out = Vec::new();
    let mut next = first;
    while let Some(id) = next {
        let node = &trie.nodes()[id.index()];
        let label = match node.label {
            Some(span) => span.resolve(trie.lexicon()).to_string(),
            None => String::new(),
        };
        let word = match (node.first_child, node.label) {
            (None, Some(span)) => Some(trie.lexicon().word(span.word).to_string()),
            _ => None,
        };
        out.push(NodeSnapshot {
            label,
            word,
            children: capture_chain(trie, node.first_child),
        });
        next = node.next_sibling;
    }
    out
}

fn render_chain(edges: &[NodeSnapshot], depth: usize, out: &mut String) {
    for edge in edges {
        for _ in 0..depth {
            out.push_str("    ");
        }
        match &edge.word {
            Some(word) => {
                let _ = writeln!(out, "{:?} -> {}", edge.label, word);
            }
            None => {
                let _ = writeln!(out, "{:?}", edge.label);
            }
        }
        render_chain(&edge.children, depth + 1, out);
    }
}
