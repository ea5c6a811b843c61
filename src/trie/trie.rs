// This is intentionally thin:
// no mutation after build
// runtime reads only

use crate::lexicon::Lexicon;
use crate::trie::node::{common_prefix_len, Node, NodeId, ROOT};
use crate::trie::render::TrieSnapshot;
use crate::types::identifiers::WordId;

/// A compressed (radix-style) trie over a fixed lexicon.
///
/// Owns the lexicon and the node arena. Built once, then read-only; all
/// queries are non-mutating and safe to issue from independent callers.
#[derive(Debug)]
pub struct CompressedTrie {
    lexicon: Lexicon,
    nodes: Vec<Node>,
}

impl CompressedTrie {
    /// Insert every lexicon word, strictly in input order, into an
    /// initially empty trie. One-shot: build a fresh trie instead of
    /// re-building.
    pub fn build(lexicon: Lexicon) -> Self {
        let mut nodes = vec![Node::root()];
        for id in lexicon.ids() {
            super::build::insert_word(&mut nodes, lexicon.as_slice(), id);
        }
        debug_assert!(super::build::siblings_disjoint(&nodes, lexicon.as_slice()));

        Self::from_parts(lexicon, nodes)
    }

    pub(crate) fn from_parts(lexicon: Lexicon, nodes: Vec<Node>) -> Self {
        CompressedTrie { lexicon, nodes }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All words sharing `prefix`, as ids into the lexicon, in
    /// depth-first order.
    ///
    /// `None` means the prefix does not occur in the trie. `Some` with an
    /// empty vec occurs only for an empty prefix over an empty lexicon;
    /// callers can rely on the distinction.
    pub fn completions(&self, prefix: &str) -> Option<Vec<WordId>> {
        let mut node = ROOT;
        let mut pos = 0usize;

        'descend: while pos < prefix.len() {
            let mut child = self.nodes[node.index()].first_child?;
            loop {
                let remaining = &prefix[pos..];
                let label = match self.nodes[child.index()].label {
                    Some(span) => span.resolve(&self.lexicon),
                    None => "",
                };
                let shared = common_prefix_len(label.as_bytes(), remaining.as_bytes());

                if shared == remaining.len() && shared > 0 {
                    // Prefix exhausted, possibly mid-edge: every word in
                    // this child's subtree starts with it.
                    node = child;
                    pos = prefix.len();
                    continue 'descend;
                }
                if shared == label.len() && shared > 0 {
                    node = child;
                    pos += shared;
                    continue 'descend;
                }
                if shared > 0 {
                    // Mismatch mid-edge. No sibling can do better: sibling
                    // labels are disjoint on their first byte.
                    return None;
                }
                child = self.nodes[child.index()].next_sibling?;
            }
        }

        let mut words = Vec::new();
        self.collect_leaves(node, &mut words);
        Some(words)
    }

    /// Every leaf word in the subtree rooted at `start`, via an explicit
    /// stack rather than recursion.
    fn collect_leaves(&self, start: NodeId, out: &mut Vec<WordId>) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            match node.first_child {
                None => {
                    // A childless root is an empty trie, not a leaf.
                    if let Some(span) = node.label {
                        out.push(span.word);
                    }
                }
                Some(first) => {
                    let mut child = Some(first);
                    while let Some(c) = child {
                        stack.push(c);
                        child = self.nodes[c.index()].next_sibling;
                    }
                }
            }
        }
    }

    pub fn snapshot(&self) -> TrieSnapshot {
        TrieSnapshot::capture(self)
    }

    /// Indented text dump of the structure, for debugging.
    pub fn render(&self) -> String {
        self.snapshot().render()
    }
}
