use std::collections::BTreeSet;

use crate::lexicon::{Lexicon, LexiconError};
use crate::trie::node::{common_prefix_len, Node, NodeId, Span, ROOT};
use crate::trie::trie::CompressedTrie;
use crate::types::identifiers::WordId;

/// Incremental trie construction.
///
/// The builder validates each word the way `Lexicon::ingest` does, grows
/// the word list and the node arena in lockstep, and hands both to the
/// immutable `CompressedTrie` on `finish`. Construction is single-shot and
/// single-threaded; a finished trie is never inserted into again.
pub struct TrieBuilder {
    words: Vec<String>,
    seen: BTreeSet<String>,
    nodes: Vec<Node>,
}

impl TrieBuilder {
    pub fn new() -> Self {
        TrieBuilder {
            words: Vec::new(),
            seen: BTreeSet::new(),
            nodes: vec![Node::root()],
        }
    }

    /// Validate one word and thread it into the trie.
    pub fn insert(&mut self, word: impl Into<String>) -> Result<WordId, LexiconError> {
        let word = word.into();
        if word.is_empty() {
            return Err(LexiconError::EmptyWord(self.words.len()));
        }
        if !self.seen.insert(word.clone()) {
            return Err(LexiconError::DuplicateWord(word));
        }

        let id = WordId::new(self.words.len());
        self.words.push(word);
        insert_word(&mut self.nodes, &self.words, id);
        debug_assert!(siblings_disjoint(&self.nodes, &self.words));

        Ok(id)
    }

    pub fn finish(self) -> CompressedTrie {
        CompressedTrie::from_parts(Lexicon::from_validated(self.words), self.nodes)
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// How an edge label relates to the remaining suffix of the word being
/// inserted.
enum Overlap {
    /// The label is a nonempty prefix of the suffix; descend past it.
    Contains { len: usize },
    /// Label and suffix agree on `shared` bytes but the label keeps going.
    /// Covers the suffix being the shorter, fully contained side too.
    Partial { shared: usize },
    /// No common leading byte.
    Disjoint,
}

fn classify(label: Option<Span>, words: &[String], suffix: &str) -> Overlap {
    let Some(span) = label else {
        return Overlap::Disjoint;
    };
    let edge = span.slice(words);
    let shared = common_prefix_len(edge.as_bytes(), suffix.as_bytes());
    if shared == 0 {
        Overlap::Disjoint
    } else if shared == edge.len() {
        Overlap::Contains { len: shared }
    } else {
        Overlap::Partial { shared }
    }
}

/// Thread one already-validated word into the arena.
///
/// Iterative descent: the outer loop walks down consumed edges, the inner
/// loop scans one sibling chain. At most one sibling can overlap the
/// suffix (sibling labels are disjoint on their first byte), so the scan
/// never backtracks.
pub(crate) fn insert_word(nodes: &mut Vec<Node>, words: &[String], id: WordId) {
    let text = words[id.as_usize()].as_str();
    let mut node = ROOT;
    let mut pos = 0usize;

    'descend: loop {
        let Some(first) = nodes[node.index()].first_child else {
            attach_to_childless(nodes, node, Span::new(id, pos, text.len()));
            return;
        };

        let suffix = &text[pos..];
        let mut child = first;
        loop {
            match classify(nodes[child.index()].label, words, suffix) {
                Overlap::Contains { len } => {
                    pos += len;
                    node = child;
                    continue 'descend;
                }
                Overlap::Partial { shared } => {
                    split_edge(nodes, child, shared, Span::new(id, pos + shared, text.len()));
                    return;
                }
                Overlap::Disjoint => match nodes[child.index()].next_sibling {
                    Some(next) => child = next,
                    None => {
                        // Chain exhausted: the suffix opens a new branch.
                        // An empty suffix here means the word ends exactly
                        // at this node; the leaf then carries an empty span.
                        let leaf = push(nodes, Node::leaf(Span::new(id, pos, text.len())));
                        nodes[child.index()].next_sibling = Some(leaf);
                        return;
                    }
                },
            }
        }
    }
}

/// Give a childless node its first child edge.
///
/// The childless node is either the empty root or a leaf the new word
/// extends. A leaf's own word must stay retrievable, so it is pinned as an
/// empty-label child before the new edge goes in.
fn attach_to_childless(nodes: &mut Vec<Node>, node: NodeId, rest: Span) {
    let leaf = push(nodes, Node::leaf(rest));
    if let Some(label) = nodes[node.index()].label {
        let marker = push(nodes, Node::leaf(Span::empty(label.word, label.end)));
        nodes[marker.index()].next_sibling = Some(leaf);
        nodes[node.index()].first_child = Some(marker);
    } else {
        nodes[node.index()].first_child = Some(leaf);
    }
}

/// Split `edge` after `shared` bytes of its label.
///
/// A new internal node takes over the label tail and the edge's former
/// children; the edge keeps the shared head. The inserted word's remainder
/// becomes a sibling leaf of the moved node. Head and tail are two
/// independent spans over the same word, never two views of one mutated
/// range.
fn split_edge(nodes: &mut Vec<Node>, edge: NodeId, shared: usize, rest: Span) {
    let Some(label) = nodes[edge.index()].label else {
        debug_assert!(false, "split target always carries a label");
        return;
    };
    let (head, tail) = label.split_at(shared);
    let moved_children = nodes[edge.index()].first_child;

    // `rest` may be an empty span: the inserted word ends exactly at the
    // split point.
    let leaf = push(nodes, Node::leaf(rest));
    let moved = push(
        nodes,
        Node {
            label: Some(tail),
            first_child: moved_children,
            next_sibling: Some(leaf),
        },
    );

    let edge_node = &mut nodes[edge.index()];
    edge_node.label = Some(head);
    edge_node.first_child = Some(moved);
}

fn push(nodes: &mut Vec<Node>, node: Node) -> NodeId {
    let id = NodeId::new(nodes.len());
    nodes.push(node);
    id
}

/// Post-insert structural check: no two sibling labels share a leading
/// byte anywhere in the arena. Debug builds only.
pub(crate) fn siblings_disjoint(nodes: &[Node], words: &[String]) -> bool {
    for node in nodes {
        let mut leading = BTreeSet::new();
        let mut child = node.first_child;
        while let Some(c) = child {
            let n = &nodes[c.index()];
            if let Some(span) = n.label {
                if let Some(first) = span.slice(words).bytes().next() {
                    if !leading.insert(first) {
                        return false;
                    }
                }
            }
            child = n.next_sibling;
        }
    }
    true
}
