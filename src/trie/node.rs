use crate::lexicon::Lexicon;
use crate::types::identifiers::WordId;

/// Arena index of a trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// The root sentinel is always slot 0 of the arena.
pub(crate) const ROOT: NodeId = NodeId(0);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A half-open byte range into one corpus word.
///
/// Labels are references into the lexicon, never copies; several nodes may
/// reference different ranges of the same stored word. An empty span
/// (`start == end`) marks a word that terminates exactly at a split point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub word: WordId,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(word: WordId, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { word, start, end }
    }

    pub fn empty(word: WordId, at: usize) -> Self {
        Span::new(word, at, at)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Split into two independent, disjoint sub-ranges at `mid` bytes.
    /// The head covers `[start, start+mid)`, the tail `[start+mid, end)`.
    pub fn split_at(&self, mid: usize) -> (Span, Span) {
        debug_assert!(mid <= self.len());
        let cut = self.start + mid;
        (
            Span::new(self.word, self.start, cut),
            Span::new(self.word, cut, self.end),
        )
    }

    /// Resolve the labeled bytes against the lexicon.
    pub fn resolve<'a>(&self, lexicon: &'a Lexicon) -> &'a str {
        &lexicon.word(self.word)[self.start..self.end]
    }

    /// Same resolution for a lexicon still under construction.
    pub(crate) fn slice<'a>(&self, words: &'a [String]) -> &'a str {
        &words[self.word.as_usize()][self.start..self.end]
    }
}

pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// A branch point in the trie.
///
/// Children of a node form a singly linked sibling chain rooted at
/// `first_child`. Only the root sentinel has no label.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub label: Option<Span>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            label: None,
            first_child: None,
            next_sibling: None,
        }
    }

    pub(crate) fn leaf(label: Span) -> Self {
        Node {
            label: Some(label),
            first_child: None,
            next_sibling: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}
