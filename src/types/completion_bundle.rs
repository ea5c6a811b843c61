use serde::{Deserialize, Serialize};

use crate::types::identifiers::WordId;

/// A matched word returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedWord {
    pub id: WordId,
    /// We own the text here because it's part of the final output payload
    pub word: String,
}

/// Metadata describing the outcome of a completion lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMetadata {
    pub prefix: String,

    pub words_considered: usize,
    pub matches: usize,
}

/// The final result of a completion lookup for a prefix that exists in
/// the trie. An absent prefix is reported as `None` by the caller, never
/// as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub words: Vec<CompletedWord>,
    pub completion: CompletionMetadata,
}
