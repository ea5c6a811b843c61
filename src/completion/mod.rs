use crate::lexicon::{Lexicon, LexiconError};
use crate::trie::CompressedTrie;
use crate::types::completion_bundle::{CompletedWord, CompletionMetadata, CompletionResult};

/// Read-only completion surface over a built trie.
///
/// Resolves word ids back to owned text and wraps them with lookup
/// metadata, with deterministic output ordering.
pub struct Completer {
    trie: CompressedTrie,
}

impl Completer {
    pub fn new(trie: CompressedTrie) -> Self {
        Completer { trie }
    }

    /// Ingest and build in one step.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lexicon = Lexicon::ingest(words)?;
        Ok(Completer::new(CompressedTrie::build(lexicon)))
    }

    pub fn trie(&self) -> &CompressedTrie {
        &self.trie
    }

    /// All lexicon words starting with `prefix`.
    ///
    /// `None` means the prefix does not occur in the lexicon. That is a
    /// normal outcome, not a failure; an empty result can only come from
    /// an empty prefix over an empty lexicon.
    pub fn complete(&self, prefix: &str) -> Option<CompletionResult> {
        // 1. Lookup phase
        let mut ids = self.trie.completions(prefix)?;

        // 2. Ordering phase
        // The trie yields depth-first order; sort by id for byte-stable output
        ids.sort_unstable();
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]), "completion ids must be unique");

        // 3. Resolution phase
        let lexicon = self.trie.lexicon();
        let words: Vec<CompletedWord> = ids
            .into_iter()
            .map(|id| CompletedWord {
                id,
                word: lexicon.word(id).to_string(),
            })
            .collect();

        let completion = CompletionMetadata {
            prefix: prefix.to_string(),
            words_considered: lexicon.len(),
            matches: words.len(),
        };

        Some(CompletionResult { words, completion })
    }
}
