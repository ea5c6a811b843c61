use std::collections::BTreeSet;

use thiserror::Error;

use crate::types::identifiers::{LexiconVersion, WordId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("Empty word at position {0}")]
    EmptyWord(usize),
    #[error("Duplicate word: {0}")]
    DuplicateWord(String),
}

/// The fixed, ordered vocabulary a trie is built over.
///
/// Words are expected to be lowercase ASCII; character-set validation is
/// the caller's contract and is not performed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
    version: LexiconVersion,
}

impl Lexicon {
    /// Ingest an ordered word list into a Lexicon.
    ///
    /// This is the ONLY public way to construct a Lexicon. It enforces the
    /// invariants the trie relies on: no empty words, no duplicates.
    pub fn ingest(words: Vec<String>) -> Result<Self, LexiconError> {
        let mut seen = BTreeSet::new();
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(LexiconError::EmptyWord(index));
            }
            if !seen.insert(word.as_str()) {
                return Err(LexiconError::DuplicateWord(word.clone()));
            }
        }

        Ok(Self::from_validated(words))
    }

    /// Words already checked by the caller (builder path).
    pub(crate) fn from_validated(words: Vec<String>) -> Self {
        let version = LexiconVersion::from_words(&words);
        Lexicon { words, version }
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.as_usize()]
    }

    pub fn version(&self) -> &LexiconVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len()).map(WordId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId::new(i), w.as_str()))
    }
}
