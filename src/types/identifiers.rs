use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Position of a word in the ingested lexicon.
///
/// Trie labels and completion results refer to corpus words by id rather
/// than by copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(usize);

impl WordId {
    pub fn new(index: usize) -> Self {
        WordId(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Content hash version of a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexiconVersion(String);

impl LexiconVersion {
    /// Hash the word sequence in order.
    ///
    /// Each word is followed by a NUL separator so that `["ab","c"]` and
    /// `["a","bc"]` hash differently.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut hasher = Sha256::new();
        for word in words {
            hasher.update(word.as_ref().as_bytes());
            hasher.update([0u8]);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        LexiconVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
