pub mod lexicon;

pub use crate::types::identifiers::{LexiconVersion, WordId};
pub use lexicon::{Lexicon, LexiconError};
