pub mod completion_bundle;
pub mod identifiers;

pub use completion_bundle::{CompletedWord, CompletionMetadata, CompletionResult};
pub use identifiers::{LexiconVersion, WordId};
