pub mod build;
pub mod node;
pub mod render;
pub mod trie;

pub use build::TrieBuilder;
pub use node::{Node, NodeId, Span};
pub use render::{NodeSnapshot, TrieSnapshot};
pub use trie::CompressedTrie;
