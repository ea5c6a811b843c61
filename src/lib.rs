//! Deterministic prefix completion over a compressed (radix-style) trie.
//!
//! `completion-core` provides lexicon ingestion, content-hash versioning,
//! incremental trie construction with edge splitting, and prefix-based
//! completion lookup. All operations are deterministic: identical inputs
//! always produce identical outputs, byte-for-byte.
//!
//! Edges carry substring ranges into the original words, never copies, so
//! the trie stores each word's characters exactly once.

pub mod completion;
pub mod lexicon;
pub mod trie;
pub mod types;
