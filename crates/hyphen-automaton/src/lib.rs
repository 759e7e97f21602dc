//! Knuth-Liang pattern automaton for hyphenation.
//!
//! This crate loads a plain-text hyphenation pattern dictionary and compiles
//! it into a byte-alphabet finite automaton with failure links: each state
//! stands for a pattern prefix, each state's fallback points at the state of
//! the longest proper suffix of that prefix, and states where a pattern word
//! ends carry the pattern's inter-letter weight digits. Running a word
//! through the automaton max-merges every matching pattern's digits into a
//! per-position weight buffer; odd weights mark permitted hyphenation points.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Dictionary text parsing (charset header, pattern lines)
//! - [`state`] -- State and transition records
//! - [`builder`] -- Trie construction and fallback linking
//! - [`automaton`] -- The immutable automaton and the hyphenate executor

pub mod automaton;
pub mod builder;
pub mod dictionary;
pub mod state;

use std::path::PathBuf;

pub use automaton::{Automaton, AutomatonStats};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened or read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for the hyphenate executor.
///
/// Execution itself is pure table walking; the only thing that can fail is
/// reserving the per-call scratch buffers for a pathologically long word.
#[derive(Debug, thiserror::Error)]
pub enum HyphenateError {
    /// The scratch buffers for a very long word could not be allocated.
    #[error("failed to allocate scratch buffers for a {len}-byte word")]
    ScratchAlloc { len: usize },
}
