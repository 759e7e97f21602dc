//! Break-point interpretation and rendering on top of the pattern automaton.
//!
//! [`hyphen_automaton`] computes a raw per-byte weight buffer; this crate
//! turns that buffer into usable hyphenation points: odd/even
//! interpretation, fragment-length limits, character-boundary safety for
//! UTF-8 words, and separator insertion.
//!
//! - [`options`] -- Break-limit options
//! - [`breaks`] -- Weight-buffer interpretation and rendering helpers
//! - [`hyphenator`] -- The [`Hyphenator`] trait and its pattern-backed impl

pub mod breaks;
pub mod hyphenator;
pub mod options;

pub use hyphenator::{Hyphenator, PatternHyphenator};
pub use options::HyphenationOptions;
