// The Hyphenator trait and its pattern-automaton implementation.

use hyphen_automaton::{Automaton, HyphenateError};

use crate::breaks;
use crate::options::HyphenationOptions;

/// Trait for hyphenation backends.
///
/// The returned string has one character per input character:
///   `' '` = no hyphenation point before this character
///   `'-'` = hyphenation point allowed before this character
pub trait Hyphenator {
    fn hyphenate(&self, word: &str) -> Result<String, HyphenateError>;
}

/// Hyphenator backed by a compiled pattern [`Automaton`].
///
/// Owns the automaton plus the break-limit options; the automaton stays
/// untouched and shareable, the options can be adjusted per use.
pub struct PatternHyphenator {
    automaton: Automaton,
    options: HyphenationOptions,
}

impl PatternHyphenator {
    /// Wrap an automaton with the given break limits.
    pub fn new(automaton: Automaton, options: HyphenationOptions) -> Self {
        Self { automaton, options }
    }

    /// Access the underlying automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &HyphenationOptions {
        &self.options
    }

    /// Update the break-limit options.
    pub fn set_options(&mut self, options: HyphenationOptions) {
        self.options = options;
    }

    /// Raw per-byte weight digits for `word`, with no limits applied.
    pub fn weights(&self, word: &str) -> Result<Vec<u8>, HyphenateError> {
        self.automaton.hyphenate(word.as_bytes())
    }

    /// Byte positions after which a hyphen may be inserted, with the
    /// fragment limits and character-boundary rules applied.
    pub fn break_points(&self, word: &str) -> Result<Vec<usize>, HyphenateError> {
        let weights = self.weights(word)?;
        Ok(breaks::break_points(word, &weights, &self.options))
    }

    /// Return `word` with `separator` inserted at every break point.
    pub fn insert_hyphens(&self, word: &str, separator: &str) -> Result<String, HyphenateError> {
        let points = self.break_points(word)?;
        Ok(breaks::insert_separator(word, &points, separator))
    }
}

impl Hyphenator for PatternHyphenator {
    fn hyphenate(&self, word: &str) -> Result<String, HyphenateError> {
        let points = self.break_points(word)?;
        Ok(breaks::mark_breaks(word, &points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_DICT: &[u8] = b"ISO8859-1\n\
        hy3ph\n\
        he2n\n\
        hena4\n\
        hen5at\n\
        1na\n\
        n2at\n\
        1tio\n\
        2io\n\
        o2n\n";

    fn demo() -> PatternHyphenator {
        PatternHyphenator::new(
            Automaton::from_bytes(DEMO_DICT),
            HyphenationOptions::default(),
        )
    }

    #[test]
    fn worked_example() {
        let hyph = demo();
        assert_eq!(hyph.insert_hyphens("hyphenation", "-").unwrap(), "hy-phen-ation");
        assert_eq!(hyph.insert_hyphens("hyphen", "-").unwrap(), "hy-phen");
        assert_eq!(hyph.insert_hyphens("nation", "-").unwrap(), "na-tion");
    }

    #[test]
    fn marker_notation() {
        let hyph = demo();
        assert_eq!(hyph.hyphenate("hyphenation").unwrap(), "  -   -    ");
        assert_eq!(hyph.hyphenate("zigzag").unwrap(), "      ");
    }

    #[test]
    fn options_tighten_breaks() {
        let mut hyph = demo();
        assert_eq!(hyph.break_points("hyphenation").unwrap(), vec![1, 5]);

        hyph.set_options(HyphenationOptions {
            left_min: 3,
            ..*hyph.options()
        });
        assert_eq!(hyph.break_points("hyphenation").unwrap(), vec![5]);
    }

    #[test]
    fn raw_weights_ignore_options() {
        let mut hyph = demo();
        hyph.set_options(HyphenationOptions {
            min_word_length: 100,
            ..HyphenationOptions::default()
        });
        // Break points vanish, the weight buffer does not.
        assert_eq!(hyph.break_points("hyphenation").unwrap(), Vec::<usize>::new());
        assert_eq!(hyph.weights("hyphenation").unwrap(), b"03002540020");
    }

    #[test]
    fn unmatched_word_passes_through() {
        let hyph = demo();
        assert_eq!(hyph.insert_hyphens("zigzag", "-").unwrap(), "zigzag");
        assert_eq!(hyph.insert_hyphens("", "-").unwrap(), "");
    }
}
