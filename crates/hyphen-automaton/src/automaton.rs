// The immutable pattern automaton and the hyphenate executor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::builder::AutomatonBuilder;
use crate::dictionary::{self, parse_charset, parse_pattern_line};
use crate::state::{ROOT, State, StateId};
use crate::{DictionaryError, HyphenateError};

/// Word-boundary sentinel wrapped around every scanned word, so patterns
/// can anchor at the start or end of a word.
const SENTINEL: u8 = b'.';

/// A compiled hyphenation pattern automaton.
///
/// Built once from a dictionary file and immutable afterwards: `hyphenate`
/// touches no shared mutable state, so one automaton may be used from any
/// number of threads concurrently.
pub struct Automaton {
    states: Box<[State]>,
    charset: String,
}

/// Size summary for diagnostics; see [`Automaton::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatonStats {
    /// Number of states, the root included.
    pub states: usize,
    /// Total number of direct transitions across all states.
    pub transitions: usize,
    /// Number of states carrying a match pattern.
    pub patterns: usize,
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("Automaton")
            .field("charset", &self.charset)
            .field("states", &stats.states)
            .field("transitions", &stats.transitions)
            .field("patterns", &stats.patterns)
            .finish()
    }
}

impl Automaton {
    /// Load a pattern dictionary from a file.
    ///
    /// The file's first line is the charset identifier (metadata, see
    /// [`charset`](Self::charset)); later lines are `%` comments or
    /// pattern lines. There are no parse errors: malformed lines fall out
    /// as inert patterns, and only I/O failures are reported.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            DictionaryError::Io { source, .. } => io_err(source),
        })
    }

    /// Parse a dictionary from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        // Reading from a slice cannot fail.
        match Self::from_reader(data) {
            Ok(automaton) => automaton,
            Err(DictionaryError::Io { .. }) => unreachable!("slice reads are infallible"),
        }
    }

    /// Parse a dictionary from any buffered reader.
    ///
    /// Lines are split on `\n`; the parser tolerates `\r\n` endings and a
    /// missing final newline. An empty source yields a working automaton
    /// with an empty charset and no patterns.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, DictionaryError> {
        let io_err = |source| DictionaryError::Io {
            path: "<reader>".into(),
            source,
        };

        let mut line = Vec::new();
        let read_line = |buf: &mut Vec<u8>, reader: &mut R| -> Result<bool, DictionaryError> {
            buf.clear();
            let n = reader.read_until(b'\n', buf).map_err(io_err)?;
            Ok(n > 0)
        };

        let charset = if read_line(&mut line, &mut reader)? {
            parse_charset(&line)
        } else {
            String::new()
        };

        let mut builder = AutomatonBuilder::new();
        while read_line(&mut line, &mut reader)? {
            if dictionary::is_comment(&line) {
                continue;
            }
            let pattern = parse_pattern_line(&line);
            builder.insert_pattern(&pattern.word, pattern.weights);
        }
        builder.link_fallbacks();

        Ok(Self {
            states: builder.finish().into_boxed_slice(),
            charset,
        })
    }

    /// The charset identifier from the dictionary's header line.
    ///
    /// Consumed verbatim and never interpreted here; callers use it to pick
    /// the encoding their words must arrive in.
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Size counters for diagnostics and tooling.
    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            states: self.states.len(),
            transitions: self.states.iter().map(|s| s.transitions.len()).sum(),
            patterns: self
                .states
                .iter()
                .filter(|s| s.match_weights.is_some())
                .count(),
        }
    }

    /// Compute per-position hyphenation weights for `word`.
    ///
    /// Returns one ASCII digit per input byte. An odd digit at position
    /// `k` means a hyphen may be inserted immediately after byte `k`; even
    /// digits (including `'0'`) forbid it. Position 0 is always `'0'`.
    /// Interpreting odd against even is the caller's business; this only
    /// computes numeric maxima over all matching patterns.
    ///
    /// The scan wraps the word in `.` sentinels and walks the automaton
    /// left to right. On a failed transition it follows fallback links;
    /// a mismatch with no fallback left (the root) skips the input byte
    /// and resumes at the root without a match check for that position --
    /// pattern words can begin anywhere in the word, so the scan must keep
    /// going past bytes no pattern starts with.
    pub fn hyphenate(&self, word: &[u8]) -> Result<Vec<u8>, HyphenateError> {
        let alloc_err = |_| HyphenateError::ScratchAlloc { len: word.len() };
        let wrapped_len = word.len() + 2;

        let mut prep = Vec::new();
        prep.try_reserve_exact(wrapped_len).map_err(alloc_err)?;
        prep.push(SENTINEL);
        prep.extend_from_slice(word);
        prep.push(SENTINEL);

        let mut weights = Vec::new();
        weights.try_reserve_exact(wrapped_len).map_err(alloc_err)?;
        weights.resize(wrapped_len, b'0');

        let mut state = ROOT;
        'scan: for (i, &ch) in prep.iter().enumerate() {
            loop {
                if let Some(next) = self.state(state).transition(ch) {
                    state = next;
                    break;
                }
                match self.state(state).fallback() {
                    Some(fallback) => state = fallback,
                    None => {
                        state = ROOT;
                        continue 'scan;
                    }
                }
            }

            if let Some(matched) = self.state(state).match_weights() {
                let offset = (i + 1) as isize - matched.len() as isize;
                for (k, &digit) in matched.iter().enumerate() {
                    let pos = offset + k as isize;
                    if (0..wrapped_len as isize).contains(&pos) {
                        let slot = &mut weights[pos as usize];
                        if *slot < digit {
                            *slot = digit;
                        }
                    }
                }
            }
        }

        // Drop the leading sentinel's weight, keep one digit per input
        // byte, and pin the first position: no hyphen after the first
        // letter comes from the automaton itself.
        weights.copy_within(1.., 0);
        weights.truncate(word.len());
        if let Some(first) = weights.first_mut() {
            *first = b'0';
        }

        Ok(weights)
    }

    fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }
}
