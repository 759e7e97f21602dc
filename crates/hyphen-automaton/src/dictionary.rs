// Dictionary text parsing: charset header line and pattern lines.

/// Maximum number of significant bytes in the charset header line.
pub const MAX_CHARSET_NAME: usize = 20;

/// A pattern line decomposed into its letter bytes and weight digits.
///
/// `weights[k]` is the digit for the boundary immediately before letter `k`;
/// one trailing digit covers the boundary after the last letter, so the raw
/// digit string is one longer than the word. Leading zero digits are trimmed
/// (the executor's offset arithmetic compensates index-for-index, and a zero
/// never wins a max-merge against the `'0'`-initialized buffer).
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedPattern {
    pub word: Vec<u8>,
    pub weights: Vec<u8>,
}

/// Extract the charset identifier from the header line.
///
/// The identifier is metadata for the caller's encoding layer; the automaton
/// never interprets it. Trailing line-ending bytes are dropped and the result
/// is capped at [`MAX_CHARSET_NAME`] bytes. The encoding of the line itself
/// is caller-chosen, so non-UTF-8 bytes are replaced for display.
pub fn parse_charset(line: &[u8]) -> String {
    let mut end = line.len();
    while end > 0 && (line[end - 1] == b'\n' || line[end - 1] == b'\r') {
        end -= 1;
    }
    let trimmed = &line[..end.min(MAX_CHARSET_NAME)];
    String::from_utf8_lossy(trimmed).into_owned()
}

/// Returns `true` for comment lines, which are skipped whole.
pub fn is_comment(line: &[u8]) -> bool {
    line.first() == Some(&b'%')
}

/// Decompose one pattern line.
///
/// The line is consumed up to the first byte <= 0x20 (newline, space, or
/// control), so trailing `\r\n` needs no special casing. Decimal digits
/// attach a weight to the current inter-letter boundary (a later digit at
/// the same boundary wins); every other byte is a letter of the pattern
/// word. Lines without letters yield an empty word, which the builder
/// attaches to the root as an inert match.
pub fn parse_pattern_line(line: &[u8]) -> ParsedPattern {
    let mut word = Vec::new();
    let mut weights = vec![b'0'];

    for &b in line {
        if b <= b' ' {
            break;
        }
        if b.is_ascii_digit() {
            if let Some(last) = weights.last_mut() {
                *last = b;
            }
        } else {
            word.push(b);
            weights.push(b'0');
        }
    }

    let lead = weights.iter().take_while(|&&w| w == b'0').count();
    weights.drain(..lead);

    ParsedPattern { word, weights }
}
