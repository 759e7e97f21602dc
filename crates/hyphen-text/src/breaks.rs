// Weight-buffer interpretation and rendering.

use crate::options::HyphenationOptions;

/// Whether a weight digit permits a hyphen. For ASCII digits the numeric
/// parity equals the byte parity, so the test is a single bit.
pub fn is_break_weight(digit: u8) -> bool {
    digit.is_ascii_digit() && digit & 1 == 1
}

/// Select the break points of `word` from its weight buffer.
///
/// Returns byte positions `k` meaning "a hyphen may go after byte `k`",
/// filtered three ways: the word must reach `min_word_length` characters,
/// each fragment must satisfy `left_min`/`right_min`, and a break must land
/// on a character boundary -- a weight on an interior byte of a multi-byte
/// character is only honored at that character's final byte.
pub fn break_points(word: &str, weights: &[u8], options: &HyphenationOptions) -> Vec<usize> {
    let total_chars = word.chars().count();
    if total_chars < options.min_word_length {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut seen_chars = 0;
    for (start, ch) in word.char_indices() {
        seen_chars += 1;
        let last = start + ch.len_utf8() - 1;
        if last >= weights.len() {
            break;
        }
        if !is_break_weight(weights[last]) {
            continue;
        }
        if seen_chars < options.left_min || total_chars - seen_chars < options.right_min {
            continue;
        }
        points.push(last);
    }
    points
}

/// Render break points as a per-character marker string: `' '` where no
/// break is allowed before the character, `'-'` where one is.
pub fn mark_breaks(word: &str, points: &[usize]) -> String {
    word.char_indices()
        .map(|(start, _)| {
            if start > 0 && points.contains(&(start - 1)) {
                '-'
            } else {
                ' '
            }
        })
        .collect()
}

/// Insert `separator` at every break point of `word`.
pub fn insert_separator(word: &str, points: &[usize], separator: &str) -> String {
    let mut out = String::with_capacity(word.len() + separator.len() * points.len());
    for (start, ch) in word.char_indices() {
        if start > 0 && points.contains(&(start - 1)) {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> HyphenationOptions {
        // No fragment limits, so tests can poke single positions.
        HyphenationOptions {
            left_min: 1,
            right_min: 1,
            min_word_length: 1,
        }
    }

    #[test]
    fn odd_digits_break() {
        for d in b"13579" {
            assert!(is_break_weight(*d));
        }
        for d in b"02468" {
            assert!(!is_break_weight(*d));
        }
        assert!(!is_break_weight(b'a'));
    }

    #[test]
    fn selects_odd_positions() {
        let points = break_points("hyphenation", b"03002540020", &open());
        assert_eq!(points, vec![1, 5]);
    }

    #[test]
    fn fragment_limits_clamp() {
        let opts = HyphenationOptions::default();
        // hen-na would leave a two-character tail; right_min 3 forbids it.
        assert_eq!(break_points("henna", b"02100", &opts), Vec::<usize>::new());
        let relaxed = HyphenationOptions {
            right_min: 2,
            ..opts
        };
        assert_eq!(break_points("henna", b"02100", &relaxed), vec![2]);
    }

    #[test]
    fn short_words_are_left_alone() {
        let opts = HyphenationOptions {
            min_word_length: 7,
            ..HyphenationOptions::default()
        };
        assert_eq!(break_points("hyphen", b"030020", &opts), Vec::<usize>::new());
    }

    #[test]
    fn multibyte_characters_never_split() {
        // "éa": é is two bytes. A weight on its interior byte is ignored;
        // one on its final byte breaks after the whole character.
        assert_eq!(break_points("éa", b"100", &open()), Vec::<usize>::new());
        assert_eq!(break_points("éa", b"010", &open()), vec![1]);
    }

    #[test]
    fn marker_string_is_per_character() {
        assert_eq!(mark_breaks("hyphenation", &[1, 5]), "  -   -    ");
        assert_eq!(mark_breaks("éa", &[1]), " -");
    }

    #[test]
    fn separator_insertion() {
        assert_eq!(insert_separator("hyphenation", &[1, 5], "-"), "hy-phen-ation");
        assert_eq!(insert_separator("hyphenation", &[1, 5], "\u{00ad}"), "hy\u{00ad}phen\u{00ad}ation");
        assert_eq!(insert_separator("word", &[], "-"), "word");
    }
}
