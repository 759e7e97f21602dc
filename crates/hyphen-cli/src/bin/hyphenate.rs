// hyphenate: Hyphenate words from arguments or stdin.
//
// Reads words (one per line from stdin, or from the argument list) and
// prints the hyphenated form. By default uses '-' as separator; the raw
// weight digits can also be shown.
//
// Usage:
//   hyphenate [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory with hyph_en_US.dic
//   --separator SEP        Hyphen separator string (default: -)
//   --weights              Show raw weight digits instead of inserting hyphens
//   --left-min N           Minimum characters left of a break (default: 2)
//   --right-min N          Minimum characters right of a break (default: 3)
//   --min-length N         Minimum word length for hyphenation (default: 2)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use hyphen_text::{HyphenationOptions, PatternHyphenator};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = hyphen_cli::parse_dict_path(&args);

    if hyphen_cli::wants_help(&args) {
        println!("hyphenate: Hyphenate words with a pattern dictionary.");
        println!();
        println!("Usage: hyphenate [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, hyphenates each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory with hyph_en_US.dic");
        println!("  --separator SEP        Hyphen separator string (default: -)");
        println!("  --weights              Show raw weight digits instead of inserting hyphens");
        println!("  --left-min N           Minimum characters left of a break (default: 2)");
        println!("  --right-min N          Minimum characters right of a break (default: 3)");
        println!("  --min-length N         Minimum word length for hyphenation (default: 2)");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut separator = "-".to_string();
    let mut show_weights = false;
    let mut options = HyphenationOptions::default();
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    let parse_count = |value: &str, flag: &str| -> usize {
        value
            .parse()
            .unwrap_or_else(|_| hyphen_cli::fatal(&format!("invalid number for {flag}")))
    };

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => {
                if i + 1 < args.len() {
                    separator = args[i + 1].clone();
                    skip_next = true;
                }
            }
            "--weights" => show_weights = true,
            "--left-min" => {
                if i + 1 < args.len() {
                    options.left_min = parse_count(&args[i + 1], "--left-min");
                    skip_next = true;
                }
            }
            "--right-min" => {
                if i + 1 < args.len() {
                    options.right_min = parse_count(&args[i + 1], "--right-min");
                    skip_next = true;
                }
            }
            "--min-length" => {
                if i + 1 < args.len() {
                    options.min_word_length = parse_count(&args[i + 1], "--min-length");
                    skip_next = true;
                }
            }
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let automaton =
        hyphen_cli::load_automaton(dict_path.as_deref()).unwrap_or_else(|e| hyphen_cli::fatal(&e));
    let hyph = PatternHyphenator::new(automaton, options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let hyphenate_word = |word: &str, hyph: &PatternHyphenator, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if show_weights {
            match hyph.weights(word) {
                Ok(weights) => {
                    let digits = String::from_utf8_lossy(&weights).into_owned();
                    let _ = writeln!(out, "{word} {digits}");
                }
                Err(e) => eprintln!("error hyphenating {word}: {e}"),
            }
        } else {
            match hyph.insert_hyphens(word, &separator) {
                Ok(result) => {
                    let _ = writeln!(out, "{result}");
                }
                Err(e) => eprintln!("error hyphenating {word}: {e}"),
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            hyphenate_word(word, &hyph, &mut out);
        }
    } else {
        for word in &words {
            hyphenate_word(word, &hyph, &mut out);
        }
    }
}
