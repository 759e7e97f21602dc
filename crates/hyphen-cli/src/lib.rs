// hyphen-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use hyphen_automaton::Automaton;

/// Default dictionary file name, as shipped by hyphenation dictionary
/// packages.
const DEFAULT_DICT: &str = "hyph_en_US.dic";

/// Search for a pattern dictionary and load it.
///
/// Search order:
/// 1. `dict_path` argument (a dictionary file, or a directory holding one)
/// 2. `HYPHEN_DICT_PATH` environment variable (file or directory)
/// 3. `~/.hyphen`
/// 4. `/usr/share/hyphen` and `/usr/local/share/hyphen`
/// 5. Current working directory
pub fn load_automaton(dict_path: Option<&str>) -> Result<Automaton, String> {
    let candidates = build_search_paths(dict_path);

    for candidate in &candidates {
        let file = if candidate.is_dir() {
            candidate.join(DEFAULT_DICT)
        } else {
            candidate.clone()
        };
        if file.is_file() {
            return Automaton::load(&file).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DEFAULT_DICT,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of dictionary candidates (files or directories).
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. HYPHEN_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("HYPHEN_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Per-user dictionary directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".hyphen"));
    }

    // 4. System paths
    paths.push(PathBuf::from("/usr/share/hyphen"));
    paths.push(PathBuf::from("/usr/local/share/hyphen"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
