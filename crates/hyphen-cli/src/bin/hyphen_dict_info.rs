// hyphen-dict-info: Show dictionary metadata and automaton statistics.
//
// Usage:
//   hyphen-dict-info [-d DICT_PATH]
//
// Prints the charset identifier from the dictionary header and the size of
// the compiled automaton.

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = hyphen_cli::parse_dict_path(&args);

    if hyphen_cli::wants_help(&args) {
        println!("hyphen-dict-info: Show dictionary metadata and automaton statistics.");
        println!();
        println!("Usage: hyphen-dict-info [-d DICT_PATH]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory with hyph_en_US.dic");
        println!("  -h, --help             Print this help");
        return;
    }

    let automaton =
        hyphen_cli::load_automaton(dict_path.as_deref()).unwrap_or_else(|e| hyphen_cli::fatal(&e));

    let stats = automaton.stats();
    println!("charset:     {}", automaton.charset());
    println!("states:      {}", stats.states);
    println!("transitions: {}", stats.transitions);
    println!("patterns:    {}", stats.patterns);
}
