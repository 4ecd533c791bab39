// lexicon-prefix: Check prefixes from stdin against a lexicon.
//
// Reads prefixes from stdin (one per line). Output:
//   P: prefix    (some word starts with it)
//   N: prefix    (no word starts with it)
//
// Usage:
//   lexicon-prefix [-d DICT_PATH]

use std::io::{self, BufRead, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexicon_cli::parse_dict_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-prefix: Check prefixes from stdin against a lexicon.");
        println!();
        println!("Usage: lexicon-prefix [-d DICT_PATH]");
        println!();
        println!("Reads prefixes from stdin (one per line). Prints:");
        println!("  P: prefix    (some word starts with it)");
        println!("  N: prefix    (no word starts with it)");
        return;
    }

    let lex =
        lexicon_cli::load_lexicon(dict_path.as_deref()).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let prefix = line.trim();
        let tag = if lex.contains_prefix(prefix) { 'P' } else { 'N' };
        let _ = writeln!(out, "{tag}: {prefix}");
    }
}
