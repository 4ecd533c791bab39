// lexicon-check: Check words from stdin against a lexicon.
//
// Reads words from stdin (one per line) and reports whether each word is in
// the lexicon:
//   C: word    (contained)
//   W: word    (not in the lexicon)
//
// Usage:
//   lexicon-check [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing dict.dawg
//   -a, --add FILE         Add the words of FILE to the lexicon before checking
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexicon_cli::parse_dict_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-check: Check words from stdin against a lexicon.");
        println!();
        println!("Usage: lexicon-check [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (contained)");
        println!("  W: word    (not in the lexicon)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing dict.dawg");
        println!("  -a, --add FILE         Add the words of FILE before checking");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut lex =
        lexicon_cli::load_lexicon(dict_path.as_deref()).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-a" || arg == "--add" {
            let Some(file) = iter.next() else {
                lexicon_cli::fatal(&format!("{arg} requires a value"));
            };
            lex.add_words_from_file(file)
                .unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
        }
    }

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
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let tag = if lex.contains_word(word) { 'C' } else { 'W' };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
