// lexicon-list: Print every word of a lexicon.
//
// Words are printed in sorted order, one per line. The word count (split into
// DAWG and added words) goes to stderr.
//
// Usage:
//   lexicon-list [-d DICT_PATH] [--count]

use std::io::{self, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lexicon_cli::parse_dict_path(&args);

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-list: Print every word of a lexicon.");
        println!();
        println!("Usage: lexicon-list [-d DICT_PATH] [--count]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing dict.dawg");
        println!("  -c, --count            Only print the word counts");
        println!("  -h, --help             Print this help");
        return;
    }

    let count_only = args.iter().any(|a| a == "-c" || a == "--count");

    let lex =
        lexicon_cli::load_lexicon(dict_path.as_deref()).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if !count_only {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for word in lex.words() {
            if writeln!(out, "{word}").is_err() {
                // Downstream closed the pipe
                return;
            }
        }
        let _ = out.flush();
    }

    eprintln!(
        "{} words ({} in DAWG, {} added)",
        lex.len(),
        lex.dawg_word_count(),
        lex.overlay_word_count()
    );
}
