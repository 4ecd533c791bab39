// lexicon-build: Compile a word list into a binary DAWG dictionary.
//
// Usage:
//   lexicon-build [INPUT] -o OUTPUT
//
// INPUT is a text word list (one word per line) or an existing binary DAWG;
// stdin is read when it is omitted. Every word must consist of ASCII letters
// only. Words are folded to lowercase.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use lexicon::Lexicon;

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexicon_cli::wants_help(&args) || args.is_empty() {
        println!("lexicon-build: Compile a word list into a binary DAWG dictionary.");
        println!();
        println!("Usage: lexicon-build [INPUT] -o OUTPUT");
        println!();
        println!("INPUT is a word list (one word per line) or a binary DAWG.");
        println!("Reads stdin when INPUT is omitted.");
        println!();
        println!("Options:");
        println!("  -o, --output FILE      Where to write the binary dictionary");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut input = None;
    let mut output = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-o" || arg == "--output" {
            output = iter.next().cloned();
            if output.is_none() {
                lexicon_cli::fatal(&format!("{arg} requires a value"));
            }
        } else if let Some(val) = arg.strip_prefix("--output=") {
            output = Some(val.to_string());
        } else if input.is_none() {
            input = Some(arg.clone());
        } else {
            lexicon_cli::fatal(&format!("unexpected argument: {arg}"));
        }
    }
    let Some(output) = output else {
        lexicon_cli::fatal("missing -o OUTPUT");
    };

    let lex = match &input {
        Some(path) => Lexicon::from_file(path),
        None => Lexicon::from_reader(io::stdin().lock()),
    }
    .unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));

    let file = File::create(&output)
        .unwrap_or_else(|e| lexicon_cli::fatal(&format!("failed to create {output}: {e}")));
    let mut writer = BufWriter::new(file);
    lex.write_binary(&mut writer)
        .unwrap_or_else(|e| lexicon_cli::fatal(&format!("failed to write {output}: {e}")));
    writer
        .flush()
        .unwrap_or_else(|e| lexicon_cli::fatal(&format!("failed to write {output}: {e}")));

    eprintln!("wrote {} words to {output}", lex.len());
}
