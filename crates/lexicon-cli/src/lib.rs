// lexicon-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexicon::Lexicon;

/// Dictionary file looked up in each search directory.
const DICT_FILE: &str = "dict.dawg";

/// Per-user dictionary directory under `$HOME`.
const USER_DICT_DIR: &str = ".lexicon";

/// Environment variable naming a dictionary file or directory.
const DICT_PATH_VAR: &str = "LEXICON_DICT_PATH";

/// Install a stderr `tracing` subscriber configured from `RUST_LOG`.
///
/// Defaults to warnings only so normal tool output stays clean.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Search for a dictionary file and load it.
///
/// Search order:
/// 1. `dict_path` argument (if provided; a file, or a directory holding `dict.dawg`)
/// 2. `LEXICON_DICT_PATH` environment variable (same rules)
/// 3. `~/.lexicon/dict.dawg`
/// 4. `dict.dawg` in the current working directory
pub fn load_lexicon(dict_path: Option<&str>) -> Result<Lexicon, String> {
    let candidates = build_search_paths(dict_path);

    for path in &candidates {
        if path.is_file() {
            tracing::info!(path = %path.display(), "using dictionary");
            return Lexicon::from_file(path).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find a dictionary in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        push_file_or_dir(&mut paths, PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_VAR) {
        push_file_or_dir(&mut paths, PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DICT_DIR).join(DICT_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// A path may name the dictionary itself or a directory containing it.
fn push_file_or_dir(paths: &mut Vec<PathBuf>, path: PathBuf) {
    paths.push(path.join(DICT_FILE));
    paths.push(path);
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
                fatal(&format!("{arg} requires a value"));
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
