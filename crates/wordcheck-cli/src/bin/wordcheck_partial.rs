// wordcheck-partial: Wildcard search over a word list.
//
// Reads patterns from stdin (one per line), where `.` matches any single
// character, and prints every matching word:
//   pattern:
//     match
//     match
//
// Usage:
//   wordcheck-partial [-d WORDLIST] [OPTIONS] [PATTERN...]
//
// Options:
//   -d, --dict-path PATH    Sorted word list, one word per line
//   --cache-percent N       Share of file offsets to cache (default: 5)
//   --median                Build the tree in median order
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-partial: Wildcard search over a word list.");
        println!();
        println!("Usage: wordcheck-partial [-d WORDLIST] [OPTIONS] [PATTERN...]");
        println!();
        println!("A '.' in a pattern matches any single character.");
        println!("If PATTERN arguments are given, searches each pattern.");
        println!("Otherwise reads patterns from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Sorted word list (default: $WORDCHECK_WORDLIST)");
        println!("  --cache-percent N     Share of file offsets to cache (default: 5)");
        println!("  --median              Build the tree in median order");
        println!("  -h, --help            Print this help");
        return;
    }

    wordcheck_cli::init_logging();
    let (config, patterns) =
        wordcheck_cli::parse_tree_config(&args).unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    let tree = wordcheck_cli::load_tree(&config).unwrap_or_else(|e| wordcheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut search = |pattern: &str| {
        let matches = tree
            .partial_search(pattern)
            .unwrap_or_else(|e| wordcheck_cli::fatal(&e.to_string()));
        if matches.is_empty() {
            let _ = writeln!(out, "{pattern}: (no matches)");
        } else {
            let _ = writeln!(out, "{pattern}:");
            for m in &matches {
                let _ = writeln!(out, "  {m}");
            }
        }
    };

    if !patterns.is_empty() {
        for pattern in &patterns {
            search(pattern);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let pattern = line.trim();
        if pattern.is_empty() {
            continue;
        }
        search(pattern);
    }
}
