// wordcheck-near: Find words close to a query word.
//
// Reads words from stdin (one per line) and prints every dictionary word
// within the given distance:
//   word:
//     neighbor
//     neighbor
//
// Usage:
//   wordcheck-near [-d WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH    Sorted word list, one word per line
//   -n, --distance N        Distance budget (default: 1)
//   --cache-percent N       Share of file offsets to cache (default: 5)
//   --median                Build the tree in median order
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-near: Find words close to a query word.");
        println!();
        println!("Usage: wordcheck-near [-d WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, searches near each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Sorted word list (default: $WORDCHECK_WORDLIST)");
        println!("  -n, --distance N      Distance budget (default: 1)");
        println!("  --cache-percent N     Share of file offsets to cache (default: 5)");
        println!("  --median              Build the tree in median order");
        println!("  -h, --help            Print this help");
        return;
    }

    wordcheck_cli::init_logging();
    let (config, args) =
        wordcheck_cli::parse_tree_config(&args).unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    let (distance, words) = wordcheck_cli::take_value(&args, "--distance", Some("-n"))
        .unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    let distance: usize = match distance {
        Some(n) => n
            .parse()
            .unwrap_or_else(|_| wordcheck_cli::fatal("invalid number for --distance")),
        None => 1,
    };
    let tree = wordcheck_cli::load_tree(&config).unwrap_or_else(|e| wordcheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut search = |word: &str| {
        let matches = tree
            .near_search(word, distance)
            .unwrap_or_else(|e| wordcheck_cli::fatal(&e.to_string()));
        if matches.is_empty() {
            let _ = writeln!(out, "{word}: (no matches)");
        } else {
            let _ = writeln!(out, "{word}:");
            for m in &matches {
                let _ = writeln!(out, "  {m}");
            }
        }
    };

    if !words.is_empty() {
        for word in &words {
            search(word);
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
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        search(word);
    }
}
