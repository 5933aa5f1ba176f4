// wordcheck-search: Check words from stdin against a word list.
//
// Reads words from stdin (one per line) and reports whether each word is
// in the dictionary:
//   Y: word    (known word)
//   N: word    (not found)
//
// Usage:
//   wordcheck-search [-d WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH    Sorted word list, one word per line
//   --backend NAME          array, file, mmap, tree or bloom (default: file)
//   --ignore-case           Compare words case-insensitively
//   --cache-percent N       Share of file offsets to cache (default: 5)
//   --median                Build trees in median order
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use wordcheck_dict::Dictionary;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordcheck_cli::wants_help(&args) {
        println!("wordcheck-search: Check words against a word list.");
        println!();
        println!("Usage: wordcheck-search [-d WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  Y: word    (known word)");
        println!("  N: word    (not found)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Sorted word list (default: $WORDCHECK_WORDLIST)");
        println!("  --backend NAME        array, file, mmap, tree or bloom (default: file)");
        println!("  --ignore-case         Compare words case-insensitively");
        println!("  --cache-percent N     Share of file offsets to cache (default: 5)");
        println!("  --median              Build trees in median order");
        println!("  -h, --help            Print this help");
        return;
    }

    wordcheck_cli::init_logging();
    let (config, words) =
        wordcheck_cli::parse_config(&args).unwrap_or_else(|e| wordcheck_cli::fatal(&e));
    let dictionary =
        wordcheck_cli::load_dictionary(&config).unwrap_or_else(|e| wordcheck_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut check = |word: &str| match dictionary.search(word) {
        Ok(true) => {
            let _ = writeln!(out, "Y: {word}");
        }
        Ok(false) => {
            let _ = writeln!(out, "N: {word}");
        }
        Err(e) => wordcheck_cli::fatal(&format!("search failed for {word:?}: {e}")),
    };

    if !words.is_empty() {
        for word in &words {
            check(word);
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
        check(word);
    }
}
