// wordcheck-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use wordcheck_core::sort::QuickSorter;
use wordcheck_core::{ArrayWordList, WordList};
use wordcheck_dict::{
    BloomFilterDictionary, Dictionary, TernaryTreeDictionary, WordListDictionary,
};
use wordcheck_file::{DEFAULT_CACHE_PERCENT, FileWordList, FileWordListOptions, MmapWordList};

/// Environment variable consulted when no `--dict-path` is given.
pub const WORDLIST_ENV: &str = "WORDCHECK_WORDLIST";

/// False positive rate for the bloom filter backend.
const BLOOM_FALSE_POSITIVE_RATE: f64 = 0.001;

/// Storage and search strategy behind a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Whole list read into memory, binary search.
    Array,
    /// List stays on disk, buffered reads, binary search.
    #[default]
    File,
    /// List stays on disk behind a memory mapping, binary search.
    Mmap,
    /// Ternary search tree built from the list.
    Tree,
    /// Bloom filter built from the list.
    Bloom,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Backend::Array),
            "file" => Ok(Backend::File),
            "mmap" => Ok(Backend::Mmap),
            "tree" => Ok(Backend::Tree),
            "bloom" => Ok(Backend::Bloom),
            other => Err(format!(
                "unknown backend {other:?} (expected array, file, mmap, tree or bloom)"
            )),
        }
    }
}

/// Options shared by every tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub word_list: PathBuf,
    pub backend: Backend,
    pub case_sensitive: bool,
    pub cache_percent: i32,
    pub median: bool,
}

impl Config {
    pub fn file_options(&self) -> FileWordListOptions {
        FileWordListOptions {
            case_sensitive: self.case_sensitive,
            cache_percent: self.cache_percent,
        }
    }
}

/// Parse the shared options out of `args`.
///
/// Recognized: `-d/--dict-path PATH`, `--backend NAME`, `--ignore-case`,
/// `--cache-percent N` and `--median`. The word list path falls back to
/// [`WORDLIST_ENV`]. Returns the config and the arguments left over.
pub fn parse_config(args: &[String]) -> Result<(Config, Vec<String>), String> {
    let (dict_path, args) = take_value(args, "--dict-path", Some("-d"))?;
    let (backend, args) = take_value(&args, "--backend", None)?;
    let (cache_percent, args) = take_value(&args, "--cache-percent", None)?;
    let (case_insensitive, args) = take_flag(&args, "--ignore-case");
    let (median, args) = take_flag(&args, "--median");

    let word_list = dict_path
        .or_else(|| std::env::var(WORDLIST_ENV).ok())
        .map(PathBuf::from)
        .ok_or_else(|| format!("no word list given (use --dict-path or set {WORDLIST_ENV})"))?;

    let backend = match backend {
        Some(name) => name.parse()?,
        None => Backend::default(),
    };
    let cache_percent = match cache_percent {
        Some(n) => n
            .parse()
            .map_err(|_| format!("invalid number for --cache-percent: {n:?}"))?,
        None => DEFAULT_CACHE_PERCENT,
    };

    let config = Config {
        word_list,
        backend,
        case_sensitive: !case_insensitive,
        cache_percent,
        median,
    };
    Ok((config, args))
}

/// Parse options for the tools that always search a case-sensitive tree.
///
/// Same as [`parse_config`], but `--backend` and `--ignore-case` are
/// rejected: the backend is fixed, and wildcard and near search need the
/// original casing of every word.
pub fn parse_tree_config(args: &[String]) -> Result<(Config, Vec<String>), String> {
    for arg in args {
        if arg == "--backend" || arg.starts_with("--backend=") {
            return Err("--backend is not accepted: this tool always builds a ternary tree".into());
        }
        if arg == "--ignore-case" {
            return Err(
                "--ignore-case is not accepted: pattern and near search need a case-sensitive tree"
                    .into(),
            );
        }
    }
    parse_config(args)
}

/// Open the configured word list as a [`Dictionary`].
pub fn load_dictionary(config: &Config) -> Result<Box<dyn Dictionary>, String> {
    let path = &config.word_list;
    let options = config.file_options();
    let describe = |e: &dyn std::fmt::Display| format!("failed to load {}: {e}", path.display());

    let dictionary: Box<dyn Dictionary> = match config.backend {
        Backend::Array => {
            let file = File::open(path).map_err(|e| describe(&e))?;
            let list = ArrayWordList::from_readers(
                [BufReader::new(file)],
                options.comparator(),
                Some(&QuickSorter),
            )
            .map_err(|e| describe(&e))?;
            Box::new(WordListDictionary::new(list))
        }
        Backend::File => Box::new(WordListDictionary::new(
            FileWordList::open(path, options).map_err(|e| describe(&e))?,
        )),
        Backend::Mmap => Box::new(WordListDictionary::new(
            MmapWordList::open(path, options).map_err(|e| describe(&e))?,
        )),
        Backend::Tree => Box::new(load_tree(config)?),
        Backend::Bloom => {
            let list = MmapWordList::open(path, options).map_err(|e| describe(&e))?;
            let dictionary = BloomFilterDictionary::from_word_list(&list, BLOOM_FALSE_POSITIVE_RATE)
                .map_err(|e| describe(&e))?;
            list.close();
            Box::new(dictionary)
        }
    };
    tracing::debug!(path = %path.display(), backend = ?config.backend, "dictionary loaded");
    Ok(dictionary)
}

/// Build a ternary tree dictionary from the configured word list,
/// regardless of `config.backend`.
pub fn load_tree(config: &Config) -> Result<TernaryTreeDictionary, String> {
    let path = &config.word_list;
    let describe = |e: &dyn std::fmt::Display| format!("failed to load {}: {e}", path.display());
    let list = FileWordList::open(path, config.file_options()).map_err(|e| describe(&e))?;
    let tree = TernaryTreeDictionary::from_word_list(&list, config.median).map_err(|e| describe(&e))?;
    list.close();
    Ok(tree)
}

/// Install a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` overrides the default `wordcheck=info` filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcheck=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Remove `--long=VALUE`, `--long VALUE` or `-s VALUE` from `args`.
///
/// The last occurrence wins.
pub fn take_value(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let inline = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&inline) {
            value = Some(val.to_string());
        } else if arg == long || Some(arg.as_str()) == short {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            value = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Remove every `flag` from `args`, reporting whether it was present.
pub fn take_flag(args: &[String], flag: &str) -> (bool, Vec<String>) {
    let remaining: Vec<String> = args.iter().filter(|a| *a != flag).cloned().collect();
    (remaining.len() != args.len(), remaining)
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
