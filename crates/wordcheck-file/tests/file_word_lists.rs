//! Integration tests for the disk-backed word lists.
//!
//! Every scenario runs against both `FileWordList` and `MmapWordList`.

use std::io::Write;
use std::path::Path;

use proptest::prelude::*;
use tempfile::NamedTempFile;
use wordcheck_core::{WordList, WordListError, binary_search};
use wordcheck_file::{FileWordList, FileWordListOptions, MmapWordList};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_words(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn options(cache_percent: i32) -> FileWordListOptions {
    FileWordListOptions {
        cache_percent,
        ..FileWordListOptions::default()
    }
}

/// Open `path` as both list variants.
fn open_both(
    path: &Path,
    options: FileWordListOptions,
) -> Result<Vec<Box<dyn WordList + Send + Sync>>, WordListError> {
    Ok(vec![
        Box::new(FileWordList::open(path, options)?),
        Box::new(MmapWordList::open(path, options)?),
    ])
}

fn sample_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word{i:05}")).collect()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn cache_percent_range_is_enforced() {
    let file = write_words("a\nb\nc\n");
    for pct in [-1, 101, i32::MIN, i32::MAX] {
        assert!(matches!(
            FileWordList::open(file.path(), options(pct)),
            Err(WordListError::InvalidCachePercent(p)) if p == pct
        ));
        assert!(matches!(
            MmapWordList::open(file.path(), options(pct)),
            Err(WordListError::InvalidCachePercent(p)) if p == pct
        ));
    }
}

#[test]
fn zero_percent_caches_nothing() {
    let file = write_words("a\nb\nc\n");
    let list = FileWordList::open(file.path(), options(0)).unwrap();
    assert_eq!(list.cache().len(), 0);
    assert_eq!(list.get(2).unwrap(), "c");

    let list = MmapWordList::open(file.path(), options(0)).unwrap();
    assert_eq!(list.cache().len(), 0);
    assert_eq!(list.get(1).unwrap(), "b");
}

#[test]
fn full_cache_holds_every_word() {
    let file = write_words(&sample_words(37).join("\n"));
    let list = FileWordList::open(file.path(), options(100)).unwrap();
    assert_eq!(list.cache().len(), 37);
    let list = MmapWordList::open(file.path(), options(100)).unwrap();
    assert_eq!(list.cache().len(), 37);
}

#[test]
fn unsorted_file_is_rejected() {
    let file = write_words("apple\nbanana\nazure\ncherry\n");
    for result in [
        FileWordList::open(file.path(), options(5)).map(|_| ()),
        MmapWordList::open(file.path(), options(5)).map(|_| ()),
    ] {
        match result {
            Err(WordListError::Unsorted {
                index,
                previous,
                word,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(previous, "banana");
                assert_eq!(word, "azure");
            }
            other => panic!("expected unsorted error, got {other:?}"),
        }
    }
}

#[test]
fn case_insensitive_file() {
    let file = write_words("Apple\nbanana\nCherry\n");
    let sensitive = FileWordListOptions {
        case_sensitive: true,
        cache_percent: 50,
    };
    assert!(FileWordList::open(file.path(), sensitive).is_err());

    let insensitive = FileWordListOptions {
        case_sensitive: false,
        cache_percent: 50,
    };
    for list in open_both(file.path(), insensitive).unwrap() {
        assert_eq!(binary_search(list.as_ref(), "CHERRY").unwrap(), Some(2));
        assert_eq!(binary_search(list.as_ref(), "apple").unwrap(), Some(0));
    }
}

#[test]
fn empty_file() {
    let file = write_words("");
    for list in open_both(file.path(), options(100)).unwrap() {
        assert_eq!(list.len(), 0);
        assert!(matches!(
            list.get(0),
            Err(WordListError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    assert!(matches!(
        FileWordList::open(&path, options(5)),
        Err(WordListError::Io(_))
    ));
    assert!(matches!(
        MmapWordList::open(&path, options(5)),
        Err(WordListError::Io(_))
    ));
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn mixed_line_endings_and_blank_lines() {
    let file = write_words("\r\n\nalpha\r\nbravo\rcharlie\n\r\n\ndelta\r\necho");
    let expected = ["alpha", "bravo", "charlie", "delta", "echo"];
    for pct in [0, 25, 50, 100] {
        for list in open_both(file.path(), options(pct)).unwrap() {
            assert_eq!(list.len(), expected.len());
            for (i, word) in expected.iter().enumerate() {
                assert_eq!(list.get(i).unwrap(), *word, "pct {pct} index {i}");
            }
        }
    }
}

#[test]
fn out_of_range_index() {
    let file = write_words("a\nb\n");
    for list in open_both(file.path(), options(50)).unwrap() {
        assert!(matches!(
            list.get(2),
            Err(WordListError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            list.get(usize::MAX),
            Err(WordListError::IndexOutOfRange { .. })
        ));
    }
}

#[test]
fn sequential_and_median_iteration() {
    let words = sample_words(100);
    let file = write_words(&words.join("\n"));
    let list = FileWordList::open(file.path(), options(10)).unwrap();

    let sequential: Vec<String> = list.iter().map(|w| w.unwrap().into_owned()).collect();
    assert_eq!(sequential, words);

    let mut median: Vec<String> = list.median_iter().map(|w| w.unwrap().into_owned()).collect();
    assert_eq!(median[0], words[50]);
    median.sort();
    assert_eq!(median, words);
}

#[test]
fn unicode_words() {
    let file = write_words("kissa\nkoira\nöljy\n");
    for list in open_both(file.path(), options(100)).unwrap() {
        assert_eq!(list.get(2).unwrap(), "öljy");
        assert_eq!(binary_search(list.as_ref(), "koira").unwrap(), Some(1));
    }
}

// ---------------------------------------------------------------------------
// Resource lifecycle and concurrency
// ---------------------------------------------------------------------------

#[test]
fn get_after_close_fails() {
    let file = write_words("a\nb\nc\n");

    let list = FileWordList::open(file.path(), options(5)).unwrap();
    assert!(!list.is_closed());
    list.close();
    list.close();
    assert!(list.is_closed());
    assert!(matches!(list.get(0), Err(WordListError::Closed)));

    let list = MmapWordList::open(file.path(), options(5)).unwrap();
    list.close();
    list.close();
    assert!(list.is_closed());
    assert!(matches!(list.get(0), Err(WordListError::Closed)));
}

#[test]
fn concurrent_readers_see_consistent_words() {
    let words = sample_words(2000);
    let file = write_words(&words.join("\n"));
    for list in open_both(file.path(), options(3)).unwrap() {
        std::thread::scope(|scope| {
            for t in 0..8 {
                let list = &list;
                let words = &words;
                scope.spawn(move || {
                    for i in (t..words.len()).step_by(7) {
                        assert_eq!(list.get(i).unwrap(), words[i].as_str());
                    }
                });
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn lookup_is_independent_of_cache_density(
        words in prop::collection::btree_set("[a-z]{1,10}", 1..200),
        crlf in any::<bool>(),
    ) {
        let words: Vec<String> = words.into_iter().collect();
        let separator = if crlf { "\r\n" } else { "\n" };
        let file = write_words(&words.join(separator));
        for pct in [0, 1, 33, 50, 100] {
            for list in open_both(file.path(), options(pct)).unwrap() {
                prop_assert_eq!(list.len(), words.len());
                for (i, word) in words.iter().enumerate() {
                    prop_assert_eq!(list.get(i).unwrap(), word.as_str());
                }
            }
        }
    }
}
