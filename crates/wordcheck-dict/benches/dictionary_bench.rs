// Criterion benchmarks for wordcheck-dict.
//
// Uses a synthetic sorted word list so no external data is needed. The
// disk-backed benchmarks write the list to a temporary file first.
//
// Run:
//   cargo bench -p wordcheck-dict

use std::io::Write;

use criterion::{Criterion, criterion_group, criterion_main};
use wordcheck_core::sort::{QuickSorter, StdSorter};
use wordcheck_core::{ArrayWordList, WordComparator};
use wordcheck_dict::{
    BloomFilterDictionary, Dictionary, TernaryTreeDictionary, WordListDictionary,
};
use wordcheck_file::{FileWordList, FileWordListOptions, MmapWordList};

const WORD_COUNT: usize = 20_000;

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// Deterministic pseudo-words, sorted.
fn synthetic_words() -> Vec<String> {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let mut state: u32 = 0x2545_f491;
    let mut words: Vec<String> = (0..WORD_COUNT)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 4 + (state % 8) as usize;
            (0..len)
                .map(|i| LETTERS[((state >> i) as usize + i * 7) % LETTERS.len()] as char)
                .collect()
        })
        .collect();
    words.sort();
    words.dedup();
    words
}

fn queries(words: &[String]) -> Vec<String> {
    let mut queries: Vec<String> = words.iter().step_by(97).cloned().collect();
    queries.extend(words.iter().step_by(89).map(|w| format!("{w}x")));
    queries
}

fn word_file(words: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for word in words {
        writeln!(file, "{word}").expect("write word");
    }
    file.flush().expect("flush");
    file
}

fn run_queries(dict: &dyn Dictionary, queries: &[String]) {
    for query in queries {
        std::hint::black_box(dict.search(query).expect("search"));
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_sorters(c: &mut Criterion) {
    let mut shuffled = synthetic_words();
    shuffled.reverse();
    shuffled.rotate_left(WORD_COUNT / 3);

    c.bench_function("quick_sort_words", |b| {
        b.iter(|| {
            let words = shuffled.clone();
            std::hint::black_box(ArrayWordList::with_sorter(
                words,
                WordComparator::CaseSensitive,
                &QuickSorter,
            ));
        });
    });
    c.bench_function("std_sort_words", |b| {
        b.iter(|| {
            let words = shuffled.clone();
            std::hint::black_box(ArrayWordList::with_sorter(
                words,
                WordComparator::CaseSensitive,
                &StdSorter,
            ));
        });
    });
}

fn bench_in_memory(c: &mut Criterion) {
    let words = synthetic_words();
    let queries = queries(&words);
    let list = ArrayWordList::new(words, WordComparator::CaseSensitive).expect("sorted");

    let tree = TernaryTreeDictionary::from_word_list(&list, true).expect("tree");
    let bloom = BloomFilterDictionary::from_word_list(&list, 0.01).expect("bloom");
    let binary = WordListDictionary::new(list);

    c.bench_function("array_binary_search", |b| b.iter(|| run_queries(&binary, &queries)));
    c.bench_function("ternary_tree_search", |b| b.iter(|| run_queries(&tree, &queries)));
    c.bench_function("bloom_filter_search", |b| b.iter(|| run_queries(&bloom, &queries)));
    c.bench_function("ternary_tree_near_search", |b| {
        b.iter(|| {
            for query in queries.iter().take(20) {
                std::hint::black_box(tree.near_search(query, 1).expect("near"));
            }
        });
    });
}

fn bench_disk(c: &mut Criterion) {
    let words = synthetic_words();
    let queries = queries(&words);
    let file = word_file(&words);
    let options = FileWordListOptions::default();

    let buffered =
        WordListDictionary::new(FileWordList::open(file.path(), options).expect("file list"));
    let mapped =
        WordListDictionary::new(MmapWordList::open(file.path(), options).expect("mmap list"));

    c.bench_function("file_binary_search", |b| b.iter(|| run_queries(&buffered, &queries)));
    c.bench_function("mmap_binary_search", |b| b.iter(|| run_queries(&mapped, &queries)));
}

criterion_group!(benches, bench_sorters, bench_in_memory, bench_disk);
criterion_main!(benches);
