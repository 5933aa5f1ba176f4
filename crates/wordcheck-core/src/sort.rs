// In-place comparator sorts used to prepare input for sorted word lists
//
// Every sorter tolerates comparators that are not a valid total order: the
// result may then be unsorted, but the sort always terminates without
// panicking or indexing out of bounds.

use std::cmp::Ordering;

use crate::compare::WordComparator;

/// Comparison callback accepted by the sorters.
pub type CompareFn<'a> = &'a dyn Fn(&str, &str) -> Ordering;

/// A pluggable in-place sorting strategy.
pub trait ArraySorter {
    /// Sort `words` in place using an arbitrary comparison function.
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>);

    /// Sort `words` in place in the order defined by `comparator`.
    fn sort(&self, words: &mut [String], comparator: WordComparator) {
        self.sort_by(words, &|a, b| comparator.compare(a, b));
    }
}

/// Repeated passes of adjacent swaps, stopping early once a pass is clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSorter;

impl ArraySorter for BubbleSorter {
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>) {
        let n = words.len();
        for pass in 0..n {
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if compare(&words[j], &words[j + 1]) == Ordering::Greater {
                    words.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Repeated extraction of the minimum of the unsorted suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSorter;

impl ArraySorter for SelectionSorter {
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>) {
        let n = words.len();
        for i in 0..n {
            let mut min = i;
            for j in i + 1..n {
                if compare(&words[j], &words[min]) == Ordering::Less {
                    min = j;
                }
            }
            if min != i {
                words.swap(i, min);
            }
        }
    }
}

/// Shift-and-insert of each element into the sorted prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

impl ArraySorter for InsertionSorter {
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>) {
        for i in 1..words.len() {
            let mut pos = i;
            while pos > 0 && compare(&words[pos - 1], &words[i]) == Ordering::Greater {
                pos -= 1;
            }
            if pos < i {
                words[pos..=i].rotate_right(1);
            }
        }
    }
}

/// Quicksort with the pivot taken at the midpoint and a Hoare partition.
///
/// The larger partition is handled iteratively so recursion depth stays
/// logarithmic even on adversarial input.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSorter;

impl ArraySorter for QuickSorter {
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>) {
        if words.len() > 1 {
            quick_sort(words, 0, words.len() - 1, compare);
        }
    }
}

fn quick_sort(words: &mut [String], mut lo: usize, mut hi: usize, compare: CompareFn<'_>) {
    while lo < hi {
        let (left_end, right_start) = partition(words, lo, hi, compare);

        // Recurse into the smaller side, loop on the larger.
        let left_len = left_end.map_or(0, |j| j.saturating_sub(lo));
        let right_len = hi.saturating_sub(right_start);
        if left_len < right_len {
            if let Some(j) = left_end.filter(|&j| lo < j) {
                quick_sort(words, lo, j, compare);
            }
            lo = right_start;
        } else {
            if right_start < hi {
                quick_sort(words, right_start, hi, compare);
            }
            match left_end {
                Some(j) if lo < j => hi = j,
                _ => return,
            }
        }
    }
}

/// Partition `words[lo..=hi]` around the midpoint value.
///
/// Returns the inclusive end of the left partition (`None` when the scan
/// crossed below index 0) and the start of the right partition.
fn partition(
    words: &mut [String],
    lo: usize,
    hi: usize,
    compare: CompareFn<'_>,
) -> (Option<usize>, usize) {
    let pivot = words[lo + (hi - lo) / 2].clone();
    let mut i = lo;
    let mut j = Some(hi);

    while let Some(right) = j.filter(|&right| i <= right) {
        while i < hi && compare(&words[i], &pivot) == Ordering::Less {
            i += 1;
        }
        let mut right = right;
        while right > lo && compare(&words[right], &pivot) == Ordering::Greater {
            right -= 1;
        }
        if i <= right {
            words.swap(i, right);
            i += 1;
            j = right.checked_sub(1);
        } else {
            j = Some(right);
        }
    }
    (j, i)
}

/// Delegates to the standard library's stable sort.
///
/// A [`WordComparator`] order is sorted by its folded key, which is a total
/// order by construction. The standard sort may panic on an inconsistent
/// comparison function, so arbitrary `sort_by` callbacks go through the
/// quicksort routine instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSorter;

impl ArraySorter for StdSorter {
    fn sort_by(&self, words: &mut [String], compare: CompareFn<'_>) {
        QuickSorter.sort_by(words, compare);
    }

    fn sort(&self, words: &mut [String], comparator: WordComparator) {
        words.sort_by_cached_key(|word| comparator.fold_word(word));
    }
}
