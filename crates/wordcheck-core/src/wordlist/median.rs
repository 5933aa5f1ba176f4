// Median-order iteration: visit a sorted list in the breadth-first order of
// a balanced binary search tree over its indices.
//
// Inserting a presorted list into a ternary tree in this order keeps the
// tree's low/high chains short without any rebalancing.

use std::borrow::Cow;

use crate::WordListError;
use crate::wordlist::WordList;

/// Iterator over the indices `0..n` in median order.
///
/// Let `q` be the largest power of two not above `n + 1`. The first `q - 1`
/// positions fill the complete levels of a balanced tree: position `i` lies
/// on level `p` (the largest power of two `<= i + 1`) at offset
/// `j = i + 1 - p`, and maps to index `n * (2j + 1) / (2p)`. The remaining
/// `n - (q - 1)` positions are the leftover band: the indices not produced by
/// the complete levels, visited in ascending order rather than spread evenly
/// over the band. Each leftover index hangs below a distinct gap between
/// complete-level indices, so any order within the band yields a binary
/// search tree of minimal height `ceil(log2(n + 1))`.
///
/// Each step is O(1) (amortized, for the leftover band) and needs no storage
/// beyond a few counters. Every index in `0..n` is produced exactly once.
#[derive(Debug, Clone)]
pub struct MedianIndices {
    n: usize,
    /// Largest power of two `<= n + 1`.
    levels: usize,
    position: usize,
    /// Next candidate index while scanning the leftover band.
    leftover_cursor: usize,
}

impl MedianIndices {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            levels: floor_pow2(n.saturating_add(1)),
            position: 0,
            leftover_cursor: 0,
        }
    }

    /// Index produced by the complete-level quantile formula for multiplier
    /// `m` in `1..levels`: `floor(n * m / levels)`.
    fn quantile(&self, m: usize) -> usize {
        (self.n as u128 * m as u128 / self.levels as u128) as usize
    }

    /// Whether `index` is produced by one of the complete levels.
    fn in_complete_levels(&self, index: usize) -> bool {
        // Smallest multiplier whose quantile reaches `index`.
        let m = (index as u128 * self.levels as u128).div_ceil(self.n as u128) as usize;
        let m = m.max(1);
        m < self.levels && self.quantile(m) == index
    }
}

impl Iterator for MedianIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.position >= self.n {
            return None;
        }
        let complete = self.levels - 1;
        let index = if self.position < complete {
            let level = floor_pow2(self.position + 1);
            let offset = self.position + 1 - level;
            // (2j + 1) / (2p) == m / levels with m = (2j + 1) * levels / (2p)
            self.quantile((2 * offset + 1) * (self.levels / (2 * level)))
        } else {
            let mut candidate = self.leftover_cursor;
            while self.in_complete_levels(candidate) {
                candidate += 1;
            }
            self.leftover_cursor = candidate + 1;
            candidate
        };
        self.position += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MedianIndices {}

/// Largest power of two `<= x`, for `x >= 1`.
fn floor_pow2(x: usize) -> usize {
    1 << (usize::BITS - 1 - x.leading_zeros())
}

/// Iterator over the words of a list in median order.
pub struct MedianWords<'a, W: ?Sized> {
    list: &'a W,
    indices: MedianIndices,
}

impl<'a, W: WordList + ?Sized> MedianWords<'a, W> {
    pub fn new(list: &'a W) -> Self {
        Self {
            list,
            indices: MedianIndices::new(list.len()),
        }
    }
}

impl<'a, W: WordList + ?Sized> Iterator for MedianWords<'a, W> {
    type Item = Result<Cow<'a, str>, WordListError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|index| self.list.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
