// Sampled word-index to byte-offset cache, and the construction scan that fills it

use std::cmp::Ordering;
use std::io::BufRead;

use wordcheck_core::WordListError;
use wordcheck_core::WordComparator;
use wordcheck_core::read::WordReader;

/// Byte offsets of every `modulus`-th word of a word list file.
///
/// Entry `k` holds the offset of word `k * modulus`, so entries increase in
/// both word index and offset, and the nearest entry at or before any index
/// is found by one division.
#[derive(Debug, Clone, Default)]
pub struct OffsetCache {
    /// Word index spacing between entries; 0 when caching is disabled.
    modulus: usize,
    offsets: Vec<u64>,
}

impl OffsetCache {
    /// Create an empty cache holding roughly `cache_percent` percent of the
    /// offsets of the words later passed to [`OffsetCache::record`].
    pub fn new(cache_percent: i32) -> Result<Self, WordListError> {
        if !(0..=100).contains(&cache_percent) {
            return Err(WordListError::InvalidCachePercent(cache_percent));
        }
        let modulus = match cache_percent {
            0 => 0,
            pct => 100 / pct as usize,
        };
        Ok(Self {
            modulus,
            offsets: Vec::new(),
        })
    }

    /// Offer the offset of word `index`. Words must be offered in order.
    pub fn record(&mut self, index: usize, offset: u64) {
        if self.modulus != 0 && index % self.modulus == 0 {
            debug_assert_eq!(index / self.modulus, self.offsets.len());
            self.offsets.push(offset);
        }
    }

    /// The cached `(word index, byte offset)` at or before `index`.
    ///
    /// Falls back to the start of the file when nothing suitable is cached.
    pub fn floor(&self, index: usize) -> (usize, u64) {
        if self.modulus == 0 || self.offsets.is_empty() {
            return (0, 0);
        }
        let slot = (index / self.modulus).min(self.offsets.len() - 1);
        (slot * self.modulus, self.offsets[slot])
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Word index spacing between entries, 0 when disabled.
    pub fn modulus(&self) -> usize {
        self.modulus
    }
}

/// Scan a whole word list once: verify ascending order, count the words and
/// fill `cache`. Fails at the first inversion.
pub(crate) fn scan<R: BufRead>(
    reader: R,
    comparator: WordComparator,
    cache: &mut OffsetCache,
) -> Result<usize, WordListError> {
    let mut words = WordReader::new(reader);
    let mut previous: Option<String> = None;
    let mut size = 0;
    while let Some((offset, word)) = words.next_word()? {
        if let Some(previous) = &previous {
            if comparator.compare(previous, &word) == Ordering::Greater {
                return Err(WordListError::Unsorted {
                    index: size,
                    previous: previous.clone(),
                    word,
                });
            }
        }
        cache.record(size, offset);
        previous = Some(word);
        size += 1;
    }
    Ok(size)
}
