// Probabilistic dictionary backed by a bloom filter

use std::f64::consts::LN_2;
use std::hash::BuildHasher;

use hashbrown::DefaultHashBuilder;
use wordcheck_core::{WordComparator, WordList};

use crate::{Dictionary, DictionaryError};

/// Fixed-size bloom filter over strings.
///
/// Bit positions come from double hashing: `h1 + i * h2` for `i` in
/// `0..hash_count`, modulo the number of bits. The hasher is seeded once per
/// filter.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    bits: Vec<u64>,
    bit_count: u64,
    hash_count: u32,
    hasher: DefaultHashBuilder,
}

impl BloomFilter {
    /// Size a filter for `expected_items` insertions at the given false
    /// positive rate, which must be strictly between 0 and 1.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, DictionaryError> {
        if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(DictionaryError::InvalidFalsePositiveRate(false_positive_rate));
        }
        let n = expected_items.max(1) as f64;
        let bit_count = ((-n * false_positive_rate.ln()) / (LN_2 * LN_2)).ceil().max(64.0) as u64;
        let hash_count = ((bit_count as f64 / n) * LN_2).round().clamp(1.0, 32.0) as u32;
        let words = bit_count.div_ceil(64) as usize;
        Ok(Self {
            bits: vec![0; words],
            bit_count,
            hash_count,
            hasher: DefaultHashBuilder::default(),
        })
    }

    pub fn insert(&mut self, item: &str) {
        let (h1, h2) = self.hashes(item);
        for i in 0..self.hash_count {
            let bit = self.position(h1, h2, i);
            self.bits[(bit / 64) as usize] |= 1 << (bit % 64);
        }
    }

    /// Whether `item` may have been inserted. `false` is always exact.
    pub fn contains(&self, item: &str) -> bool {
        let (h1, h2) = self.hashes(item);
        (0..self.hash_count).all(|i| {
            let bit = self.position(h1, h2, i);
            self.bits[(bit / 64) as usize] & (1 << (bit % 64)) != 0
        })
    }

    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    fn hashes(&self, item: &str) -> (u64, u64) {
        let h1 = self.hasher.hash_one(item);
        // Odd step so the k positions never collapse onto one bit.
        let h2 = self.hasher.hash_one((item, h1)) | 1;
        (h1, h2)
    }

    fn position(&self, h1: u64, h2: u64, i: u32) -> u64 {
        h1.wrapping_add(h2.wrapping_mul(u64::from(i))) % self.bit_count
    }
}

/// Space-constrained dictionary that may answer `true` for words it never
/// saw, but never `false` for a word it holds.
#[derive(Debug, Clone)]
pub struct BloomFilterDictionary {
    filter: BloomFilter,
    comparator: WordComparator,
}

impl BloomFilterDictionary {
    /// Wrap a filter whose items were inserted in `comparator`'s folded
    /// form (see [`WordComparator::fold_word`]).
    pub fn new(filter: BloomFilter, comparator: WordComparator) -> Self {
        Self { filter, comparator }
    }

    /// Load every word of `list` into a filter sized for the list.
    pub fn from_word_list<W: WordList + ?Sized>(
        list: &W,
        false_positive_rate: f64,
    ) -> Result<Self, DictionaryError> {
        let comparator = list.comparator();
        let mut filter = BloomFilter::new(list.len(), false_positive_rate)?;
        for index in 0..list.len() {
            let word = list.get(index)?;
            filter.insert(&comparator.fold_word(&word));
        }
        tracing::debug!(
            words = list.len(),
            bits = filter.bit_count(),
            hashes = filter.hash_count(),
            false_positive_rate,
            "bloom filter dictionary built"
        );
        Ok(Self { filter, comparator })
    }

    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }
}

impl Dictionary for BloomFilterDictionary {
    fn search(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.filter.contains(&self.comparator.fold_word(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordcheck_core::ArrayWordList;

    #[test]
    fn rejects_bad_rates() {
        for rate in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            assert!(matches!(
                BloomFilter::new(10, rate),
                Err(DictionaryError::InvalidFalsePositiveRate(_))
            ));
        }
    }

    #[test]
    fn sizing() {
        let filter = BloomFilter::new(1000, 0.01).unwrap();
        // About 9.6 bits and 7 hashes per item at 1%.
        assert!((9_500..9_700).contains(&filter.bit_count()));
        assert_eq!(filter.hash_count(), 7);
    }

    #[test]
    fn no_false_negatives() {
        let words: Vec<String> = (0..2000).map(|i| format!("pw{i}")).collect();
        let mut filter = BloomFilter::new(words.len(), 0.01).unwrap();
        for w in &words {
            filter.insert(w);
        }
        assert!(words.iter().all(|w| filter.contains(w)));

        let false_positives = (0..2000)
            .filter(|i| filter.contains(&format!("absent{i}")))
            .count();
        // 1% expected; leave generous headroom.
        assert!(false_positives < 100, "{false_positives} false positives");
    }

    #[test]
    fn dictionary_folds_case() {
        let wl = ArrayWordList::new(
            vec!["Dragon".into(), "monkey".into()],
            WordComparator::CaseInsensitive,
        )
        .unwrap();
        let dict = BloomFilterDictionary::from_word_list(&wl, 0.001).unwrap();
        assert!(dict.search("dragon").unwrap());
        assert!(dict.search("MONKEY").unwrap());
    }

    #[test]
    fn empty_list() {
        let wl = ArrayWordList::new(Vec::new(), WordComparator::CaseSensitive).unwrap();
        let dict = BloomFilterDictionary::from_word_list(&wl, 0.01).unwrap();
        assert!(dict.filter().bit_count() >= 64);
    }
}
