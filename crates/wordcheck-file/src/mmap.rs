// Word list read from a read-only memory mapping of the file

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use parking_lot::RwLock;
use wordcheck_core::read::WordReader;
use wordcheck_core::{WordComparator, WordList, WordListError};

use crate::FileWordListOptions;
use crate::cache::{OffsetCache, scan};

/// Mapped file contents. Empty files are not mapped at all.
#[derive(Debug)]
enum Mapping {
    Empty,
    Mapped(Mmap),
}

impl Mapping {
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Mapped(map) => &map[..],
        }
    }
}

/// A sorted word list file accessed through a memory mapping.
///
/// Same lookup scheme as [`FileWordList`](crate::FileWordList), but reads
/// come straight from the mapped region: every `get` scans its own slice,
/// so lookups only share the lock with `close()`.
#[derive(Debug)]
pub struct MmapWordList {
    comparator: WordComparator,
    size: usize,
    cache: OffsetCache,
    /// `None` once the list has been closed.
    mapping: RwLock<Option<Mapping>>,
}

impl MmapWordList {
    /// Map and scan the word list file at `path`.
    pub fn open(path: impl AsRef<Path>, options: FileWordListOptions) -> Result<Self, WordListError> {
        Self::from_file(&File::open(path)?, options)
    }

    /// Map and scan an already opened word list file.
    ///
    /// Fails if `cache_percent` is outside `0..=100`, the file is too large
    /// to map on this platform, or its words are not sorted.
    pub fn from_file(file: &File, options: FileWordListOptions) -> Result<Self, WordListError> {
        let mut cache = OffsetCache::new(options.cache_percent)?;
        let comparator = options.comparator();

        let len = file.metadata()?.len();
        if usize::try_from(len).map_or(true, |len| len > isize::MAX as usize) {
            return Err(WordListError::TooLargeToMap { len });
        }
        let mapping = if len == 0 {
            Mapping::Empty
        } else {
            // SAFETY: the mapping is read-only; callers must not truncate or
            // rewrite the file while the list is open.
            Mapping::Mapped(unsafe { Mmap::map(file)? })
        };

        let size = scan(mapping.bytes(), comparator, &mut cache)?;

        tracing::debug!(
            size,
            bytes = len,
            cached = cache.len(),
            cache_percent = options.cache_percent,
            ?comparator,
            "memory-mapped word list loaded"
        );

        Ok(Self {
            comparator,
            size,
            cache,
            mapping: RwLock::new(Some(mapping)),
        })
    }

    /// The sampled offsets held for this list.
    pub fn cache(&self) -> &OffsetCache {
        &self.cache
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.mapping.read().is_none()
    }
}

impl WordList for MmapWordList {
    fn comparator(&self) -> WordComparator {
        self.comparator
    }

    fn len(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<Cow<'_, str>, WordListError> {
        let out_of_range = WordListError::IndexOutOfRange {
            index,
            len: self.size,
        };
        if index >= self.size {
            return Err(out_of_range);
        }

        let guard = self.mapping.read();
        let bytes = guard.as_ref().ok_or(WordListError::Closed)?.bytes();

        let (cached_index, offset) = self.cache.floor(index);
        let tail = usize::try_from(offset)
            .ok()
            .and_then(|start| bytes.get(start..))
            .ok_or(WordListError::IndexOutOfRange {
                index,
                len: self.size,
            })?;
        let mut words = WordReader::at_position(tail, offset);
        let gap = index - cached_index;
        if words.skip_words(gap)? < gap {
            return Err(out_of_range);
        }
        match words.next_word()? {
            Some((_, word)) => Ok(Cow::Owned(word)),
            None => Err(out_of_range),
        }
    }

    fn close(&self) {
        if self.mapping.write().take().is_some() {
            tracing::debug!(size = self.size, "memory-mapped word list closed");
        }
    }
}
