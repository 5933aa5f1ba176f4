// Word list read through a single buffered file cursor

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

use parking_lot::Mutex;
use wordcheck_core::read::WordReader;
use wordcheck_core::{WordComparator, WordList, WordListError};

use crate::FileWordListOptions;
use crate::cache::{OffsetCache, scan};

/// A sorted word list file accessed by seeking and scanning.
///
/// Only the sampled offsets in the [`OffsetCache`] are held in memory; each
/// `get` seeks to the nearest cached word and reads forward. The file cursor
/// is shared, so every seek-then-scan runs under one lock.
#[derive(Debug)]
pub struct FileWordList {
    comparator: WordComparator,
    size: usize,
    cache: OffsetCache,
    /// `None` once the list has been closed.
    reader: Mutex<Option<BufReader<File>>>,
}

impl FileWordList {
    /// Open and scan the word list file at `path`.
    pub fn open(path: impl AsRef<Path>, options: FileWordListOptions) -> Result<Self, WordListError> {
        Self::from_file(File::open(path)?, options)
    }

    /// Scan an already opened word list file.
    ///
    /// Fails if `cache_percent` is outside `0..=100`, the file cannot be
    /// read, or its words are not sorted under the chosen case policy.
    pub fn from_file(file: File, options: FileWordListOptions) -> Result<Self, WordListError> {
        let mut cache = OffsetCache::new(options.cache_percent)?;
        let comparator = options.comparator();
        let mut reader = BufReader::new(file);
        let size = scan(&mut reader, comparator, &mut cache)?;
        reader.rewind()?;

        tracing::debug!(
            size,
            cached = cache.len(),
            cache_percent = options.cache_percent,
            ?comparator,
            "file word list loaded"
        );

        Ok(Self {
            comparator,
            size,
            cache,
            reader: Mutex::new(Some(reader)),
        })
    }

    /// The sampled offsets held for this list.
    pub fn cache(&self) -> &OffsetCache {
        &self.cache
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.reader.lock().is_none()
    }
}

impl WordList for FileWordList {
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

        let mut guard = self.reader.lock();
        let reader = guard.as_mut().ok_or(WordListError::Closed)?;

        let (cached_index, offset) = self.cache.floor(index);
        reader.seek(SeekFrom::Start(offset))?;
        let mut words = WordReader::at_position(reader, offset);
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
        if self.reader.lock().take().is_some() {
            tracing::debug!(size = self.size, "file word list closed");
        }
    }
}
