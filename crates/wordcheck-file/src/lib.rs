//! Word lists that stay on disk.
//!
//! Both lists in this crate read a sorted, one-word-per-line text file. At
//! construction the file is scanned once to verify its order, count its
//! words, and sample byte offsets into an [`OffsetCache`]. A lookup then
//! seeks to the nearest cached offset at or before the wanted index and
//! scans forward from there.
//!
//! - [`FileWordList`] -- buffered reads through one shared, locked file cursor
//! - [`MmapWordList`] -- reads from a read-only memory mapping of the file

pub mod cache;
pub mod file;
pub mod mmap;

pub use cache::OffsetCache;
pub use file::FileWordList;
pub use mmap::MmapWordList;

use wordcheck_core::WordComparator;

/// Cache density used when none is given.
pub const DEFAULT_CACHE_PERCENT: i32 = 5;

/// Construction options for disk-backed word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileWordListOptions {
    /// Compare words ordinally (`true`) or case-folded (`false`).
    pub case_sensitive: bool,
    /// Share of words, in percent, whose byte offset is cached. Must be in
    /// `0..=100`: 0 disables the cache, 100 caches every word.
    pub cache_percent: i32,
}

impl Default for FileWordListOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            cache_percent: DEFAULT_CACHE_PERCENT,
        }
    }
}

impl FileWordListOptions {
    pub fn comparator(&self) -> WordComparator {
        WordComparator::new(self.case_sensitive)
    }
}
