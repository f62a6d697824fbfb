//! Fixed sizes and cadences shared by every test phase
//!
//! These values are part of the test's behavior, not tuning knobs: the fill
//! stride is derived from the page size, and every phase reports progress at
//! the same word cadence.

/// Page size the fill stride is computed from, in bytes.
///
/// Buffers handed to the fill and compare phases must be a multiple of this.
pub const PAGE_SIZE: usize = 4096;

/// One megabyte as used by the megabyte count on the command line.
pub const MEGABYTE: usize = 1024 * 1024;

/// Progress is reported once every this many words processed.
pub const PROGRESS_INTERVAL: usize = 65536;

/// How many times each fill is re-read and compared.
pub const COMPARE_REPEATS: usize = 4;

/// Words per page for a word of `word_size` bytes.
///
/// This is the stride of the page-defeating fill: consecutive writes at the
/// same in-page offset land exactly one page apart.
pub const fn words_per_page(word_size: usize) -> usize {
    PAGE_SIZE / word_size
}

/// Returns true if `bytes` is a whole number of pages.
pub const fn is_page_multiple(bytes: usize) -> bool {
    bytes % PAGE_SIZE == 0
}

/// Returns true when `index` (a count of processed words) falls on the
/// progress cadence.
#[inline]
pub const fn on_progress_tick(index: usize) -> bool {
    index % PROGRESS_INTERVAL == 0
}
