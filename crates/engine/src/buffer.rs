//! The memory region under test
//!
//! `TestBuffer` owns the words for the whole run. Test phases only ever see
//! a borrowed slice and never resize or free it.

use memtest_core::limits::is_page_multiple;
use memtest_core::{Error, NativeWord, Result, Word, MEGABYTE, PAGE_SIZE};
use tracing::debug;

/// Owned, zero-initialised buffer of words, a whole number of pages long.
#[derive(Debug)]
pub struct TestBuffer<W: Word = NativeWord> {
    words: Vec<W>,
}

impl<W: Word> TestBuffer<W> {
    /// Allocate `megabytes` MiB.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for zero megabytes, `AllocationFailure` when the size
    /// overflows or the allocator refuses the request.
    pub fn allocate(megabytes: usize) -> Result<Self> {
        if megabytes == 0 {
            return Err(Error::InvalidConfig(
                "megabytes to test must be at least 1".to_string(),
            ));
        }
        let bytes = megabytes
            .checked_mul(MEGABYTE)
            .ok_or_else(|| Error::AllocationFailure {
                megabytes,
                reason: "size overflows the address space".to_string(),
            })?;
        Self::allocate_bytes(bytes, megabytes)
    }

    /// Allocate exactly `bytes` bytes, which must be a non-zero multiple of
    /// the page size.
    pub fn with_bytes(bytes: usize) -> Result<Self> {
        if bytes == 0 || !is_page_multiple(bytes) {
            return Err(Error::InvalidConfig(format!(
                "buffer size {} is not a positive multiple of {} bytes",
                bytes, PAGE_SIZE
            )));
        }
        let megabytes = bytes / MEGABYTE + usize::from(bytes % MEGABYTE != 0);
        Self::allocate_bytes(bytes, megabytes)
    }

    fn allocate_bytes(bytes: usize, megabytes: usize) -> Result<Self> {
        let len = bytes / W::SIZE;
        let mut words = Vec::new();
        words
            .try_reserve_exact(len)
            .map_err(|e| Error::AllocationFailure {
                megabytes,
                reason: e.to_string(),
            })?;
        words.resize(len, W::ZERO);
        debug!(bytes, words = len, "allocated test buffer");
        Ok(TestBuffer { words })
    }

    /// Length in words. Always even.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Length in bytes.
    pub fn len_bytes(&self) -> usize {
        self.words.len() * W::SIZE
    }

    /// Words in each mirrored half.
    pub fn half_words(&self) -> usize {
        self.words.len() / 2
    }

    /// Always false; allocation rejects empty buffers.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Borrowed view of the words.
    pub fn as_slice(&self) -> &[W] {
        &self.words
    }

    /// Mutable borrowed view of the words.
    pub fn as_mut_slice(&mut self) -> &mut [W] {
        &mut self.words
    }
}
