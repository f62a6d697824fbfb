//! memtest Comprehensive Test Suite
//!
//! End-to-end coverage of the public API: whole passes over real buffers,
//! the scenarios a hardware fault produces, and config file handling.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test memtest_comprehensive
//!
//! # Run the pass sequencing tests only
//! cargo test --test memtest_comprehensive passes::
//! ```

mod config_file;
mod passes;
mod scenarios;

use memtest::testing::RecordingProgress;
use memtest::{Memtest, PassLimit, TestBuffer, Word, PAGE_SIZE};

/// Run over `pages` pages with a fixed seed.
fn small_memtest<W: Word>(pages: usize, limit: PassLimit) -> Memtest<W> {
    let buffer = TestBuffer::with_bytes(pages * PAGE_SIZE).unwrap();
    Memtest::with_buffer(buffer, Some(0x5eed), limit)
}

/// Run one pass and return what the reporter saw.
fn record_pass<W: Word>(memtest: &mut Memtest<W>, pass: u64) -> RecordingProgress {
    let mut progress = RecordingProgress::default();
    memtest.run_pass(pass, &mut progress).unwrap();
    progress
}
