//! Test engine for memtest
//!
//! This crate runs the memory test phases over a buffer it owns:
//! - TestBuffer: the allocated, word-typed region under test
//! - Fill/compare: page-strided mirrored fills and linear half comparison
//! - Addressing: every word holds its own address, then is re-read
//! - Memtest: pass sequencing (addressing, random, solid, checkerboard)
//! - Config: `memtest.toml` loading and defaults
//!
//! Phases never terminate the process. Faults come back as
//! [`MemoryFault`](memtest_core::MemoryFault) values and the caller decides.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod addressing;
pub mod buffer;
pub mod config;
pub mod fill;
pub mod runner;
pub mod testing;

pub use addressing::{check_addressing, fill_addressing, verify_addressing};
pub use buffer::TestBuffer;
pub use config::{MemtestConfig, CONFIG_FILE_NAME};
pub use fill::{compare, fill};
pub use runner::{Memtest, PassLimit, RunSummary, ADDRESSING_TITLE, COMPARE_TITLE};

pub use memtest_core::{
    Error, MemoryFault, NativeWord, NoopProgress, Pattern, PatternDescriptor, ProgressReporter,
    Result, Word, COMPARE_REPEATS, PAGE_SIZE, PROGRESS_INTERVAL,
};
