//! memtest - patterned RAM diagnostic
//!
//! Exercises a block of allocated memory with patterned writes and reads to
//! detect faulty cells, address-line defects and bit-coupling errors.
//!
//! # Quick Start
//!
//! ```ignore
//! use memtest::{Memtest, MemtestConfig, NativeWord, NoopProgress};
//!
//! let config = MemtestConfig { megabytes: 16, ..MemtestConfig::default() };
//! let mut memtest = Memtest::<NativeWord>::new(&config)?;
//! let summary = memtest.run(&mut NoopProgress)?;
//! ```
//!
//! # Architecture
//!
//! The pattern engine and shared types live in `memtest-core`; buffer
//! ownership, the fill/compare phases and pass sequencing live in
//! `memtest-engine`, which is re-exported here.

pub use memtest_engine::*;

/// Pattern engine and word-level primitives.
pub use memtest_core::{addressing_value, random_word, word};
