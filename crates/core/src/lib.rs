//! Core types and traits for memtest
//!
//! This crate defines the pieces every test phase is built from:
//! - Word: the native unsigned machine word and its bit-pattern constants
//! - Pattern: the pattern engine (random, solid, checkerboard, addressing)
//! - Error: fault and failure types reported up to the orchestrator
//! - ProgressReporter: the observational progress interface
//! - Limits: page size, progress cadence, compare repetitions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod pattern;
pub mod progress;
pub mod word;

pub use error::{Error, MemoryFault, Result};
pub use limits::{COMPARE_REPEATS, MEGABYTE, PAGE_SIZE, PROGRESS_INTERVAL};
pub use pattern::{
    addressing_value, random_word, Pattern, PatternDescriptor, ADDRESSING_SYMBOL, COMPARE_SYMBOL,
};
pub use progress::{NoopProgress, ProgressReporter};
pub use word::{load, store, NativeWord, Word};
