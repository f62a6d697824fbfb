//! Fault injection and progress capture for tests
//!
//! Provides utilities for simulating memory defects between a fill and
//! its check, and a reporter that records every call it receives.
//!
//! # Example
//!
//! ```ignore
//! use memtest_engine::testing::{flip_bit, RecordingProgress};
//!
//! fill(&mut memory, Pattern::Checkerboard, &mut rng, &mut progress);
//! flip_bit(&mut memory, half + k, 0);
//! // compare should now report index k
//! ```

use memtest_core::{ProgressReporter, Word};

/// Reporter that keeps every phase and tick for later assertions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProgress {
    /// `(title, pass)` of every started phase, in order.
    pub phases: Vec<(String, u64)>,
    /// `(current, total, symbol)` of every tick, in order.
    pub steps: Vec<(usize, usize, char)>,
    /// Number of `end_phase` calls.
    pub ended: usize,
}

impl RecordingProgress {
    /// Titles of the started phases, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.phases.iter().map(|(title, _)| title.as_str()).collect()
    }

    /// Distinct tick symbols in first-seen order.
    pub fn symbols(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for &(_, _, symbol) in &self.steps {
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        seen
    }
}

impl ProgressReporter for RecordingProgress {
    fn start_phase(&mut self, title: &str, pass: u64) {
        self.phases.push((title.to_string(), pass));
    }

    fn step(&mut self, current: usize, total: usize, symbol: char) {
        self.steps.push((current, total, symbol));
    }

    fn end_phase(&mut self) {
        self.ended += 1;
    }
}

/// Flip one bit of one word, simulating a cell that lost its charge.
///
/// # Panics
///
/// If `index` is out of bounds or `bit` is not below the word width.
pub fn flip_bit<W: Word>(memory: &mut [W], index: usize, bit: u32) {
    assert!(bit < W::BITS, "bit {} out of range for {}-bit word", bit, W::BITS);
    let flipped = memory[index].to_u64() ^ (1u64 << bit);
    memory[index] = W::from_u64(flipped);
}
