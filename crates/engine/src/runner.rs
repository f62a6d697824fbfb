//! Pass sequencing
//!
//! A pass runs, in fixed order:
//!
//! 1. Addressing test
//! 2. Random fill, then [`COMPARE_REPEATS`] compares
//! 3. Solid fill, then [`COMPARE_REPEATS`] compares
//! 4. Checkerboard fill, then [`COMPARE_REPEATS`] compares
//!
//! Each fill is re-read several times to catch cells that only fail on
//! repeated access. The first fault ends the run and is returned to the
//! caller; no later phase runs.

use memtest_core::{
    Error, MemoryFault, NativeWord, Pattern, ProgressReporter, Result, Word, COMPARE_REPEATS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::addressing::verify_addressing;
use crate::buffer::TestBuffer;
use crate::config::MemtestConfig;
use crate::fill::{compare, fill};

/// Phase title of the addressing test.
pub const ADDRESSING_TITLE: &str = "Addressing test";

/// Phase title of every compare.
pub const COMPARE_TITLE: &str = "Compare";

/// How many passes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassLimit {
    /// Stop after this many passes.
    Finite(u64),
    /// Never stop on our own.
    Forever,
}

impl PassLimit {
    /// Interpret a caller-supplied pass count: zero or negative means forever.
    pub fn from_count(count: i64) -> Self {
        if count <= 0 {
            PassLimit::Forever
        } else {
            PassLimit::Finite(count as u64)
        }
    }

    /// Whether pass number `pass` (1-based) should run.
    pub fn allows(self, pass: u64) -> bool {
        match self {
            PassLimit::Finite(limit) => pass <= limit,
            PassLimit::Forever => true,
        }
    }
}

/// What a finished run covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Passes completed.
    pub passes: u64,
    /// Bytes tested per pass.
    pub bytes: usize,
    /// Seed of the random pattern.
    pub seed: u64,
}

/// Owns the test buffer and the random source for a run.
pub struct Memtest<W: Word = NativeWord> {
    buffer: TestBuffer<W>,
    rng: StdRng,
    seed: u64,
    limit: PassLimit,
}

impl<W: Word> Memtest<W> {
    /// Allocate the buffer described by `config`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unusable size, `AllocationFailure` if the
    /// buffer cannot be obtained.
    pub fn new(config: &MemtestConfig) -> Result<Self> {
        config.validate()?;
        let buffer = TestBuffer::allocate(config.megabytes)?;
        Ok(Self::with_buffer(buffer, config.seed, config.pass_limit()))
    }

    /// Build a run over an existing buffer.
    ///
    /// Without a seed one is drawn from OS entropy; either way it is logged
    /// and available from [`Memtest::seed`] so a run can be replayed.
    pub fn with_buffer(buffer: TestBuffer<W>, seed: Option<u64>, limit: PassLimit) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        info!(seed, bytes = buffer.len_bytes(), word_bits = W::BITS, "memtest ready");
        Memtest {
            buffer,
            rng: StdRng::seed_from_u64(seed),
            seed,
            limit,
        }
    }

    /// Seed of the random pattern.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pass limit of this run.
    pub fn limit(&self) -> PassLimit {
        self.limit
    }

    /// The buffer under test.
    pub fn buffer(&self) -> &TestBuffer<W> {
        &self.buffer
    }

    /// Run passes until the limit is reached or a fault is found.
    pub fn run<P: ProgressReporter + ?Sized>(&mut self, progress: &mut P) -> Result<RunSummary> {
        let mut pass = 0u64;
        while self.limit.allows(pass + 1) {
            pass += 1;
            self.run_pass(pass, progress)?;
        }
        info!(passes = pass, "memory passed all requested passes");
        Ok(RunSummary {
            passes: pass,
            bytes: self.buffer.len_bytes(),
            seed: self.seed,
        })
    }

    /// Run one full pass.
    pub fn run_pass<P: ProgressReporter + ?Sized>(
        &mut self,
        pass: u64,
        progress: &mut P,
    ) -> Result<()> {
        info!(pass, "starting pass");

        progress.start_phase(ADDRESSING_TITLE, pass);
        verify_addressing(self.buffer.as_mut_slice(), progress)
            .map_err(|fault| fault_detected(pass, "addressing", fault))?;
        progress.end_phase();

        for pattern in Pattern::ALL {
            debug!(pass, pattern = pattern.name(), "filling");
            progress.start_phase(pattern.title(), pass);
            fill(self.buffer.as_mut_slice(), pattern, &mut self.rng, progress);
            progress.end_phase();

            self.compare_times(pattern, pass, COMPARE_REPEATS, progress)?;
        }

        info!(pass, "pass complete");
        Ok(())
    }

    fn compare_times<P: ProgressReporter + ?Sized>(
        &self,
        pattern: Pattern,
        pass: u64,
        times: usize,
        progress: &mut P,
    ) -> Result<()> {
        for repeat in 0..times {
            debug!(pass, pattern = pattern.name(), repeat, "comparing");
            progress.start_phase(COMPARE_TITLE, pass);
            compare(self.buffer.as_slice(), pattern, progress)
                .map_err(|fault| fault_detected(pass, pattern.name(), fault))?;
            progress.end_phase();
        }
        Ok(())
    }
}

fn fault_detected(pass: u64, phase: &str, fault: MemoryFault) -> Error {
    error!(pass, phase, %fault, "memory fault detected");
    Error::MemoryFault(fault)
}
