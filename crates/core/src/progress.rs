//! Progress reporting interface
//!
//! Test phases call into a reporter at a fixed word cadence. Reporting is
//! purely observational: a reporter cannot influence or fail a phase.

/// Receives phase boundaries and progress ticks.
///
/// The orchestrator brackets each phase with `start_phase`/`end_phase`; the
/// fill, compare and addressing loops call `step` every
/// [`PROGRESS_INTERVAL`](crate::PROGRESS_INTERVAL) words.
pub trait ProgressReporter {
    /// A titled phase begins within the given pass (1-based).
    fn start_phase(&mut self, title: &str, pass: u64);

    /// `current` of `total` units of the phase are done.
    fn step(&mut self, current: usize, total: usize, symbol: char);

    /// The current phase finished.
    fn end_phase(&mut self);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start_phase(&mut self, _title: &str, _pass: u64) {}

    fn step(&mut self, _current: usize, _total: usize, _symbol: char) {}

    fn end_phase(&mut self) {}
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &mut P {
    fn start_phase(&mut self, title: &str, pass: u64) {
        (**self).start_phase(title, pass)
    }

    fn step(&mut self, current: usize, total: usize, symbol: char) {
        (**self).step(current, total, symbol)
    }

    fn end_phase(&mut self) {
        (**self).end_phase()
    }
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for Box<P> {
    fn start_phase(&mut self, title: &str, pass: u64) {
        (**self).start_phase(title, pass)
    }

    fn step(&mut self, current: usize, total: usize, symbol: char) {
        (**self).step(current, total, symbol)
    }

    fn end_phase(&mut self) {
        (**self).end_phase()
    }
}
