//! Full-screen text progress bar.
//!
//! Each phase clears the screen, paints a field of dots with two advisory
//! lines, and writes the phase title on the first row. Progress symbols then
//! overwrite the dots from the top left until the bar is full.

use std::io::Write;

use memtest_core::ProgressReporter;
use tracing::debug;

use crate::terminal::TerminalSize;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const CLEAR_LINE: &str = "\x1b[H\x1b[2K";
const ADVICE: &str = "Please keep the test running several minutes per GB of memory.\n\
Also check http://www.memtest86.com/ and http://pyropus.ca/software/memtester/";

/// Renders phases and ticks to a terminal-like writer.
///
/// Write errors are logged once and further output is dropped; rendering
/// never affects the test itself.
pub struct TextProgress<Wr: Write> {
    out: Wr,
    size: TerminalSize,
    printed: usize,
    full: usize,
    broken: bool,
}

impl<Wr: Write> TextProgress<Wr> {
    /// Render to `out` assuming a terminal of `size`.
    pub fn new(out: Wr, size: TerminalSize) -> Self {
        Self {
            out,
            size,
            printed: 0,
            full: size.bar_width(),
            broken: false,
        }
    }

    /// Symbols drawn on the bar in the current phase.
    #[cfg(test)]
    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Consume the reporter and return the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> Wr {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if self.broken {
            return;
        }
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            debug!(error = %e, "progress output disabled");
            self.broken = true;
        }
    }
}

impl<Wr: Write> ProgressReporter for TextProgress<Wr> {
    fn start_phase(&mut self, title: &str, pass: u64) {
        let mut screen = String::with_capacity(self.size.filler_len() + 256);
        screen.push_str(CLEAR_SCREEN);
        screen.extend(std::iter::repeat('.').take(self.size.filler_len()));
        screen.push_str(ADVICE);
        screen.push_str(CLEAR_LINE);
        screen.push_str(&format!("{} [{}]\n", title, pass));

        self.printed = 0;
        self.full = self.size.bar_width();
        self.emit(&screen);
    }

    fn step(&mut self, current: usize, total: usize, symbol: char) {
        if total == 0 {
            return;
        }
        let chars = (current as u128 * self.full as u128 / total as u128) as usize;
        if chars <= self.printed {
            return;
        }
        let bar: String = std::iter::repeat(symbol).take(chars - self.printed).collect();
        self.printed = chars;
        self.emit(&bar);
    }

    fn end_phase(&mut self) {
        self.emit(CLEAR_SCREEN);
    }
}
