//! Terminal geometry for sizing the progress screen.

/// Size of the terminal in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Columns per row.
    pub columns: usize,
    /// Rows on screen.
    pub rows: usize,
}

impl TerminalSize {
    /// Used whenever standard output is not a terminal or cannot be queried.
    pub const FALLBACK: TerminalSize = TerminalSize {
        columns: 80,
        rows: 20,
    };

    /// Query standard output, falling back to 80x20.
    pub fn detect() -> Self {
        query_stdout().unwrap_or(Self::FALLBACK)
    }

    /// Characters of dot filler drawn under the title line.
    pub fn filler_len(self) -> usize {
        self.columns * self.rows.saturating_sub(2)
    }

    /// Characters available to the progress bar.
    pub fn bar_width(self) -> usize {
        self.columns * self.rows.saturating_sub(3)
    }
}

#[cfg(unix)]
fn query_stdout() -> Option<TerminalSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ only writes a `winsize` through the pointer, which
    // refers to a live local.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if rc == -1 || ws.ws_col == 0 || ws.ws_row == 0 {
        return None;
    }
    Some(TerminalSize {
        columns: usize::from(ws.ws_col),
        rows: usize::from(ws.ws_row),
    })
}

#[cfg(not(unix))]
fn query_stdout() -> Option<TerminalSize> {
    None
}
