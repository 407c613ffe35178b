//! Terminal size probing behind a trait seam.

use thiserror::Error;

/// A snapshot of the terminal dimensions.
///
/// Taken once per render cycle and never cached across cycles, so a resize
/// between fragments is picked up on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Rows available on the terminal.
    pub rows: u16,
    /// Columns available on the terminal.
    pub cols: u16,
}

/// Failure to determine the terminal size.
///
/// Non-fatal by contract: the render loop reports it and skips the cycle.
#[derive(Debug, Error)]
pub enum TerminalSizeError {
    /// The underlying probe failed (non-interactive output, closed
    /// descriptor).
    #[error("unable to query terminal size: {0}")]
    Probe(#[source] std::io::Error),
    /// The terminal reported a zero-sized window.
    #[error("terminal reported a zero-sized window")]
    ZeroSize,
}

/// Source of terminal dimensions for the render loop.
pub trait SizeProbe {
    /// Probe the current terminal size.
    fn probe(&mut self) -> Result<TerminalSize, TerminalSizeError>;
}

/// Probe backed by the real terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtyProbe;

impl SizeProbe for TtyProbe {
    fn probe(&mut self) -> Result<TerminalSize, TerminalSizeError> {
        let (cols, rows) = crossterm::terminal::size().map_err(TerminalSizeError::Probe)?;
        if rows == 0 || cols == 0 {
            return Err(TerminalSizeError::ZeroSize);
        }
        Ok(TerminalSize { rows, cols })
    }
}

/// Deterministic probe for tests and non-interactive rendering.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub TerminalSize);

impl SizeProbe for FixedProbe {
    fn probe(&mut self) -> Result<TerminalSize, TerminalSizeError> {
        Ok(self.0)
    }
}
