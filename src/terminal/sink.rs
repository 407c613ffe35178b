//! `TerminalSink`: puts composed frames (or raw response deltas) on screen.
//!
//! Two strategies cover the two rendering modes the client supports:
//!
//! - [`RenderStrategy::ClearRedraw`] clears the screen and emits the whole
//!   frame, every cycle, in one accumulated flush.
//! - [`RenderStrategy::IncrementalAppend`] skips frame composition entirely
//!   and prints only the newly appended suffix of the cumulative response
//!   text, diffed against the last printed text.

use crate::buffer::ScreenBuffer;
use crate::terminal::output::OutputBuffer;
use std::io::{self, Write};

/// How the sink puts render cycles on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Clear the screen and emit the whole frame every cycle.
    #[default]
    ClearRedraw,
    /// Print only the newly appended suffix of the raw response text.
    IncrementalAppend,
}

/// Owns the output writer and whatever state the strategy needs across
/// cycles (for the append strategy, the last printed text).
pub struct TerminalSink<W: Write> {
    out: W,
    strategy: RenderStrategy,
    ansi: OutputBuffer,
    last_text: String,
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink over `out` using the given strategy.
    pub fn new(out: W, strategy: RenderStrategy) -> Self {
        Self {
            out,
            strategy,
            ansi: OutputBuffer::new(),
            last_text: String::new(),
        }
    }

    /// The strategy this sink was built with.
    pub const fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Clear the screen and emit every row of `frame`, in one flush.
    pub fn present_frame(&mut self, frame: &ScreenBuffer) -> io::Result<()> {
        self.ansi.clear();
        self.ansi.cursor_hide();
        self.ansi.clear_screen();
        self.ansi.cursor_home();
        let mut first = true;
        for row in frame.rows() {
            if !first {
                // CR before LF: a full-width row leaves the cursor in
                // deferred-wrap state, and a bare LF would keep its column.
                self.ansi.write_str("\r\n");
            }
            self.ansi.write_str(&row);
            first = false;
        }
        self.ansi.cursor_show();
        self.ansi.flush_to(&mut self.out)
    }

    /// Print the part of `full_text` not yet on screen.
    ///
    /// A fragment that does not extend the last printed text restarts on a
    /// fresh line with the full new text.
    pub fn present_delta(&mut self, full_text: &str) -> io::Result<()> {
        let suffix = suffix_of(&self.last_text, full_text);
        self.ansi.clear();
        if !self.last_text.is_empty() && suffix.len() == full_text.len() {
            self.ansi.write_str("\n");
        }
        self.ansi.write_str(suffix);
        self.last_text.clear();
        self.last_text.push_str(full_text);
        self.ansi.flush_to(&mut self.out)
    }

    /// Report a plain message line through the same writer.
    ///
    /// Used for non-fatal per-cycle failures (a frame is skipped, the
    /// message is not).
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        self.ansi.clear();
        self.ansi.write_str(message);
        self.ansi.write_str("\n");
        self.ansi.flush_to(&mut self.out)
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The part of `current` that extends `previous`.
///
/// Returns the whole of `current` when it is not an extension (the stream
/// restarted or rewrote earlier text).
pub fn suffix_of<'a>(previous: &str, current: &'a str) -> &'a str {
    current.strip_prefix(previous).unwrap_or(current)
}
