//! The render loop: one cycle per streamed response fragment.
//!
//! Rendering is synchronous inside a cycle (wrap, compose, paint, flush);
//! the only suspension point is waiting for the next fragment. Each cycle
//! owns its frame buffer exclusively and discards it before the next one.

use crate::chat::provider::{ResponseEvent, ResponseStream};
use crate::layout::compose_exchange;
use crate::terminal::{RenderStrategy, SizeProbe, TerminalSink};
use std::io::Write;
use thiserror::Error;

/// Failure of the upstream fragment sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The producer reported a failure mid-stream.
    #[error("response stream failed: {0}")]
    Upstream(String),
    /// The producer went away without completing or failing (cancelled).
    #[error("response stream disconnected before completing")]
    Disconnected,
}

/// One question/answer exchange being rendered to a terminal.
///
/// Owns the sink and the size probe for the duration of the exchange. The
/// terminal size is re-probed every cycle, so resizes between fragments are
/// picked up on the next frame.
pub struct ChatSession<W: Write, P: SizeProbe> {
    sink: TerminalSink<W>,
    probe: P,
    anchor_response: bool,
}

impl<W: Write, P: SizeProbe> ChatSession<W, P> {
    /// Create a session with the response panel anchored to the bottom.
    pub fn new(sink: TerminalSink<W>, probe: P) -> Self {
        Self {
            sink,
            probe,
            anchor_response: true,
        }
    }

    /// Choose whether the response panel is anchored to the terminal bottom
    /// or stacked directly below the question panel.
    #[must_use]
    pub fn anchor_response(mut self, anchor: bool) -> Self {
        self.anchor_response = anchor;
        self
    }

    /// Drive the exchange to completion, rendering once per fragment.
    ///
    /// On upstream failure or disconnection the loop exits without drawing a
    /// partial frame; whatever was rendered last stays on screen.
    pub fn run(&mut self, question: &str, stream: ResponseStream) -> Result<(), StreamError> {
        for event in stream {
            match event {
                ResponseEvent::Fragment { text } => self.render_cycle(question, &text),
                ResponseEvent::Completed => return Ok(()),
                ResponseEvent::Failed { message } => return Err(StreamError::Upstream(message)),
            }
        }
        Err(StreamError::Disconnected)
    }

    /// Render one fragment, best-effort.
    ///
    /// A failed size probe is reported through the sink and skips the frame;
    /// a failed write is reported on stderr. Neither stops the loop.
    fn render_cycle(&mut self, question: &str, response: &str) {
        let outcome = match self.sink.strategy() {
            RenderStrategy::IncrementalAppend => self.sink.present_delta(response),
            RenderStrategy::ClearRedraw => match self.probe.probe() {
                Ok(size) => {
                    let frame = compose_exchange(question, response, size, self.anchor_response);
                    self.sink.present_frame(&frame)
                }
                Err(err) => self.sink.notice(&format!("Error: {err}")),
            },
        };
        if let Err(err) = outcome {
            eprintln!("render failed: {err}");
        }
    }

    /// Consume the session and return its sink.
    pub fn into_sink(self) -> TerminalSink<W> {
        self.sink
    }
}
