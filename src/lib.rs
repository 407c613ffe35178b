//! # Chatterbox
//!
//! A boxed Q&A terminal renderer for streaming chat CLIs.
//!
//! Chatterbox takes a prompt and a stream of cumulative response fragments
//! from a model producer and redraws a bordered question/answer layout once
//! per fragment, without flicker and without ever truncating content.
//!
//! ## Core Concepts
//!
//! - **Stateless composition**: every fragment re-wraps and redraws the whole
//!   frame from scratch; nothing is retained between cycles
//! - **Growable frame buffer**: a fixed-width character grid that grows
//!   downward instead of dropping content that overflows the terminal
//! - **Single-syscall output**: each frame's ANSI bytes are accumulated and
//!   flushed in one write
//! - **Two strategies**: full clear-and-redraw with boxes, or a minimal
//!   incremental append of the raw response suffix
//!
//! ## Example
//!
//! ```rust,ignore
//! use chatterbox::{scripted, ChatSession, RenderStrategy, TerminalSink, TtyProbe};
//! use std::time::Duration;
//!
//! let sink = TerminalSink::new(std::io::stdout(), RenderStrategy::ClearRedraw);
//! let mut session = ChatSession::new(sink, TtyProbe);
//! let stream = scripted("4 is the answer.", Duration::from_millis(40));
//! session.run("What is 2+2?", stream)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod chat;
pub mod layout;
pub mod terminal;
pub mod text;

// Re-exports for convenience
pub use buffer::ScreenBuffer;
pub use chat::{from_reader, scripted, ChatSession, ResponseEvent, ResponseStream, StreamError};
pub use layout::{compose_exchange, draw_frame, draw_text_panel, Rect};
pub use terminal::{
    FixedProbe, RenderStrategy, SizeProbe, TerminalSink, TerminalSize, TerminalSizeError, TtyProbe,
};
pub use text::{wrap, WrappedText};
