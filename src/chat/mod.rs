//! Chat module: the response stream boundary and the render loop.

pub mod provider;
pub mod session;

pub use provider::{from_reader, scripted, ResponseEvent, ResponseStream};
pub use session::{ChatSession, StreamError};
