//! Text processing: word wrapping.

pub mod wrap;

pub use wrap::{wrap, WrappedText};
