//! Terminal module: size probing and frame output.

pub mod output;
pub mod sink;
mod size;

pub use output::OutputBuffer;
pub use sink::{suffix_of, RenderStrategy, TerminalSink};
pub use size::{FixedProbe, SizeProbe, TerminalSize, TerminalSizeError, TtyProbe};
