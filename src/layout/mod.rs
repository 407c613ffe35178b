//! Layout module: box placement and frame composition.
//!
//! A frame is composed from scratch for every streamed fragment; there is no
//! retained layout state between render cycles.

pub mod compose;
pub mod frame;
pub mod panel;
mod rect;

pub use compose::compose_exchange;
pub use frame::draw_frame;
pub use panel::{draw_text_panel, panel_height};
pub use rect::Rect;
