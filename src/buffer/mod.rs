//! Buffer module: the character grid that frames are composed into.

mod screen;

pub use screen::ScreenBuffer;
