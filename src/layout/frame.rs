//! Frame painting: bordered rectangles on a [`ScreenBuffer`].

use crate::buffer::ScreenBuffer;
use crate::layout::Rect;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Draw the border of `rect` onto `buffer`.
///
/// Corner glyphs win over edge glyphs, so degenerate boxes (1×1, 1×n, n×1)
/// still draw sensibly. Interior cells are left untouched. Columns outside
/// the buffer are clipped; rows below the buffer's bottom edge make the
/// buffer grow first, so a frame is never cut off vertically.
pub fn draw_frame(buffer: &mut ScreenBuffer, rect: Rect) {
    if rect.is_empty() {
        return;
    }

    // Vertical overflow grows the buffer, but only when some column of the
    // frame actually lands inside it.
    if rect.x < buffer.width() && rect.bottom() > buffer.height() {
        buffer.grow_to(rect.bottom());
    }

    let last_x = rect.right() - 1;
    let last_y = rect.bottom() - 1;

    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if x >= buffer.width() {
                break;
            }
            let glyph = if x == rect.x && y == rect.y {
                TOP_LEFT
            } else if x == last_x && y == rect.y {
                TOP_RIGHT
            } else if x == rect.x && y == last_y {
                BOTTOM_LEFT
            } else if x == last_x && y == last_y {
                BOTTOM_RIGHT
            } else if y == rect.y || y == last_y {
                HORIZONTAL
            } else if x == rect.x || x == last_x {
                VERTICAL
            } else {
                continue;
            };
            buffer.set(x, y, glyph);
        }
    }
}
