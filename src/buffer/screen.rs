//! `ScreenBuffer`: a fixed-width, growable-height grid of characters.
//!
//! Cells are stored in a contiguous `Vec` in row-major order:
//! `index = y * width + x`. The width is fixed at construction; the height
//! only ever grows, one blank row at a time, so existing rows are never
//! disturbed.
//!
//! Writes outside the grid are clipped silently. Double-width graphemes
//! occupy two columns; the second holds a continuation marker that row
//! rendering skips.

use crate::text::WrappedText;
use unicode_width::UnicodeWidthChar;

/// Marker stored in the column shadowed by a double-width character.
const WIDE_CONTINUATION: char = '\0';

/// A grid of characters representing one rendered frame.
///
/// Every cell starts as a space. The buffer deliberately has no notion of
/// color or style; it exists to position wrapped text and box borders.
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<char>,
    /// Width in columns, fixed for the buffer's lifetime.
    width: u16,
    /// Height in rows; grows on demand, never shrinks.
    height: u16,
}

impl ScreenBuffer {
    /// Create a new buffer with every cell set to a space.
    ///
    /// A zero height is allowed (the buffer can grow into it later).
    ///
    /// # Panics
    /// Panics if `width` is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![' '; size],
            width,
            height,
        }
    }

    /// Get the buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the character at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Set the character at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds; the write is simply
    /// dropped, never an error.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, ch: char) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = ch;
            true
        } else {
            false
        }
    }

    /// Grow the buffer to at least `target_height` rows by appending blank
    /// rows. Never shrinks and never touches existing rows.
    pub fn grow_to(&mut self, target_height: u16) {
        if target_height > self.height {
            let extra = (self.width as usize) * ((target_height - self.height) as usize);
            self.cells.extend(std::iter::repeat(' ').take(extra));
            self.height = target_height;
        }
    }

    /// Write one line of text starting at (x, y), advancing by display width.
    ///
    /// Characters that would land outside the grid are clipped. A
    /// double-width character is dropped entirely when only one column
    /// remains, so a rendered row never exceeds the buffer width.
    ///
    /// Returns the number of columns written. Zero-width scalars (combining
    /// marks, controls) are dropped; the grid stores one scalar per column.
    #[allow(clippy::cast_possible_truncation)]
    pub fn put_str(&mut self, x: u16, y: u16, text: &str) -> u16 {
        if y >= self.height {
            return 0;
        }
        let mut col = x;
        for ch in text.chars() {
            let char_width = match UnicodeWidthChar::width(ch) {
                Some(w) if w > 0 => w as u16,
                _ => continue,
            };
            if col.saturating_add(char_width) > self.width {
                break;
            }
            self.set(col, y, ch);
            if char_width == 2 {
                self.set(col + 1, y, WIDE_CONTINUATION);
            }
            col += char_width;
        }
        col - x
    }

    /// Write wrapped text with its first line at (x, y).
    ///
    /// Lines that fall below the current height are clipped; callers that
    /// need room should [`grow_to`](Self::grow_to) first.
    pub fn write_text(&mut self, x: u16, y: u16, text: &WrappedText) {
        for (row, line) in text.lines().iter().enumerate() {
            let Ok(offset) = u16::try_from(row) else {
                break;
            };
            let Some(target_y) = y.checked_add(offset) else {
                break;
            };
            if target_y >= self.height {
                break;
            }
            self.put_str(x, target_y, line);
        }
    }

    /// Render one row to a string.
    ///
    /// Continuation markers are skipped, so the string's display width equals
    /// the buffer width. Returns `None` for an out-of-bounds row.
    pub fn row_string(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let row = &self.cells[start..start + self.width as usize];
        Some(row.iter().filter(|&&ch| ch != WIDE_CONTINUATION).collect())
    }

    /// Iterate over all rows rendered as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|y| self.row_string(y).unwrap_or_default())
    }
}

impl std::fmt::Debug for ScreenBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::wrap;

    #[test]
    fn test_new_fills_with_spaces() {
        let buffer = ScreenBuffer::new(10, 4);
        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.get(9, 3), Some(' '));
        assert_eq!(buffer.row_string(0).unwrap(), " ".repeat(10));
    }

    #[test]
    #[should_panic(expected = "width must be non-zero")]
    fn test_new_zero_width_panics() {
        ScreenBuffer::new(0, 4);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut buffer = ScreenBuffer::new(10, 4);
        assert!(buffer.set(9, 3, 'x'));
        assert_eq!(buffer.get(9, 3), Some('x'));
        assert!(!buffer.set(10, 3, 'x'));
        assert!(!buffer.set(9, 4, 'x'));
        assert_eq!(buffer.get(10, 3), None);
    }

    #[test]
    fn test_grow_appends_blank_rows_and_preserves_content() {
        let mut buffer = ScreenBuffer::new(5, 2);
        buffer.set(4, 1, 'x');
        buffer.grow_to(5);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.get(4, 1), Some('x'));
        assert_eq!(buffer.row_string(4).unwrap(), "     ");
        // Growing to a smaller height is a no-op.
        buffer.grow_to(3);
        assert_eq!(buffer.height(), 5);
    }

    #[test]
    fn test_put_str_clips_on_the_right() {
        let mut buffer = ScreenBuffer::new(5, 1);
        let used = buffer.put_str(3, 0, "abcdef");
        assert_eq!(used, 2);
        assert_eq!(buffer.row_string(0).unwrap(), "   ab");
    }

    #[test]
    fn test_put_str_below_bottom_is_dropped() {
        let mut buffer = ScreenBuffer::new(5, 1);
        assert_eq!(buffer.put_str(0, 7, "abc"), 0);
        assert_eq!(buffer.row_string(0).unwrap(), "     ");
    }

    #[test]
    fn test_put_str_wide_character_takes_two_columns() {
        let mut buffer = ScreenBuffer::new(6, 1);
        let used = buffer.put_str(0, 0, "日a");
        assert_eq!(used, 3);
        assert_eq!(buffer.get(0, 0), Some('日'));
        assert_eq!(buffer.get(2, 0), Some('a'));
        assert_eq!(buffer.row_string(0).unwrap(), "日a   ");
    }

    #[test]
    fn test_put_str_wide_character_clipped_at_last_column() {
        let mut buffer = ScreenBuffer::new(3, 1);
        buffer.put_str(2, 0, "日");
        assert_eq!(buffer.row_string(0).unwrap(), "   ");
    }

    #[test]
    fn test_write_text_clips_past_bottom_without_panic() {
        let mut buffer = ScreenBuffer::new(10, 2);
        let wrapped = wrap("one two three four five six", 5);
        buffer.write_text(0, 0, &wrapped);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.row_string(0).unwrap(), "one       ");
        assert_eq!(buffer.row_string(1).unwrap(), "two       ");
    }

    #[test]
    fn test_rows_keep_fixed_width() {
        let mut buffer = ScreenBuffer::new(8, 3);
        buffer.put_str(0, 1, "hi");
        for row in buffer.rows() {
            assert_eq!(row.chars().count(), 8);
        }
    }
}
