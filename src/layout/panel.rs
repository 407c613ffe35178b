//! Text panels: a bordered box sized to fit wrapped text.
//!
//! A panel is the unit the composer stacks: border, optional one-line
//! header, padding, then the wrapped body. Drawing returns the occupied
//! footprint so callers can place the next panel below it.

use crate::buffer::ScreenBuffer;
use crate::layout::frame::draw_frame;
use crate::layout::Rect;
use crate::text::wrap;

/// Columns/rows consumed by the border on each axis.
const BORDER: u16 = 2;

/// Interior text width of a panel of `width` total columns.
///
/// # Panics
/// Panics if `width` leaves no room for at least one text column.
fn interior_width(width: u16, padding: u16) -> u16 {
    let chrome = BORDER.saturating_add(padding.saturating_mul(2));
    assert!(
        width > chrome,
        "panel width {width} leaves no interior (padding {padding})"
    );
    width - chrome
}

/// Rows a panel will occupy for `text` at the given width and padding.
///
/// Used to position a panel before drawing it (bottom anchoring).
pub fn panel_height(text: &str, width: u16, padding: u16, has_header: bool) -> u16 {
    let wrapped = wrap(text, interior_width(width, padding));
    let header_rows = u16::from(has_header);
    wrapped
        .height()
        .saturating_add(BORDER)
        .saturating_add(padding * 2)
        .saturating_add(header_rows)
}

/// Draw a bordered panel at (x, y) sized to fit `text` wrapped to the
/// interior width, with an optional one-line header above the body.
///
/// The buffer grows if the panel extends past its bottom edge. Returns the
/// footprint the panel occupies.
///
/// # Panics
/// Panics if `width` leaves no room for at least one text column.
pub fn draw_text_panel(
    buffer: &mut ScreenBuffer,
    text: &str,
    header: Option<&str>,
    x: u16,
    y: u16,
    width: u16,
    padding: u16,
) -> Rect {
    let inner = interior_width(width, padding);
    let wrapped = wrap(text, inner);
    let header_rows = u16::from(header.is_some());
    let height = wrapped
        .height()
        .saturating_add(BORDER)
        .saturating_add(padding * 2)
        .saturating_add(header_rows);

    let footprint = Rect::new(x, y, width, height);
    draw_frame(buffer, footprint);

    let text_x = x + 1 + padding;
    let text_y = y + 1 + padding;
    if let Some(label) = header {
        // One header line; anything past the interior width is clipped.
        let label_wrapped = wrap(label, inner);
        if let Some(first) = label_wrapped.lines().first() {
            buffer.put_str(text_x, text_y, first);
        }
    }
    buffer.write_text(text_x, text_y + header_rows, &wrapped);

    footprint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height_matches_drawn_footprint() {
        let mut buffer = ScreenBuffer::new(40, 20);
        let text = "a few words that wrap across lines";
        let measured = panel_height(text, 20, 1, true);
        let footprint = draw_text_panel(&mut buffer, text, Some("Question:"), 0, 0, 20, 1);
        assert_eq!(footprint, Rect::new(0, 0, 20, measured));
    }

    #[test]
    fn test_panel_places_header_and_body() {
        let mut buffer = ScreenBuffer::new(40, 20);
        draw_text_panel(&mut buffer, "hello", Some("Question:"), 2, 1, 20, 1);

        // Header on the first padded row, body on the next.
        assert_eq!(buffer.row_string(3).unwrap().trim(), "│ Question:        │");
        assert!(buffer.row_string(4).unwrap().contains("hello"));
        assert_eq!(buffer.get(2, 1), Some('┌'));
    }

    #[test]
    fn test_panel_without_header_is_one_row_shorter() {
        let with = panel_height("text", 20, 1, true);
        let without = panel_height("text", 20, 1, false);
        assert_eq!(with, without + 1);
    }

    #[test]
    fn test_panel_empty_text_draws_padding_only_box() {
        let mut buffer = ScreenBuffer::new(20, 10);
        let footprint = draw_text_panel(&mut buffer, "", None, 0, 0, 10, 1);
        // Border rows plus padding rows, zero body lines.
        assert_eq!(footprint.height, 4);
        assert_eq!(buffer.get(0, 0), Some('┌'));
        assert_eq!(buffer.get(0, 3), Some('└'));
    }

    #[test]
    fn test_panel_grows_buffer_for_tall_text() {
        let mut buffer = ScreenBuffer::new(20, 3);
        let text = "one two three four five six seven eight nine ten";
        let footprint = draw_text_panel(&mut buffer, text, None, 0, 0, 10, 1);
        assert!(footprint.height > 3);
        assert_eq!(buffer.height(), footprint.bottom());
        // The last body row made it into the grown region.
        let body: String = buffer.rows().collect::<Vec<_>>().join("\n");
        assert!(body.contains("ten"));
    }

    #[test]
    #[should_panic(expected = "leaves no interior")]
    fn test_panel_width_too_small_for_padding_panics() {
        panel_height("x", 4, 1, false);
    }
}
