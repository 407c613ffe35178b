//! Exchange composition: one question/answer frame per response fragment.
//!
//! The composer is stateless. Every streamed fragment re-wraps and redraws
//! the whole frame from scratch; the caller passes the full response text so
//! far, never a delta.

use crate::buffer::ScreenBuffer;
use crate::layout::panel::{draw_text_panel, panel_height};
use crate::terminal::TerminalSize;

/// Column of the question panel's left border.
const QUESTION_X: u16 = 2;
/// Row of the question panel's top border.
const QUESTION_Y: u16 = 1;
/// Column of the response panel's left border.
const RESPONSE_X: u16 = 1;
/// Interior padding of both panels.
const PADDING: u16 = 1;
/// Header label drawn inside the question panel.
const QUESTION_HEADER: &str = "Question:";
/// Narrowest layout the composer will target; smaller terminals still get a
/// well-formed (horizontally clipped) frame.
const MIN_COLS: u16 = 12;

#[allow(clippy::cast_possible_truncation)]
const fn two_thirds(cols: u16) -> u16 {
    ((cols as u32) * 2 / 3) as u16
}

/// Compose a full question/answer frame for one render cycle.
///
/// The question panel sits at a fixed top offset and uses up to two-thirds
/// of the terminal width; the response panel spans the terminal minus a
/// one-column margin on each side. With `anchor_to_bottom` set, the response
/// panel's bottom border is placed on the frame's last row, with blank filler
/// rows above it; when the content does not fit, the panel is stacked right
/// below the question box instead and the frame grows past the terminal
/// height, so visible content is never dropped (the terminal scrolls).
pub fn compose_exchange(
    question: &str,
    response: &str,
    size: TerminalSize,
    anchor_to_bottom: bool,
) -> ScreenBuffer {
    let cols = size.cols.max(MIN_COLS);
    // The last terminal row is left for the shell cursor.
    let frame_rows = size.rows.saturating_sub(1);
    let mut buffer = ScreenBuffer::new(cols, frame_rows);

    let question_rect = draw_text_panel(
        &mut buffer,
        question,
        Some(QUESTION_HEADER),
        QUESTION_X,
        QUESTION_Y,
        two_thirds(cols),
        PADDING,
    );

    let response_width = cols - 2;
    let stacked_y = question_rect.bottom();
    let response_y = if anchor_to_bottom {
        let response_height = panel_height(response, response_width, PADDING, false);
        frame_rows.saturating_sub(response_height).max(stacked_y)
    } else {
        stacked_y
    };
    draw_text_panel(
        &mut buffer,
        response,
        None,
        RESPONSE_X,
        response_y,
        response_width,
        PADDING,
    );

    buffer
}
