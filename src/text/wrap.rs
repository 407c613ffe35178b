//! Word wrapping: free-form text into width-bounded display lines.
//!
//! Widths are display columns (`unicode-width`), so CJK and emoji count
//! double. Hard splits of overlong tokens land on grapheme boundaries.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// An immutable sequence of wrapped lines plus derived dimensions.
///
/// Produced by [`wrap`]. Every line's display width is at most the width the
/// text was wrapped to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedText {
    lines: Vec<String>,
    width: u16,
}

impl WrappedText {
    /// The wrapped lines, in order.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Display width of the widest line.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Check if the wrap produced no lines (empty input).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Wrap `text` so that no produced line exceeds `max_width` display columns.
///
/// Newlines force a new output line; within a newline-delimited segment,
/// whitespace-separated tokens are packed greedily with single-space
/// separators. A token wider than `max_width` is hard-split at the width
/// boundary and its remainder re-queued, so the width bound holds for
/// arbitrary input.
///
/// Empty input produces zero lines.
///
/// # Panics
/// Panics if `max_width` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn wrap(text: &str, max_width: u16) -> WrappedText {
    assert!(max_width > 0, "wrap width must be at least one column");
    let max = max_width as usize;

    let mut lines: Vec<String> = Vec::new();
    if text.is_empty() {
        return WrappedText { lines, width: 0 };
    }

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for token in segment.split_whitespace() {
            let mut pending = token;
            loop {
                let token_width = UnicodeWidthStr::width(pending);
                if token_width <= max {
                    if current.is_empty() {
                        current.push_str(pending);
                        current_width = token_width;
                    } else if current_width + 1 + token_width <= max {
                        current.push(' ');
                        current.push_str(pending);
                        current_width += 1 + token_width;
                    } else {
                        lines.push(std::mem::take(&mut current));
                        current.push_str(pending);
                        current_width = token_width;
                    }
                    break;
                }

                // Overlong token: flush the current line, emit a full-width
                // slice, and re-queue the remainder.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let (head, tail) = split_at_width(pending, max);
                lines.push(head.to_string());
                pending = tail;
            }
        }

        // A newline always terminates an output line, even an empty one.
        lines.push(current);
    }

    let width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0) as u16;

    WrappedText { lines, width }
}

/// Split `s` at the last grapheme boundary whose prefix fits in `max` columns.
///
/// Always consumes at least one grapheme so the caller makes progress; a
/// single grapheme wider than `max` is returned whole.
fn split_at_width(s: &str, max: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (offset, grapheme) in s.grapheme_indices(true) {
        let grapheme_width = UnicodeWidthStr::width(grapheme);
        if used + grapheme_width > max {
            if used == 0 {
                // First grapheme alone exceeds the budget; take it anyway.
                return s.split_at(offset + grapheme.len());
            }
            return s.split_at(offset);
        }
        used += grapheme_width;
    }
    (s, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line_widths(wrapped: &WrappedText) -> Vec<usize> {
        wrapped
            .lines()
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .collect()
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let wrapped = wrap("hello world", 20);
        assert_eq!(wrapped.lines(), ["hello world"]);
        assert_eq!(wrapped.height(), 1);
        assert_eq!(wrapped.width(), 11);
    }

    #[test]
    fn test_wrap_breaks_between_tokens() {
        let wrapped = wrap("the quick brown fox", 10);
        assert_eq!(wrapped.lines(), ["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_empty_input_has_zero_lines() {
        let wrapped = wrap("", 10);
        assert!(wrapped.is_empty());
        assert_eq!(wrapped.height(), 0);
        assert_eq!(wrapped.width(), 0);
    }

    #[test]
    fn test_wrap_newline_forces_new_line() {
        let wrapped = wrap("a\n\nb", 10);
        assert_eq!(wrapped.lines(), ["a", "", "b"]);
    }

    #[test]
    fn test_wrap_trailing_newline_produces_trailing_empty_line() {
        let wrapped = wrap("a\n", 10);
        assert_eq!(wrapped.lines(), ["a", ""]);
    }

    #[test]
    fn test_wrap_exact_width_token_is_not_split() {
        let text = "abcdefghij";
        let wrapped = wrap(text, 10);
        assert_eq!(wrapped.lines(), [text]);
    }

    #[test]
    fn test_wrap_overlong_token_hard_splits() {
        let wrapped = wrap("abcdefghij", 4);
        assert_eq!(wrapped.lines(), ["abcd", "efgh", "ij"]);
        // ceil(10 / 4) pieces, concatenating back to the original token.
        assert_eq!(wrapped.lines().concat(), "abcdefghij");
    }

    #[test]
    fn test_wrap_remainder_of_split_joins_following_tokens() {
        let wrapped = wrap("abcdefghij kl", 4);
        assert_eq!(wrapped.lines(), ["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_wrap_normalizes_runs_of_whitespace() {
        let wrapped = wrap("a  \t b", 10);
        assert_eq!(wrapped.lines(), ["a b"]);
    }

    #[test]
    fn test_wrap_wide_graphemes_count_double() {
        // Each ideograph is two columns, so only two fit per line.
        let wrapped = wrap("日本語", 4);
        assert_eq!(wrapped.lines(), ["日本", "語"]);
    }

    #[test]
    fn test_wrap_width_one_makes_progress_on_wide_grapheme() {
        let wrapped = wrap("日", 1);
        assert_eq!(wrapped.height(), 1);
    }

    #[test]
    fn test_split_at_width_boundary() {
        assert_eq!(split_at_width("abcdef", 4), ("abcd", "ef"));
        assert_eq!(split_at_width("ab", 4), ("ab", ""));
    }

    proptest! {
        #[test]
        fn prop_no_line_exceeds_width(
            text in "[ a-zA-Z0-9\n]{0,200}",
            width in 1u16..40,
        ) {
            let wrapped = wrap(&text, width);
            for line_width in line_widths(&wrapped) {
                prop_assert!(line_width <= width as usize);
            }
        }

        #[test]
        fn prop_no_characters_dropped_or_duplicated(
            text in "[ a-zA-Z0-9\n]{0,200}",
            width in 1u16..40,
        ) {
            // Removing all whitespace, the wrapped output is exactly the
            // input's token characters in order.
            let wrapped = wrap(&text, width);
            let produced: String = wrapped.lines().concat().split_whitespace().collect();
            let expected: String = text.split_whitespace().collect();
            prop_assert_eq!(produced, expected);
        }

        #[test]
        fn prop_short_tokens_survive_as_a_sequence(
            tokens in proptest::collection::vec("[a-z]{1,8}", 0..20),
        ) {
            // With every token narrower than the width, re-joining the lines
            // with single spaces reproduces the normalized token sequence.
            let text = tokens.join(" ");
            let wrapped = wrap(&text, 10);
            let rejoined: Vec<String> = wrapped
                .lines()
                .join(" ")
                .split_whitespace()
                .map(str::to_string)
                .collect();
            prop_assert_eq!(rejoined, tokens);
        }
    }
}
