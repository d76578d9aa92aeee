//! Test utilities for the format crate.

/// Joins rendered lines into one string for snapshot testing.
///
/// Trailing whitespace is trimmed from each line so snapshots stay readable;
/// width checks belong in separate assertions.
#[must_use]
pub(crate) fn frame_to_string(lines: &[String]) -> String {
    let mut result = String::new();
    for line in lines {
        result.push_str(line.trim_end_matches(' '));
        result.push('\n');
    }
    result
}

/// Asserts that every line is exactly `width` display columns wide.
pub(crate) fn assert_width(lines: &[String], width: usize) {
    for (index, line) in lines.iter().enumerate() {
        assert_eq!(
            crate::display_width(line),
            width,
            "line {index} has the wrong width: {line:?}"
        );
    }
}
