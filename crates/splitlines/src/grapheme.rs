use unicode_display_width::width as display_width_impl;
use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn display_width(text: &str) -> usize {
    display_width_impl(text) as usize
}

pub(crate) fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Rows taken by `word` when it may break between any two graphemes, and the
/// width used on the last of those rows.
pub(crate) fn broken_rows(word: &str, columns: usize) -> (usize, usize) {
    let mut rows = 1;
    let mut used = 0;

    for grapheme in graphemes(word) {
        let width = display_width(grapheme);
        if used > 0 && used + width > columns {
            rows += 1;
            used = width;
        } else {
            used += width;
        }
    }

    (rows, used)
}
