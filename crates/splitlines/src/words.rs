//! Whitespace word splitting.

/// Split `text` on runs of whitespace.
///
/// Delimiters are consumed. Leading or trailing whitespace produces an empty
/// first or last segment, so callers filter empties before use (or call
/// [`words`]).
///
/// ```
/// use splitlines::words::split_words;
///
/// assert_eq!(split_words(" a  b "), vec!["", "a", "b", ""]);
/// assert_eq!(split_words(""), vec![""]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_delimiter = false;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if !in_delimiter {
                segments.push(&text[start..idx]);
                in_delimiter = true;
            }
        } else if in_delimiter {
            start = idx;
            in_delimiter = false;
        }
    }

    segments.push(if in_delimiter { "" } else { &text[start..] });
    segments
}

/// Non-empty words of `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    split_words(text).into_iter().filter(|w| !w.is_empty())
}
