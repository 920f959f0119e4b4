//! Headless text metrics.
//!
//! [`TextMetrics`] lays text out on a monospace cell grid: every grapheme is
//! `display width × cell_width` wide and every row is `line_height` tall. Words
//! wrap greedily at whitespace, `<br>` starts a new row, and markup itself takes
//! no room. This is enough to wrap text without a rendering engine and gives
//! tests deterministic heights.

use markup::{Element, Node};

use crate::error::MeasurementError;
use crate::grapheme::{broken_rows, display_width};
use crate::words::words;

use super::{MeasurementOracle, checked_height};

/// A cell-grid measurement oracle.
///
/// # Examples
///
/// ```
/// use splitlines::oracle::{MeasurementOracle, TextMetrics};
///
/// let mut metrics = TextMetrics::new().with_line_height(10.0);
/// assert_eq!(metrics.measure_height("the quick ", 9.0), Ok(10.0));
/// assert_eq!(metrics.measure_height("the quick brown ", 9.0), Ok(20.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TextMetrics {
    line_height: f32,
    cell_width: f32,
    element_width: Option<f32>,
    break_words: bool,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            cell_width: 1.0,
            element_width: None,
            break_words: false,
        }
    }
}

impl TextMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of one row.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Width of one display column.
    pub fn with_cell_width(mut self, cell_width: f32) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Width reported for the target element when resolving `auto`.
    pub fn with_element_width(mut self, width: f32) -> Self {
        self.element_width = Some(width);
        self
    }

    /// Break words wider than a row between graphemes instead of letting them
    /// overflow (`overflow-wrap: anywhere`).
    pub fn with_break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }

    /// Number of whole columns that fit in `width`.
    pub fn columns(&self, width: f32) -> Result<usize, MeasurementError> {
        let columns = (width / self.cell_width).floor();
        if columns.is_finite() && columns >= 1.0 {
            Ok(columns as usize)
        } else {
            Err(MeasurementError::ZeroWidth(width))
        }
    }

    /// Number of rows `fragment` occupies at the given column count.
    pub fn rows(&self, fragment: &str, columns: usize) -> Result<usize, MeasurementError> {
        let nodes =
            markup::parse(fragment).map_err(|e| MeasurementError::Unmeasurable(e.to_string()))?;

        let mut hard_lines = vec![String::new()];
        flatten(&nodes, &mut hard_lines);

        if hard_lines.len() == 1 && words(&hard_lines[0]).next().is_none() {
            return Ok(0);
        }

        // A break at the very end opens no new row.
        if hard_lines.len() > 1 && hard_lines.last().is_some_and(|l| words(l).next().is_none()) {
            hard_lines.pop();
        }

        Ok(hard_lines
            .iter()
            .map(|line| self.line_rows(line, columns))
            .sum())
    }

    fn line_rows(&self, line: &str, columns: usize) -> usize {
        let mut rows = 0;
        let mut used = 0;

        for word in words(line) {
            let width = display_width(word);

            if rows > 0 && used + 1 + width <= columns {
                used += 1 + width;
            } else if width > columns && self.break_words {
                let (extra, tail) = broken_rows(word, columns);
                rows += extra;
                used = tail;
            } else {
                rows += 1;
                used = width;
            }
        }

        rows.max(1)
    }
}

fn flatten(nodes: &[Node], lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                if let Some(line) = lines.last_mut() {
                    line.push_str(text);
                }
            }
            Node::Element(element) => flatten(&element.children, lines),
            Node::Break => lines.push(String::new()),
        }
    }
}

impl MeasurementOracle for TextMetrics {
    fn measure_height(&mut self, fragment: &str, width: f32) -> Result<f32, MeasurementError> {
        let columns = self.columns(width)?;
        let rows = self.rows(fragment, columns)?;
        let height = rows as f32 * self.line_height;
        log::trace!("measured {rows} row(s) at {columns} column(s): {fragment:?}");
        checked_height(height)
    }

    fn element_width(&mut self, _element: &Element) -> Result<f32, MeasurementError> {
        self.element_width.ok_or(MeasurementError::NoElementWidth)
    }
}
