//! Wrapping elements into lines.
//!
//! The new content of an element is built completely before it replaces the
//! old one, so an element whose wrapping fails keeps its original children.
//!
//! [`wrap_lines`] processes every element independently: configuration is
//! checked once up front, and a failure on one element is reported in its slot
//! of the result without stopping the others.

use markup::Element;

use crate::error::{MeasurementError, Result};
use crate::format::LineFormatter;
use crate::options::{Options, Width};
use crate::oracle::MeasurementOracle;
use crate::packer::{threshold, Line, LinePacker};
use crate::splitter::{split_markup_words, split_plain_words};

/// Wrap a single element in place, returning the lines it now contains.
///
/// ```
/// use markup::{parse, Element, Tag};
/// use splitlines::{wrap_element, Options, TextMetrics, Width};
///
/// let mut element = Element::new(Tag::new("p")).with_children(parse("the quick brown fox").unwrap());
/// let options = Options::new().with_width(Width::Fixed(9.0));
/// let lines = wrap_element(&mut element, &options, &mut TextMetrics::new()).unwrap();
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(
///     element.inner_html(),
///     r#"<div style="--line-index: 0;">the quick </div><div style="--line-index: 1;">brown fox </div>"#
/// );
/// ```
pub fn wrap_element<O>(element: &mut Element, options: &Options, oracle: &mut O) -> Result<Vec<Line>>
where
    O: MeasurementOracle + ?Sized,
{
    options.width.validate()?;
    let formatter = LineFormatter::new(&options.tag)?;
    wrap_with(element, options, &formatter, oracle)
}

/// Wrap several elements, each measured on its own oracle from `surface`.
///
/// The outer error is a configuration problem; nothing has been touched when
/// it is returned. Each inner result belongs to the element at the same
/// position.
pub fn wrap_lines<O, F>(
    elements: &mut [Element],
    options: &Options,
    mut surface: F,
) -> Result<Vec<Result<Vec<Line>>>>
where
    O: MeasurementOracle,
    F: FnMut(&Element) -> O,
{
    options.width.validate()?;
    let formatter = LineFormatter::new(&options.tag)?;

    let outcomes = elements
        .iter_mut()
        .enumerate()
        .map(|(position, element)| {
            let mut oracle = surface(&*element);
            let outcome = wrap_with(element, options, &formatter, &mut oracle);
            if let Err(err) = &outcome {
                log::warn!(
                    "element {position} <{}> left unchanged: {err}",
                    element.tag.name
                );
            }
            outcome
        })
        .collect();

    Ok(outcomes)
}

fn wrap_with<O>(
    element: &mut Element,
    options: &Options,
    formatter: &LineFormatter,
    oracle: &mut O,
) -> Result<Vec<Line>>
where
    O: MeasurementOracle + ?Sized,
{
    let width = resolve_width(options.width, element, oracle)?;
    let tokens = if options.keep_html {
        split_markup_words(&element.children)
    } else {
        split_plain_words(&element.text())
    };
    let threshold = threshold(oracle, width)?;
    log::debug!(
        "wrapping <{}>: {} token(s) at width {width}, threshold {threshold}",
        element.tag.name,
        tokens.len()
    );

    let lines = LinePacker::new(oracle, width, threshold, formatter).pack(&tokens)?;

    element.children = lines
        .iter()
        .flat_map(|line| formatter.format_nodes(line.nodes(), line.index))
        .collect();

    Ok(lines)
}

fn resolve_width<O>(width: Width, element: &Element, oracle: &mut O) -> Result<f32>
where
    O: MeasurementOracle + ?Sized,
{
    let resolved = match width {
        Width::Auto => oracle.element_width(element)?,
        Width::Fixed(value) => value,
    };

    if resolved.is_finite() && resolved > 0.0 {
        Ok(resolved)
    } else {
        Err(MeasurementError::ZeroWidth(resolved).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, SplitLinesError};
    use crate::oracle::TextMetrics;
    use markup::{parse, Tag};

    fn paragraph(html: &str) -> Element {
        Element::new(Tag::new("p")).with_children(parse(html).unwrap())
    }

    #[test]
    fn auto_width_uses_element_width() {
        let mut element = paragraph("the quick brown fox");
        let mut oracle = TextMetrics::new().with_element_width(9.0);
        let lines = wrap_element(&mut element, &Options::new(), &mut oracle).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn auto_width_of_zero_is_unavailable() {
        let mut element = paragraph("text");
        let mut oracle = TextMetrics::new().with_element_width(0.0);
        let result = wrap_element(&mut element, &Options::new(), &mut oracle);
        assert_eq!(
            result,
            Err(SplitLinesError::MeasurementUnavailable(
                MeasurementError::ZeroWidth(0.0)
            ))
        );
        assert_eq!(element, paragraph("text"));
    }

    #[test]
    fn auto_width_without_element_width_is_unavailable() {
        let mut element = paragraph("text");
        let result = wrap_element(&mut element, &Options::new(), &mut TextMetrics::new());
        assert_eq!(
            result,
            Err(SplitLinesError::MeasurementUnavailable(
                MeasurementError::NoElementWidth
            ))
        );
    }

    #[test]
    fn invalid_fixed_width_is_configuration_error() {
        let mut element = paragraph("text");
        let options = Options::new().with_width(Width::Fixed(-1.0));
        let result = wrap_element(&mut element, &options, &mut TextMetrics::new());
        assert!(matches!(
            result,
            Err(SplitLinesError::Configuration(ConfigError::InvalidWidth(_)))
        ));
        assert_eq!(element, paragraph("text"));
    }

    #[test]
    fn flattened_text_drops_markup() {
        let mut element = paragraph("<b>hello</b> <i>world</i>");
        let options = Options::new()
            .with_width(Width::Fixed(40.0))
            .with_keep_html(false);
        let lines = wrap_element(&mut element, &options, &mut TextMetrics::new()).unwrap();
        assert_eq!(lines[0].content, "hello world ");
    }

    #[test]
    fn flattened_text_keeps_angle_brackets_as_text() {
        let mut element = paragraph("<i>x<</i>!y z");
        let options = Options::new()
            .with_width(Width::Fixed(40.0))
            .with_keep_html(false);
        let lines = wrap_element(&mut element, &options, &mut TextMetrics::new()).unwrap();

        assert_eq!(lines[0].words().collect::<Vec<_>>(), vec!["x<!y", "z"]);
        let line = element.children[0].as_element().unwrap();
        assert_eq!(line.text(), "x<!y z ");
        assert_eq!(
            element.inner_html(),
            r#"<div style="--line-index: 0;">x&lt;!y z </div>"#
        );
    }

    #[test]
    fn replaces_children_with_lines() {
        let mut element = paragraph("<b>hello</b> world");
        let options = Options::new().with_width(Width::Fixed(40.0));
        wrap_element(&mut element, &options, &mut TextMetrics::new()).unwrap();
        assert_eq!(element.children.len(), 1);
        let line = element.children[0].as_element().unwrap();
        assert_eq!(line.tag.name, "div");
        assert_eq!(line.inner_html(), "<b>hello</b> world ");
    }
}
