//! Wrap markup into measured, individually tagged lines.
//!
//! This is the facade over the workspace crates: [`markup`] for the fragment
//! tree and [`splitlines`] for word splitting, packing and line formatting.
//! For in-place wrapping of existing elements use [`wrap_element`] or
//! [`wrap_lines`]; for a one-shot string transform use [`split_html`].

pub use markup::{self, Element, MarkupParseError, Node, Tag};
pub use splitlines::{
    self, init_logger, wrap_element, wrap_lines, ConfigError, Line, MeasurementError,
    MeasurementOracle, Options, Result, SplitLinesError, TextMetrics, Width,
};

/// Name of the synthetic element holding the fragment while it is wrapped.
const ROOT_TAG: &str = "div";

/// Wrap an HTML fragment into lines and return the new markup.
///
/// `auto` width is resolved by `oracle` against an anonymous `div` holding the
/// fragment.
///
/// ```
/// use splitlines_rs::{split_html, Options, TextMetrics, Width};
///
/// let options = Options::new().with_width(Width::Fixed(9.0)).with_tag("<p>");
/// let html = split_html("the <i>quick</i> brown fox", &options, &mut TextMetrics::new()).unwrap();
/// assert_eq!(
///     html,
///     r#"<p style="--line-index: 0;">the <i>quick</i> </p><p style="--line-index: 1;">brown fox </p>"#
/// );
/// ```
pub fn split_html<O>(html: &str, options: &Options, oracle: &mut O) -> Result<String>
where
    O: MeasurementOracle + ?Sized,
{
    let mut root = Element::new(Tag::new(ROOT_TAG)).with_children(markup::parse(html)?);
    wrap_element(&mut root, options, oracle)?;
    Ok(root.inner_html())
}
