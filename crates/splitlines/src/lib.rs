//! Split the content of an element into visual lines.
//!
//! Content is broken into word tokens that each carry the markup they sat in,
//! then packed greedily into lines: a token is appended while a
//! [`MeasurementOracle`] reports the line still renders at single-line height.
//! Every finished line is wrapped in a container tag annotated with its index
//! in the `--line-index` custom property.
//!
//! ```
//! use markup::{parse, Element, Tag};
//! use splitlines::{wrap_element, Options, TextMetrics, Width};
//!
//! let mut element = Element::new(Tag::new("p")).with_children(parse("<b>hello</b> world").unwrap());
//! let options = Options::new().with_width(Width::Fixed(40.0));
//! wrap_element(&mut element, &options, &mut TextMetrics::new()).unwrap();
//!
//! assert_eq!(
//!     element.inner_html(),
//!     r#"<div style="--line-index: 0;"><b>hello</b> world </div>"#
//! );
//! ```

pub mod error;
pub mod format;
mod grapheme;
mod log_init;
pub mod options;
pub mod oracle;
pub mod packer;
pub mod splitter;
pub mod token;
pub mod words;
pub mod wrap;

pub use error::{ConfigError, MeasurementError, Result, SplitLinesError};
pub use format::{LineFormatter, LINE_INDEX_PROPERTY};
pub use log_init::init_logger;
pub use options::{Options, Width, DEFAULT_TAG};
pub use oracle::{MeasurementOracle, TextMetrics};
pub use packer::{Line, LinePacker, THRESHOLD_SLACK};
pub use splitter::{split_markup_words, split_plain_words};
pub use token::{MarkupWord, Token};
pub use wrap::{wrap_element, wrap_lines};
