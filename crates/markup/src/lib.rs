//! HTML fragment model, parser and serializer.
//!
//! This crate turns markup like `<b>Hello</b> world<br>` into a small owned
//! tree of [`Node`]s and serializes such trees back to markup. It is the
//! structural half of line splitting: it never looks at how markup renders.
//!
//! # Overview
//!
//! - [`Node::Text`] - raw character data, kept verbatim (entities are not decoded)
//! - [`Node::Element`] - a [`Tag`] (name and attributes) plus children
//! - [`Node::Break`] - `<br>`, kept apart from other elements
//!
//! Comments and doctypes are dropped while parsing. Void elements such as
//! `<img>` never get children, and unclosed elements are closed at the end of
//! input.
//!
//! # Usage
//!
//! ```
//! use markup::{parse, to_html, Node};
//!
//! let nodes = parse(r#"<a href="/x">Hello</a> World<br>"#).unwrap();
//! assert_eq!(nodes.len(), 3);
//! assert!(nodes[2].is_break());
//! assert_eq!(to_html(&nodes), r#"<a href="/x">Hello</a> World<br>"#);
//! ```

pub mod error;
pub mod node;
pub mod parser;

// Re-export main types at crate root
pub use error::MarkupParseError;
pub use node::{is_void_element, to_html, write_text, Attribute, Element, Node, Tag};
pub use parser::parse;
