//! Line container formatting.

use markup::parser::is_valid_name;
use markup::{is_void_element, to_html, Element, MarkupParseError, Node, Tag};

use crate::error::ConfigError;

/// CSS custom property carrying a line's index.
pub const LINE_INDEX_PROPERTY: &str = "--line-index";

/// Wraps finished line content in the configured container.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFormatter {
    container: Container,
}

#[derive(Clone, Debug, PartialEq)]
enum Container {
    /// Parsed container markup; content goes into every leaf element.
    Template(Vec<Node>),
    /// Plain tag name, wrapped by string concatenation without annotation.
    Bare(String),
}

impl LineFormatter {
    /// Build a formatter from a container tag such as `<div>`,
    /// `<p class="line">` or `<div><span>`.
    ///
    /// Anything that does not parse to an element but still names a tag
    /// (`span`, `<p`) falls back to plain concatenation. Void elements such as
    /// `<br>` or `<img>` cannot hold a line and are rejected.
    pub fn new(tag: &str) -> Result<Self, ConfigError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidTag(tag.to_string()));
        }

        if let Ok(nodes) = markup::parse(trimmed) {
            if nodes.iter().any(Node::is_break) || nodes.iter().any(contains_void) {
                return Err(ConfigError::InvalidTag(tag.to_string()));
            }
            if nodes.iter().any(|node| node.as_element().is_some()) {
                return Ok(Self {
                    container: Container::Template(nodes),
                });
            }
        }

        let name = trimmed
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim_end_matches('/')
            .trim();
        if is_valid_name(name) && !is_void_element(&name.to_ascii_lowercase()) {
            Ok(Self {
                container: Container::Bare(name.to_ascii_lowercase()),
            })
        } else {
            Err(ConfigError::InvalidTag(tag.to_string()))
        }
    }

    /// Returns true when lines are wrapped by plain string concatenation.
    pub fn is_fallback(&self) -> bool {
        matches!(self.container, Container::Bare(_))
    }

    /// Wrap `content` in the container and annotate it with `index`.
    ///
    /// ```
    /// use splitlines::format::LineFormatter;
    ///
    /// let formatter = LineFormatter::new("<div>").unwrap();
    /// assert_eq!(
    ///     formatter.format("<b>hello</b> world ", 0).unwrap(),
    ///     r#"<div style="--line-index: 0;"><b>hello</b> world </div>"#
    /// );
    /// ```
    pub fn format(&self, content: &str, index: usize) -> Result<String, MarkupParseError> {
        match &self.container {
            Container::Bare(name) => Ok(format!("<{name}>{content}</{name}>")),
            Container::Template(_) => {
                let content = markup::parse(content)?;
                Ok(to_html(&self.format_nodes(content, index)))
            }
        }
    }

    /// Wrap already built `content` nodes in the container.
    pub fn format_nodes(&self, content: Vec<Node>, index: usize) -> Vec<Node> {
        match &self.container {
            Container::Bare(name) => {
                vec![Node::Element(Element::new(Tag::new(name.as_str())).with_children(content))]
            }
            Container::Template(template) => {
                let index = index.to_string();
                let mut container = template.clone();

                for node in &mut container {
                    if let Node::Element(element) = node {
                        element.for_each_leaf_mut(&mut |leaf| {
                            leaf.children = content.clone();
                            leaf.set_style_property(LINE_INDEX_PROPERTY, &index);
                        });
                    }
                }

                container
            }
        }
    }
}

fn contains_void(node: &Node) -> bool {
    match node {
        Node::Element(element) => {
            element.tag.is_void() || element.children.iter().any(contains_void)
        }
        _ => false,
    }
}
