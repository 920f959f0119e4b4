//! Node types for parsed markup.
//!
//! A fragment is an ordered `Vec<Node>`. Elements own their children, so
//! cloning a node clones its whole subtree.

use std::fmt;

/// Elements that never have content and are serialized without a close tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Returns true if `name` is a void element (`<img>`, `<hr>`, ...).
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// A single attribute. `value` is `None` for boolean attributes (`hidden`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// Tag identity and attributes of an element, without its content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    /// Lowercase tag name.
    pub name: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
}

impl Tag {
    /// Create a tag with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, Some(value.into()));
        self
    }

    /// Get an attribute value. Boolean attributes yield `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    /// Returns true if the attribute is present, with or without a value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing one in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Returns true if this is a void element.
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }

    /// Serialize the start tag.
    pub fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for attribute in &self.attributes {
            out.push(' ');
            out.push_str(&attribute.name);
            if let Some(value) = &attribute.value {
                write_attribute_value(value, out);
            }
        }
        out.push('>');
    }

    /// Serialize the end tag. Void elements have none.
    pub fn write_close(&self, out: &mut String) {
        if !self.is_void() {
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
        }
    }
}

/// Write `="value"`, quoted so that parsing it back yields `value`.
///
/// Values holding `"` but no `'` are single-quoted. A value holding both
/// kinds of quote has its `"` written as `&quot;`, which is not decoded again.
fn write_attribute_value(value: &str, out: &mut String) {
    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push('=');
    out.push(quote);
    if quote == '"' {
        out.push_str(&value.replace('"', "&quot;"));
    } else {
        out.push_str(value);
    }
    out.push(quote);
}

/// Write text so that no `<` in it can be read back as the start of a tag.
///
/// Only a `<` directly followed by a letter, `/`, `!` or `?` is escaped; the
/// parser never leaves such a `<` inside a text node, so parsed text is
/// written back verbatim.
pub fn write_text(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(at) = rest.find('<') {
        let (before, after) = rest.split_at(at);
        out.push_str(before);
        let opens_tag = after[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
        out.push_str(if opens_tag { "&lt;" } else { "<" });
        rest = &after[1..];
    }
    out.push_str(rest);
}

/// An element with its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    /// Builder-style children setter.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Flattened text content of all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }

    /// Serialize only the children.
    pub fn inner_html(&self) -> String {
        to_html(&self.children)
    }

    /// Serialize the element including its own tags.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        self.tag.write_open(out);
        for child in &self.children {
            child.write_html(out);
        }
        self.tag.write_close(out);
    }

    /// Returns true if any direct child is an element.
    pub fn has_element_children(&self) -> bool {
        self.children.iter().any(|c| matches!(c, Node::Element(_)))
    }

    /// Visit every leaf element in document order.
    ///
    /// A leaf is an element without element children; this element itself is
    /// a leaf when it has none.
    pub fn for_each_leaf_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        if !self.has_element_children() {
            f(self);
            return;
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.for_each_leaf_mut(f);
            }
        }
    }

    /// Set a CSS declaration in the `style` attribute.
    ///
    /// Existing declarations are kept; one for the same property is replaced.
    ///
    /// ```
    /// use markup::{Element, Tag};
    ///
    /// let mut el = Element::new(Tag::new("div").with_attribute("style", "color: red"));
    /// el.set_style_property("--line-index", "3");
    /// assert_eq!(el.tag.attribute("style"), Some("color: red; --line-index: 3;"));
    /// ```
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        let mut declarations: Vec<(String, String)> = self
            .tag
            .attribute("style")
            .map(parse_declarations)
            .unwrap_or_default();

        match declarations.iter_mut().find(|(p, _)| p == property) {
            Some(declaration) => declaration.1 = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }

        let style = declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.tag.set_attribute("style", Some(style));
    }

    /// Get a CSS declaration value from the `style` attribute.
    pub fn style_property(&self, property: &str) -> Option<String> {
        self.tag
            .attribute("style")
            .map(parse_declarations)
            .and_then(|decls| decls.into_iter().find(|(p, _)| p == property))
            .map(|(_, v)| v)
    }
}

fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
        .filter(|(p, _)| !p.is_empty())
        .collect()
}

/// A node in a markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Raw character data.
    Text(String),
    /// An element and its subtree.
    Element(Element),
    /// A line break (`<br>`).
    Break,
}

impl Node {
    /// Flattened text content. Breaks contribute nothing.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.write_text(out);
                }
            }
            Node::Break => {}
        }
    }

    /// Serialize this node and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => write_text(text, out),
            Node::Element(element) => element.write_html(out),
            Node::Break => out.push_str("<br>"),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Node::Break)
    }
}

/// Serialize a sequence of sibling nodes.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
