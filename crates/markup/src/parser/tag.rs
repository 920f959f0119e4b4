//! Start tag content parser.
//!
//! Parses the content inside `<...>`: the tag name, its attributes and the
//! optional self-closing slash.

use crate::error::MarkupParseError;
use crate::node::{Attribute, Tag};

/// The result of parsing start tag content.
#[derive(Clone, Debug, PartialEq)]
pub struct StartTag {
    /// Tag name and attributes.
    pub tag: Tag,
    /// Written with a trailing slash (`<img/>`).
    pub self_closing: bool,
}

impl StartTag {
    /// Parse start tag content (the text inside `<...>`).
    ///
    /// `position` is the byte offset of the `<` and is only used for errors.
    /// Tag and attribute names are lowercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::parser::StartTag;
    ///
    /// let start = StartTag::parse(r#"A HREF="/x" hidden"#, 0).unwrap();
    /// assert_eq!(start.tag.name, "a");
    /// assert_eq!(start.tag.attribute("href"), Some("/x"));
    /// assert!(start.tag.has_attribute("hidden"));
    /// ```
    pub fn parse(content: &str, position: usize) -> Result<Self, MarkupParseError> {
        let mut content = content.trim_end();
        let self_closing = content.ends_with('/');
        if self_closing {
            content = content[..content.len() - 1].trim_end();
        }

        let name_end = content
            .find(|c: char| c.is_whitespace())
            .unwrap_or(content.len());
        let name = &content[..name_end];
        if !is_valid_name(name) {
            return Err(MarkupParseError::InvalidTagName(position, name.to_string()));
        }

        let attributes = parse_attributes(&content[name_end..], position)?;

        Ok(Self {
            tag: Tag {
                name: name.to_ascii_lowercase(),
                attributes,
            },
            self_closing,
        })
    }
}

/// Check whether `name` is usable as a tag name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn parse_attributes(input: &str, position: usize) -> Result<Vec<Attribute>, MarkupParseError> {
    let mut attributes = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        if name_end == 0 {
            return Err(MarkupParseError::InvalidAttribute(position));
        }
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (value, remaining) = parse_value(after_eq, position)?;
            rest = remaining;
            Some(value)
        } else {
            None
        };

        attributes.push(Attribute { name, value });
        rest = rest.trim_start();
    }

    Ok(attributes)
}

/// Parse one attribute value, returning it and the unconsumed input.
fn parse_value(input: &str, position: usize) -> Result<(String, &str), MarkupParseError> {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &input[1..];
            let end = body
                .find(quote)
                .ok_or(MarkupParseError::UnterminatedAttribute(position))?;
            Ok((body[..end].to_string(), &body[end + 1..]))
        }
        _ => {
            let end = input
                .find(|c: char| c.is_whitespace())
                .unwrap_or(input.len());
            Ok((input[..end].to_string(), &input[end..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_name() {
        let start = StartTag::parse("b", 0).unwrap();
        assert_eq!(start.tag, Tag::new("b"));
        assert!(!start.self_closing);
    }

    #[test]
    fn parse_self_closing() {
        let start = StartTag::parse("img src=a.png /", 0).unwrap();
        assert_eq!(start.tag.name, "img");
        assert_eq!(start.tag.attribute("src"), Some("a.png"));
        assert!(start.self_closing);
    }

    #[test]
    fn parse_quoted_values() {
        let start = StartTag::parse(r#"span class="a b" title='say "hi"'"#, 0).unwrap();
        assert_eq!(start.tag.attribute("class"), Some("a b"));
        assert_eq!(start.tag.attribute("title"), Some(r#"say "hi""#));
    }

    #[test]
    fn parse_spaces_around_equals() {
        let start = StartTag::parse(r#"a href = "/home""#, 0).unwrap();
        assert_eq!(start.tag.attribute("href"), Some("/home"));
    }

    #[test]
    fn parse_boolean_attribute() {
        let start = StartTag::parse("input disabled type=text", 0).unwrap();
        assert_eq!(
            start.tag.attributes,
            vec![
                Attribute {
                    name: "disabled".to_string(),
                    value: None,
                },
                Attribute {
                    name: "type".to_string(),
                    value: Some("text".to_string()),
                },
            ]
        );
    }

    #[test]
    fn parse_preserves_attribute_order() {
        let start = StartTag::parse(r#"a z="1" a="2" m="3""#, 0).unwrap();
        let names: Vec<_> = start.tag.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn parse_invalid_name() {
        let result = StartTag::parse("1abc", 7);
        assert_eq!(
            result,
            Err(MarkupParseError::InvalidTagName(7, "1abc".to_string()))
        );
    }

    #[test]
    fn parse_missing_attribute_name() {
        let result = StartTag::parse(r#"a ="x""#, 3);
        assert_eq!(result, Err(MarkupParseError::InvalidAttribute(3)));
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_name("div"));
        assert!(is_valid_name("my-element"));
        assert!(is_valid_name("svg:rect"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("-x"));
        assert!(!is_valid_name("a b"));
    }
}
