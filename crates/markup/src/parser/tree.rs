//! Tree builder for HTML fragments.
//!
//! Combines the lexer and start tag parser to produce a `Node` tree.

use crate::error::MarkupParseError;
use crate::node::{is_void_element, Element, Node};

use super::lexer::{Lexer, Token};
use super::tag::StartTag;

/// Parses an HTML fragment into a sequence of sibling nodes.
///
/// Comments and declarations are dropped. `<br>` becomes [`Node::Break`].
/// Elements still open at the end of input are closed implicitly.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
///
/// let nodes = parse("<b>Hello</b> World").unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].text(), "Hello");
/// ```
pub fn parse(input: &str) -> Result<Vec<Node>, MarkupParseError> {
    let mut lexer = Lexer::new(input);
    let mut builder = TreeBuilder::new();

    loop {
        let position = lexer.offset();
        match lexer.next() {
            Some(token) => builder.process_token(token?, position)?,
            None => break,
        }
    }

    Ok(builder.finish())
}

/// The tree builder state.
struct TreeBuilder {
    /// Completed top-level nodes.
    root: Vec<Node>,
    /// Elements opened but not yet closed, innermost last.
    open: Vec<Element>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            open: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>, position: usize) -> Result<(), MarkupParseError> {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::OpenTag(content) => self.process_open_tag(content, position)?,
            Token::CloseTag(name) => self.process_close_tag(name, position)?,
            Token::Comment(_) | Token::Declaration(_) => {}
        }
        Ok(())
    }

    fn process_open_tag(&mut self, content: &str, position: usize) -> Result<(), MarkupParseError> {
        let start = StartTag::parse(content, position)?;

        if start.tag.name == "br" {
            self.push_node(Node::Break);
        } else if start.self_closing || is_void_element(&start.tag.name) {
            self.push_node(Node::Element(Element::new(start.tag)));
        } else {
            self.open.push(Element::new(start.tag));
        }

        Ok(())
    }

    fn process_close_tag(&mut self, name: &str, position: usize) -> Result<(), MarkupParseError> {
        let name = name.to_ascii_lowercase();

        // `</br>` is treated as a line break, the way browsers do.
        if name == "br" {
            self.push_node(Node::Break);
            return Ok(());
        }

        let depth = self
            .open
            .iter()
            .rposition(|element| element.tag.name == name)
            .ok_or_else(|| MarkupParseError::UnexpectedCloseTag(position, name.clone()))?;

        // Close everything opened inside the matching element as well.
        while self.open.len() > depth {
            self.close_innermost();
        }

        Ok(())
    }

    /// Append text, merging with a preceding text node.
    fn push_text(&mut self, text: &str) {
        let siblings = self.current_children();
        if let Some(Node::Text(previous)) = siblings.last_mut() {
            previous.push_str(text);
        } else {
            siblings.push(Node::Text(text.to_string()));
        }
    }

    fn push_node(&mut self, node: Node) {
        self.current_children().push(node);
    }

    fn current_children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(element) => &mut element.children,
            None => &mut self.root,
        }
    }

    fn close_innermost(&mut self) {
        if let Some(element) = self.open.pop() {
            self.push_node(Node::Element(element));
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close_innermost();
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Tag;

    #[test]
    fn parse_plain_text() {
        let nodes = parse("Hello World").unwrap();
        assert_eq!(nodes, vec![Node::Text("Hello World".to_string())]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn parse_nested_elements() {
        let nodes = parse("<b><i>x</i></b>").unwrap();
        let expected = Node::Element(
            Element::new(Tag::new("b")).with_children(vec![Node::Element(
                Element::new(Tag::new("i")).with_children(vec![Node::Text("x".to_string())]),
            )]),
        );
        assert_eq!(nodes, vec![expected]);
    }

    #[test]
    fn parse_break() {
        let nodes = parse("a<br>b").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Text("a".to_string()),
                Node::Break,
                Node::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn parse_break_variants() {
        let nodes = parse("<BR/><br ></br>").unwrap();
        assert_eq!(nodes, vec![Node::Break, Node::Break, Node::Break]);
    }

    #[test]
    fn parse_void_element_has_no_children() {
        let nodes = parse("<img src=a.png>after").unwrap();
        assert_eq!(nodes.len(), 2);
        let img = nodes[0].as_element().unwrap();
        assert!(img.children.is_empty());
        assert_eq!(nodes[1], Node::Text("after".to_string()));
    }

    #[test]
    fn parse_unclosed_elements_are_closed() {
        let nodes = parse("<p><b>bold").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].to_html(), "<p><b>bold</b></p>");
    }

    #[test]
    fn parse_mismatched_close_closes_intervening() {
        let nodes = parse("<p><b>bold</p>tail").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].to_html(), "<p><b>bold</b></p>");
    }

    #[test]
    fn parse_unexpected_close() {
        let result = parse("text</i>");
        assert_eq!(
            result,
            Err(MarkupParseError::UnexpectedCloseTag(4, "i".to_string()))
        );
    }

    #[test]
    fn parse_skips_comments() {
        let nodes = parse("a<!-- hidden -->b").unwrap();
        assert_eq!(nodes, vec![Node::Text("ab".to_string())]);
    }

    #[test]
    fn parse_stray_angle_bracket_merges_text() {
        let nodes = parse("1 < 2").unwrap();
        assert_eq!(nodes, vec![Node::Text("1 < 2".to_string())]);
    }
}
