//! Lexer for HTML fragments.
//!
//! Converts input text into a stream of tokens.

use crate::error::MarkupParseError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Character data between tags.
    Text(&'a str),
    /// Start tag content (without angle brackets): `b class="x"`
    OpenTag(&'a str),
    /// End tag name: `b` for `</b>`
    CloseTag(&'a str),
    /// Comment body: ` note ` for `<!-- note -->`
    Comment(&'a str),
    /// Doctype or processing instruction content: `!DOCTYPE html`
    Declaration(&'a str),
}

/// Lexer for HTML fragments.
///
/// A `<` that does not start a tag (`a < b`) is lexed as text.
///
/// # Examples
///
/// ```
/// use markup::parser::Lexer;
///
/// let lexer = Lexer::new("<b>Hello</b>");
/// let tokens: Vec<_> = lexer.collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text up to the next `<`.
    ///
    /// The first character is always consumed, so a stray `<` becomes text.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        self.advance();

        while let Some(c) = self.peek() {
            if c == '<' {
                break;
            }
            self.advance();
        }

        &self.input[start..self.pos]
    }

    /// Consume a start tag, honouring quoted attribute values.
    fn consume_open_tag(&mut self) -> Result<Token<'a>, MarkupParseError> {
        let tag_start = self.pos;
        self.advance(); // consume '<'
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some(quote @ ('"' | '\'')) => {
                    self.advance();
                    loop {
                        match self.advance() {
                            Some(c) if c == quote => break,
                            Some(_) => {}
                            None => return Err(MarkupParseError::UnterminatedAttribute(tag_start)),
                        }
                    }
                }
                Some('>') => break,
                Some(_) => {
                    self.advance();
                }
                None => return Err(MarkupParseError::UnclosedTag(tag_start)),
            }
        }

        let content = &self.input[content_start..self.pos];
        self.advance(); // consume '>'
        Ok(Token::OpenTag(content))
    }

    fn consume_close_tag(&mut self) -> Result<Token<'a>, MarkupParseError> {
        let tag_start = self.pos;
        let rest = &self.remaining()[2..];
        let end = rest.find('>').ok_or(MarkupParseError::UnclosedTag(tag_start))?;
        let name = rest[..end].trim();
        self.pos += 2 + end + 1;

        if name.is_empty() {
            Err(MarkupParseError::EmptyTag(tag_start))
        } else {
            Ok(Token::CloseTag(name))
        }
    }

    fn consume_comment(&mut self) -> Result<Token<'a>, MarkupParseError> {
        let comment_start = self.pos;
        let rest = &self.remaining()[4..];
        let end = rest
            .find("-->")
            .ok_or(MarkupParseError::UnclosedComment(comment_start))?;
        let body = &rest[..end];
        self.pos += 4 + end + 3;
        Ok(Token::Comment(body))
    }

    fn consume_declaration(&mut self) -> Result<Token<'a>, MarkupParseError> {
        let decl_start = self.pos;
        let rest = &self.remaining()[1..];
        let end = rest.find('>').ok_or(MarkupParseError::UnclosedTag(decl_start))?;
        let content = &rest[..end];
        self.pos += 1 + end + 1;
        Ok(Token::Declaration(content))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.peek() != Some('<') {
            return Some(Ok(Token::Text(self.consume_text())));
        }

        match self.peek_second() {
            Some('!') if self.remaining().starts_with("<!--") => Some(self.consume_comment()),
            Some('!' | '?') => Some(self.consume_declaration()),
            Some('/') => Some(self.consume_close_tag()),
            Some(c) if c.is_ascii_alphabetic() => Some(self.consume_open_tag()),
            _ => Some(Ok(Token::Text(self.consume_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[test]
    fn lex_plain_text() {
        let tokens = lex("Hello World");
        assert_eq!(tokens, vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_open_tag() {
        let tokens = lex("<b>");
        assert_eq!(tokens, vec![Token::OpenTag("b")]);
    }

    #[test]
    fn lex_close_tag() {
        let tokens = lex("</b>");
        assert_eq!(tokens, vec![Token::CloseTag("b")]);
    }

    #[test]
    fn lex_styled_text() {
        let tokens = lex("<b>Hello</b> World");
        assert_eq!(
            tokens,
            vec![
                Token::OpenTag("b"),
                Token::Text("Hello"),
                Token::CloseTag("b"),
                Token::Text(" World"),
            ]
        );
    }

    #[test]
    fn lex_attributes_with_angle_bracket_in_quotes() {
        let tokens = lex(r#"<a title="x > y">link</a>"#);
        assert_eq!(
            tokens,
            vec![
                Token::OpenTag(r#"a title="x > y""#),
                Token::Text("link"),
                Token::CloseTag("a"),
            ]
        );
    }

    #[test]
    fn lex_stray_angle_bracket_is_text() {
        let tokens = lex("a < b");
        assert_eq!(tokens, vec![Token::Text("a "), Token::Text("< b")]);
    }

    #[test]
    fn lex_comment() {
        let tokens = lex("a<!-- note -->b");
        assert_eq!(
            tokens,
            vec![Token::Text("a"), Token::Comment(" note "), Token::Text("b")]
        );
    }

    #[test]
    fn lex_doctype() {
        let tokens = lex("<!DOCTYPE html><p>");
        assert_eq!(
            tokens,
            vec![Token::Declaration("!DOCTYPE html"), Token::OpenTag("p")]
        );
    }

    #[test]
    fn lex_self_closing() {
        let tokens = lex("<br/>");
        assert_eq!(tokens, vec![Token::OpenTag("br/")]);
    }

    #[test]
    fn lex_unclosed_tag() {
        let result: Result<Vec<_>, _> = Lexer::new("<b class").collect();
        assert!(matches!(result, Err(MarkupParseError::UnclosedTag(0))));
    }

    #[test]
    fn lex_unterminated_quote() {
        let result: Result<Vec<_>, _> = Lexer::new(r#"x<a href="y>"#).collect();
        assert!(matches!(
            result,
            Err(MarkupParseError::UnterminatedAttribute(1))
        ));
    }

    #[test]
    fn lex_unclosed_comment() {
        let result: Result<Vec<_>, _> = Lexer::new("<!-- oops").collect();
        assert!(matches!(result, Err(MarkupParseError::UnclosedComment(0))));
    }

    #[test]
    fn lex_empty_close_tag() {
        let result: Result<Vec<_>, _> = Lexer::new("</>").collect();
        assert!(matches!(result, Err(MarkupParseError::EmptyTag(0))));
    }

    #[test]
    fn lex_unicode() {
        let tokens = lex("<b>日本語</b>");
        assert_eq!(
            tokens,
            vec![
                Token::OpenTag("b"),
                Token::Text("日本語"),
                Token::CloseTag("b"),
            ]
        );
    }
}
