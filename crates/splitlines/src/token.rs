//! Tokens placed on lines.

use markup::{Element, Node, Tag};
use smallvec::SmallVec;

/// Ancestor tags of a word, outermost first.
pub type TagChain = SmallVec<[Tag; 4]>;

/// A word wrapped in the chain of tags it was found under.
///
/// Only the word itself is kept: every other sibling at each level of the
/// chain is gone.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupWord {
    pub chain: TagChain,
    pub word: String,
}

impl MarkupWord {
    pub fn new(tag: Tag, word: impl Into<String>) -> Self {
        let mut chain = TagChain::new();
        chain.push(tag);
        Self {
            chain,
            word: word.into(),
        }
    }
}

/// An atomic unit placed during line packing.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A bare word.
    Plain(String),
    /// A word inside one or more elements.
    Markup(MarkupWord),
    /// A line break, possibly nested inside elements. Never measured.
    Break { ancestors: TagChain },
}

impl Token {
    /// A break with no enclosing elements.
    pub fn line_break() -> Self {
        Token::Break {
            ancestors: TagChain::new(),
        }
    }

    /// The word carried by this token; empty for breaks.
    pub fn word(&self) -> &str {
        match self {
            Token::Plain(word) => word,
            Token::Markup(markup) => &markup.word,
            Token::Break { .. } => "",
        }
    }

    /// True for word tokens whose word is empty.
    pub fn is_empty(&self) -> bool {
        !self.is_break() && self.word().is_empty()
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Token::Break { .. })
    }

    /// Wrap this token in `tag`, making it the new outermost ancestor.
    pub fn wrap_in(self, tag: &Tag) -> Token {
        match self {
            Token::Plain(word) => Token::Markup(MarkupWord::new(tag.clone(), word)),
            Token::Markup(mut markup) => {
                markup.chain.insert(0, tag.clone());
                Token::Markup(markup)
            }
            Token::Break { mut ancestors } => {
                ancestors.insert(0, tag.clone());
                Token::Break { ancestors }
            }
        }
    }

    /// Serialize the token as standalone markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        for tag in self.chain() {
            tag.write_open(out);
        }
        match self {
            Token::Break { .. } => out.push_str("<br>"),
            _ => markup::write_text(self.word(), out),
        }
        for tag in self.chain().iter().rev() {
            tag.write_close(out);
        }
    }

    /// The token as a node tree, the word or break nested in its chain.
    pub fn to_node(&self) -> Node {
        let leaf = match self {
            Token::Break { .. } => Node::Break,
            _ => Node::Text(self.word().to_string()),
        };
        self.chain().iter().rev().fold(leaf, |child, tag| {
            Node::Element(Element::new(tag.clone()).with_children(vec![child]))
        })
    }

    fn chain(&self) -> &[Tag] {
        match self {
            Token::Plain(_) => &[],
            Token::Markup(markup) => markup.chain.as_slice(),
            Token::Break { ancestors } => ancestors.as_slice(),
        }
    }
}
