//! Markup-preserving word splitting.
//!
//! Each word is tagged with the full chain of elements it was found in, so a
//! line assembled from any run of words is valid markup on its own. Box-level
//! styles of an ancestor (margins, borders) end up repeated on every word.

use markup::Node;

use crate::token::Token;
use crate::words::words;

/// Split sibling nodes into an ordered sequence of tokens.
///
/// ```
/// use markup::parse;
/// use splitlines::splitter::split_markup_words;
///
/// let nodes = parse("<b>hello there</b> world").unwrap();
/// let html: Vec<_> = split_markup_words(&nodes).iter().map(|t| t.to_html()).collect();
/// assert_eq!(html, vec!["<b>hello</b>", "<b>there</b>", "world"]);
/// ```
pub fn split_markup_words(nodes: &[Node]) -> Vec<Token> {
    nodes
        .iter()
        .flat_map(split_node)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split flat text into plain word tokens, discarding any markup.
pub fn split_plain_words(text: &str) -> Vec<Token> {
    words(text).map(|w| Token::Plain(w.to_string())).collect()
}

fn split_node(node: &Node) -> Vec<Token> {
    match node {
        Node::Break => vec![Token::line_break()],
        Node::Text(text) => split_plain_words(text),
        Node::Element(element) => split_markup_words(&element.children)
            .into_iter()
            .map(|token| token.wrap_in(&element.tag))
            .collect(),
    }
}
