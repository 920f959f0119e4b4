//! Parser for HTML fragments.
//!
//! This module contains the lexer, start tag parser, and tree builder.

mod lexer;
mod tag;
mod tree;

pub use lexer::{Lexer, Token};
pub use tag::{is_valid_name, StartTag};
pub use tree::parse;
