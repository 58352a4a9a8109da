//! Tokens, as produced by the tokenizer.
use std::fmt::{self, Display};

use crate::span::Span;

use super::categories::Category;

/// A classified span of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    pub category: Category,
}
impl Token {
    pub fn length(&self) -> usize {
        self.span.length()
    }

    /// Resolves the token against the text it was produced from.
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        self.span.lookup(source)
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.span)
    }
}
