//! Functionality for converting source text into a classified [`Token`] stream.
mod categories;
mod char_ext;
mod rules;
mod tokenizer;
mod tokens;

pub use categories::Category;
pub use rules::{Matcher, Rule, RuleSet, ROOT};
pub use tokenizer::{tokenize, tokenize_with, Tokens};
pub use tokens::Token;
