//! Syntax highlighting for the zurox ("zx") toy language.
//!
//! The crate exposes a single tokenizer built around an ordered rule table:
//! each rule pairs an anchored recognizer with a [`Category`], and the first
//! rule that matches a non-empty prefix at the cursor wins. Anything no rule
//! recognizes passes through as plain text, one character at a time, so
//! tokenization is total: every input yields a token sequence whose spans
//! cover the input exactly.
//!
//! ```
//! use zx_highlight::{tokenize, Category};
//!
//! let tokens: Vec<_> = tokenize("u8 x;").collect();
//! assert_eq!(tokens[0].category, Category::KeywordType);
//! ```

pub mod lexer;
pub mod registry;
pub mod render;
pub mod span;

pub use lexer::{tokenize, tokenize_with, Category, Token, Tokens};
pub use span::Span;
