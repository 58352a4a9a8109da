//! The category vocabulary tokens are classified into.
use std::fmt::{self, Display};

/// A highlighting category.
///
/// The vocabulary is closed and flat; dotted names like `Keyword.Type` become
/// their own variants. The hierarchy the dotted names suggest is informational
/// only and surfaces through [`Category::fallback`], which renderers use to
/// pick a style for a refined tag they have no direct mapping for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    KeywordType,
    Name,
    NumberInteger,
    NumberFloat,
    Operator,
    Punctuation,
    StringDouble,
    StringSingle,
    CommentSingle,
    CommentMultiline,
    Text,
}

impl Category {
    /// The category a renderer should fall back to when it has no styling for
    /// this one. `KeywordType` refines `Keyword`; every other refinement's
    /// parent (`Number`, `String`, `Comment`) lies outside the vocabulary, so
    /// those degrade straight to unstyled [`Category::Text`], which itself has
    /// nothing left to fall back to.
    pub fn fallback(self) -> Option<Category> {
        match self {
            Category::KeywordType => Some(Category::Keyword),
            Category::Text => None,
            _ => Some(Category::Text),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Keyword => "Keyword",
            Category::KeywordType => "Keyword.Type",
            Category::Name => "Name",
            Category::NumberInteger => "Number.Integer",
            Category::NumberFloat => "Number.Float",
            Category::Operator => "Operator",
            Category::Punctuation => "Punctuation",
            Category::StringDouble => "String.Double",
            Category::StringSingle => "String.Single",
            Category::CommentSingle => "Comment.Single",
            Category::CommentMultiline => "Comment.Multiline",
            Category::Text => "Text",
        };
        f.write_str(name)
    }
}
