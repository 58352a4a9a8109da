//! ANSI terminal styling for classified tokens.
use crate::lexer::Category;

/// The SGR parameters a category is styled with, if any. Categories without
/// a direct entry here are resolved through [`Category::fallback`].
fn direct_sgr(category: Category) -> Option<&'static str> {
    match category {
        Category::Keyword => Some("32;1"),
        Category::NumberInteger | Category::NumberFloat => Some("36"),
        Category::Operator => Some("33"),
        Category::StringDouble | Category::StringSingle => Some("31"),
        Category::CommentSingle | Category::CommentMultiline => Some("90"),
        _ => None,
    }
}

/// Resolves the style for a category, walking the fallback chain until a
/// styled ancestor is found. `KeywordType` has no style of its own and
/// renders with `Keyword`'s.
pub fn sgr_for(category: Category) -> Option<&'static str> {
    let mut current = category;
    loop {
        if let Some(sgr) = direct_sgr(current) {
            return Some(sgr);
        }
        current = current.fallback()?;
    }
}

/// Wraps `text` in the escape sequence for its category, or returns it
/// unchanged for unstyled categories.
pub fn styled(category: Category, text: &str) -> String {
    match sgr_for(category) {
        Some(sgr) => format!("\x1b[{sgr}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}
