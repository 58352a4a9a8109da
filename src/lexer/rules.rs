//! The ordered rule table driving tokenization.
//!
//! Each [`Rule`] pairs an anchored recognizer with the [`Category`] its match
//! receives. Recognizers are tried top to bottom at the cursor position and
//! the first one to match a non-empty prefix wins; table order, not match
//! length, decides precedence. The table is built once and shared read-only
//! across all tokenize calls.
use once_cell::sync::Lazy;

use super::{categories::Category, char_ext::CharExt};

/// Attempts to match a prefix of `text` starting exactly at `pos`.
/// Returns the byte length of the match, which is always non-zero.
pub type Matcher = fn(text: &str, pos: usize) -> Option<usize>;

#[derive(Debug)]
pub struct Rule {
    pub matcher: Matcher,
    pub category: Category,
}

/// A named, ordered collection of rules.
///
/// zx needs only the single `root` state; there are no nested contexts to
/// push or pop into.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

/// The `root` rule set for zx.
pub static ROOT: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    name: "root",
    rules: vec![
        Rule {
            matcher: match_type_keyword,
            category: Category::KeywordType,
        },
        Rule {
            matcher: match_keyword,
            category: Category::Keyword,
        },
        Rule {
            matcher: match_name,
            category: Category::Name,
        },
        Rule {
            matcher: match_float,
            category: Category::NumberFloat,
        },
        Rule {
            matcher: match_integer,
            category: Category::NumberInteger,
        },
        Rule {
            matcher: match_operator,
            category: Category::Operator,
        },
        Rule {
            matcher: match_punctuation,
            category: Category::Punctuation,
        },
        Rule {
            matcher: match_double_string,
            category: Category::StringDouble,
        },
        Rule {
            matcher: match_single_string,
            category: Category::StringSingle,
        },
        Rule {
            matcher: match_line_comment,
            category: Category::CommentSingle,
        },
        Rule {
            matcher: match_block_comment,
            category: Category::CommentMultiline,
        },
        Rule {
            matcher: match_whitespace,
            category: Category::Text,
        },
    ],
});

const TYPE_KEYWORDS: &[&str] = &[
    "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64", "u128", "i128", "f80",
    "f128", "char", "bool",
];

const KEYWORDS: &[&str] = &[
    "if", "elif", "else", "loop", "fn", "ret", "true", "false", "ref", "deref", "struct", "sync",
    "enum", "void", "volatile", "null", "import", "break", "continue", "match",
];

/// Reads the maximal word at `pos`. Word rules never fire mid-word, so this
/// also requires the preceding character to not be a word character.
fn word_at(text: &str, pos: usize) -> Option<&str> {
    let rest = &text[pos..];
    if !rest.chars().next()?.is_word_start() {
        return None;
    }
    if text[..pos].chars().next_back().is_some_and(|c| c.is_word()) {
        return None;
    }
    let len = rest
        .char_indices()
        .find(|(_, c)| !c.is_word())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

fn match_type_keyword(text: &str, pos: usize) -> Option<usize> {
    word_at(text, pos)
        .filter(|word| TYPE_KEYWORDS.contains(word))
        .map(str::len)
}

fn match_keyword(text: &str, pos: usize) -> Option<usize> {
    word_at(text, pos)
        .filter(|word| KEYWORDS.contains(word))
        .map(str::len)
}

fn match_name(text: &str, pos: usize) -> Option<usize> {
    word_at(text, pos).map(str::len)
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Optional sign, digits with a mandatory decimal point (on at least one side
/// of which digits appear), optional exponent.
fn match_float(text: &str, pos: usize) -> Option<usize> {
    let rest = text[pos..].as_bytes();
    let mut i = 0;
    if matches!(rest.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = digit_run(rest, i);
    i += int_digits;
    if rest.get(i) != Some(&b'.') {
        return None;
    }
    i += 1;
    let frac_digits = digit_run(rest, i);
    i += frac_digits;
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(rest.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(rest.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digit_run(rest, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(i)
}

fn match_integer(text: &str, pos: usize) -> Option<usize> {
    let rest = text[pos..].as_bytes();
    let mut i = 0;
    if matches!(rest.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits = digit_run(rest, i);
    if digits == 0 {
        return None;
    }
    Some(i + digits)
}

fn match_operator(text: &str, pos: usize) -> Option<usize> {
    let rest = text[pos..].as_bytes();
    match (rest.first()?, rest.get(1)) {
        (b'>', Some(b'>'))
        | (b'<', Some(b'<'))
        | (b'=', Some(b'='))
        | (b'!', Some(b'='))
        | (b'+', Some(b'+'))
        | (b'-', Some(b'-')) => Some(2),
        // A lone slash is an operator, but `//` and `/*` open comments and
        // must be left for the comment rules further down the table.
        (b'/', Some(b'/' | b'*')) => None,
        (b'>' | b'^' | b'|' | b'&' | b'+' | b'-' | b'*' | b'/' | b'%', _) => Some(1),
        _ => None,
    }
}

fn match_punctuation(text: &str, pos: usize) -> Option<usize> {
    let first = *text[pos..].as_bytes().first()?;
    if matches!(first, b',' | b';' | b'{' | b'}' | b'(' | b')' | b'[' | b']' | b'.') {
        Some(1)
    } else {
        None
    }
}

/// Matches a quoted literal, honouring backslash escapes. The literal must
/// terminate; an open quote with no closing quote is not a match. Plain line
/// breaks inside the literal are allowed but an escaped line break is not,
/// matching the source grammar, where an escape cannot consume a newline.
fn match_quoted(text: &str, pos: usize, quote: char) -> Option<usize> {
    let rest = &text[pos..];
    let mut chars = rest.char_indices();
    if chars.next()?.1 != quote {
        return None;
    }
    let mut escaped = false;
    for (i, ch) in chars {
        if escaped {
            if ch == '\n' {
                return None;
            }
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            c if c == quote => return Some(i + 1),
            _ => {}
        }
    }
    None
}

fn match_double_string(text: &str, pos: usize) -> Option<usize> {
    match_quoted(text, pos, '"')
}

fn match_single_string(text: &str, pos: usize) -> Option<usize> {
    match_quoted(text, pos, '\'')
}

/// `//` through the first following newline, inclusive. A comment on the last
/// line of a file with no trailing newline does not match at all and degrades
/// to per-character plain text; the source grammar has the same quirk.
fn match_line_comment(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    if !rest.starts_with("//") {
        return None;
    }
    rest.find('\n').map(|i| i + 1)
}

/// `/*` through the nearest following `*/`, without nesting. The terminator
/// must sit on the opening line: the source pattern matches the body with a
/// newline-excluding wildcard, so a block comment spanning lines never
/// matches and degrades like any other unrecognized text.
fn match_block_comment(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    if !rest.starts_with("/*") {
        return None;
    }
    let line_end = rest.find('\n').unwrap_or(rest.len());
    rest[2..line_end].find("*/").map(|i| i + 4)
}

fn match_whitespace(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let len = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    Some(len)
}
