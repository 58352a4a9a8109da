//! The scan loop: applies the rule table to source text.
use crate::span::Span;

use super::{
    categories::Category,
    rules::{RuleSet, ROOT},
    tokens::Token,
};

/// Tokenizes `text` with the zx `root` rule set.
///
/// The returned iterator is lazy and total: any input, including the empty
/// string and syntactically invalid text, yields a sequence of tokens whose
/// spans cover the input exactly, in order, with no gaps or overlaps.
pub fn tokenize(text: &str) -> Tokens<'_> {
    tokenize_with(&ROOT, text)
}

/// Tokenizes `text` with an explicit rule set, as resolved through
/// [`crate::registry`].
pub fn tokenize_with<'t>(rules: &'static RuleSet, text: &'t str) -> Tokens<'t> {
    Tokens {
        text,
        cursor: 0,
        rules,
    }
}

/// Lazy token stream over a borrowed source string.
pub struct Tokens<'t> {
    text: &'t str,
    cursor: usize,
    rules: &'static RuleSet,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.cursor >= self.text.len() {
            return None;
        }
        for rule in &self.rules.rules {
            if let Some(length) = (rule.matcher)(self.text, self.cursor) {
                debug_assert!(length > 0, "rules must match non-empty prefixes");
                let span = Span::new(self.cursor, self.cursor + length);
                self.cursor += length;
                return Some(Token {
                    span,
                    category: rule.category,
                });
            }
        }
        // No rule matched; pass a single character through as plain text.
        // This guarantees forward progress and makes tokenization total.
        let length = self.text[self.cursor..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let span = Span::new(self.cursor, self.cursor + length);
        self.cursor += length;
        Some(Token {
            span,
            category: Category::Text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::Category::*;

    fn assert_tokenizes(source: &str, expected: Vec<(&str, Category)>) {
        let actual: Vec<(&str, Category)> = tokenize(source)
            .map(|t| (t.text(source), t.category))
            .collect();

        assert_eq!(
            expected, actual,
            "\n\nUnexpected token stream for input {:?}",
            source
        );
    }

    fn assert_token(source: &str, category: Category) {
        assert_tokenizes(source, vec![(source, category)]);
    }

    fn assert_covers(source: &str) {
        let mut cursor = 0;
        let mut reassembled = String::new();
        for token in tokenize(source) {
            assert_eq!(
                token.span.start(),
                cursor,
                "gap or overlap at byte {} of {:?}",
                cursor,
                source
            );
            cursor = token.span.end();
            reassembled.push_str(token.text(source));
        }
        assert_eq!(cursor, source.len(), "input {:?} not fully consumed", source);
        assert_eq!(reassembled, source);
    }

    #[test]
    fn token_spans_reassemble_the_input() {
        for source in [
            "",
            "fn main() { ret 0; }",
            "$$$ @@@ ###",
            "/* a\nb */",
            "\"unterminated",
            "émoji ∑ text",
            "u8x 3.14 // trailing",
        ] {
            assert_covers(source);
        }
    }

    #[test]
    fn tokenizing_twice_gives_identical_streams() {
        let source = "fn f(u8 x) { ret x ++ 1; } // done\n";
        let first: Vec<Token> = tokenize(source).collect();
        let second: Vec<Token> = tokenize(source).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn type_keywords_lex_as_type_keywords() {
        for word in [
            "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64", "u128", "i128",
            "f80", "f128", "char", "bool",
        ] {
            assert_token(word, KeywordType);
        }
    }

    #[test]
    fn keywords_lex_as_keywords() {
        for word in [
            "if", "elif", "else", "loop", "fn", "ret", "true", "false", "ref", "deref", "struct",
            "sync", "enum", "void", "volatile", "null", "import", "break", "continue", "match",
        ] {
            assert_token(word, Keyword);
        }
    }

    #[test]
    fn keyword_inside_a_longer_word_is_a_name() {
        assert_token("u8x", Name);
        assert_token("iffy", Name);
        assert_token("matches", Name);
        assert_token("_if", Name);
    }

    #[test]
    fn identifiers_lex_as_names() {
        assert_token("hello", Name);
        assert_token("_private", Name);
        assert_token("CamelCase9", Name);
    }

    #[test]
    fn integers_and_floats_are_distinguished() {
        assert_token("42", NumberInteger);
        assert_token("0", NumberInteger);
        assert_token("3.14", NumberFloat);
        assert_token("3.", NumberFloat);
        assert_token(".14", NumberFloat);
        assert_token("1.5e10", NumberFloat);
        assert_token("2.5E-3", NumberFloat);
    }

    #[test]
    fn sign_glues_to_a_following_number() {
        assert_tokenizes("a+1", vec![("a", Name), ("+1", NumberInteger)]);
        assert_tokenizes("a-2.5", vec![("a", Name), ("-2.5", NumberFloat)]);
    }

    #[test]
    fn operators_lex_in_isolation() {
        for op in [
            ">>", "<<", "==", "!=", "^", "|", "&", "+", "++", "-", "--", "*", "/", "%",
        ] {
            let source = format!(" {op} ");
            let actual: Vec<(&str, Category)> = tokenize(&source)
                .map(|t| (t.text(&source), t.category))
                .collect();
            assert_eq!(
                vec![(" ", Text), (op, Operator), (" ", Text)],
                actual,
                "for operator {:?}",
                op
            );
        }
    }

    #[test]
    fn single_closing_angle_is_an_operator() {
        // The source grammar admits a lone `>` alongside `>>`.
        assert_token(">", Operator);
    }

    #[test]
    fn lone_opening_angle_equals_and_bang_are_plain_text() {
        // Only `<<`, `==` and `!=` are operators; the single-character
        // forms are not part of the grammar and pass through unclassified.
        assert_token("<", Text);
        assert_token("=", Text);
        assert_token("!", Text);
    }

    #[test]
    fn punctuation_characters_lex_individually() {
        for p in [",", ";", "{", "}", "(", ")", "[", "]", "."] {
            assert_token(p, Punctuation);
        }
    }

    #[test]
    fn double_quoted_string_with_escaped_quote_is_one_token() {
        assert_token(r#""a\"b""#, StringDouble);
    }

    #[test]
    fn single_quoted_string_lexes_whole() {
        assert_token(r"'c'", StringSingle);
        assert_token(r"'\\'", StringSingle);
    }

    #[test]
    fn string_may_span_lines() {
        assert_token("\"a\nb\"", StringDouble);
    }

    #[test]
    fn unterminated_string_degrades_to_plain_text() {
        assert_tokenizes("\"abc", vec![("\"", Text), ("abc", Name)]);
    }

    #[test]
    fn line_comment_includes_trailing_newline() {
        assert_token("// hello\n", CommentSingle);
        assert_tokenizes(
            "x // c\ny",
            vec![("x", Name), (" ", Text), ("// c\n", CommentSingle), ("y", Name)],
        );
    }

    #[test]
    fn line_comment_at_end_of_file_does_not_match() {
        // Without a trailing newline the comment rule cannot fire, so the
        // slashes degrade: the first is held back from the operator rule by
        // the comment-opener guard, the second matches as a division sign.
        assert_tokenizes(
            "//x",
            vec![("/", Text), ("/", Operator), ("x", Name)],
        );
    }

    #[test]
    fn block_comment_on_one_line_is_one_token() {
        assert_token("/* a */", CommentMultiline);
        assert_token("/**/", CommentMultiline);
    }

    #[test]
    fn block_comment_spanning_lines_degrades() {
        assert_tokenizes(
            "/*\n*/",
            vec![
                ("/", Text),
                ("*", Operator),
                ("\n", Text),
                ("*", Operator),
                ("/", Operator),
            ],
        );
    }

    #[test]
    fn unmatched_symbol_passes_through_one_character() {
        assert_tokenizes("$", vec![("$", Text)]);
        let token = tokenize("$").next().unwrap();
        assert_eq!(token.length(), 1);
    }

    #[test]
    fn whitespace_run_is_a_single_text_token() {
        assert_token(" \t\n  ", Text);
    }

    #[test]
    fn function_definition_lexes_end_to_end() {
        assert_tokenizes(
            "fn add(a, b) { ret a + b; }",
            vec![
                ("fn", Keyword),
                (" ", Text),
                ("add", Name),
                ("(", Punctuation),
                ("a", Name),
                (",", Punctuation),
                (" ", Text),
                ("b", Name),
                (")", Punctuation),
                (" ", Text),
                ("{", Punctuation),
                (" ", Text),
                ("ret", Keyword),
                (" ", Text),
                ("a", Name),
                (" ", Text),
                ("+", Operator),
                (" ", Text),
                ("b", Name),
                (";", Punctuation),
                (" ", Text),
                ("}", Punctuation),
            ],
        );
    }

    #[test]
    fn declaration_with_bare_assign_passes_equals_through() {
        // `=` on its own is not in the operator set.
        assert_tokenizes(
            "u8 x = 5;",
            vec![
                ("u8", KeywordType),
                (" ", Text),
                ("x", Name),
                (" ", Text),
                ("=", Text),
                (" ", Text),
                ("5", NumberInteger),
                (";", Punctuation),
            ],
        );
    }
}
