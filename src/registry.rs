//! Maps public lexer names to their rule sets.
//!
//! The host that embeds this crate looks lexers up by name, mirroring how the
//! original distribution registered itself with its highlighting framework.
//! Both language names resolve to the same `root` rule set.
use thiserror::Error;

use crate::lexer::{RuleSet, ROOT};

/// The names the zx lexer is registered under.
pub const NAMES: &[&str] = &["zurox", "zx"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no lexer is registered under the name '{0}'")]
pub struct UnknownLexer(pub String);

/// Resolves a lexer name to its rule set.
pub fn ruleset_for(name: &str) -> Result<&'static RuleSet, UnknownLexer> {
    if NAMES.contains(&name) {
        Ok(&ROOT)
    } else {
        Err(UnknownLexer(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_language_names_resolve_to_the_root_ruleset() {
        assert_eq!(ruleset_for("zurox").unwrap().name, "root");
        assert_eq!(ruleset_for("zx").unwrap().name, "root");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = ruleset_for("python").unwrap_err();
        assert_eq!(err, UnknownLexer("python".to_string()));
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn resolved_ruleset_tokenizes() {
        let rules = ruleset_for("zx").unwrap();
        let source = "loop {}";
        let count = crate::lexer::tokenize_with(rules, source).count();
        assert_eq!(count, 4);
    }
}
