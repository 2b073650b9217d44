//! Conformance predicates for identifier casing.
//!
//! Each [`NamingStyle`] resolves to a single anchored regex compiled once and
//! shared by reference across all classifications. Matching is whole-string:
//! a conforming substring inside a non-conforming name never counts.

use is_macro::Is;
use lazy_static::lazy_static;
use regex::Regex;

/// UpperCamelCase: one or more segments, each an uppercase letter, lowercase
/// letters, and an optional trailing digit run, with no separator.
const UPPER_CAMEL_FORMAT: &str = r"^([A-Z][a-z]*[0-9]*)+$";

/// lowerCamelCase: a lowercase first segment with an optional digit run,
/// then zero or more UpperCamel segments.
const LOWER_CAMEL_FORMAT: &str = r"^[a-z]+[0-9]*([A-Z][a-z]*[0-9]*)*$";

/// SCREAMING_SNAKE_CASE: all-uppercase segments joined by single underscores.
const SCREAMING_SNAKE_FORMAT: &str = r"^[A-Z]+(_[A-Z]+)*$";

lazy_static! {
    static ref UPPER_CAMEL: Regex = Regex::new(UPPER_CAMEL_FORMAT).unwrap();
    static ref LOWER_CAMEL: Regex = Regex::new(LOWER_CAMEL_FORMAT).unwrap();
    static ref SCREAMING_SNAKE: Regex = Regex::new(SCREAMING_SNAKE_FORMAT).unwrap();
}

/// A casing convention an identifier can be held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamingStyle {
    UpperCamel,
    LowerCamel,
    ScreamingSnake,
}

impl NamingStyle {
    /// Whether `name` conforms to this style.
    ///
    /// Total, pure, and case-sensitive. Anchored at both ends of the string.
    pub fn matches(self, name: &str) -> bool {
        self.pattern().is_match(name)
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::UpperCamel => &UPPER_CAMEL,
            Self::LowerCamel => &LOWER_CAMEL,
            Self::ScreamingSnake => &SCREAMING_SNAKE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_camel_accepts() {
        for name in ["Customer", "HttpServer2", "X", "ParseError", "Utf8Decoder"] {
            assert!(NamingStyle::UpperCamel.matches(name), "{name}");
        }
    }

    #[test]
    fn upper_camel_rejects() {
        for name in ["customer", "Foo_Bar", "Foo Bar", "9Lives", "_Foo"] {
            assert!(!NamingStyle::UpperCamel.matches(name), "{name}");
        }
    }

    // A segment is an uppercase letter plus zero or more lowercase letters,
    // so acronym runs decompose into single-letter segments and conform.
    #[test]
    fn acronym_runs_conform() {
        assert!(NamingStyle::UpperCamel.matches("HTTPServer"));
        assert!(NamingStyle::LowerCamel.matches("userID"));
    }

    #[test]
    fn lower_camel_accepts() {
        for name in ["userId", "totalCount3", "x", "retry2Budget", "toUtf8"] {
            assert!(NamingStyle::LowerCamel.matches(name), "{name}");
        }
    }

    #[test]
    fn lower_camel_rejects() {
        for name in ["UserId", "user_id", "_userId", "3users"] {
            assert!(!NamingStyle::LowerCamel.matches(name), "{name}");
        }
    }

    #[test]
    fn screaming_snake_accepts() {
        for name in ["MAX_RETRIES", "X", "HTTP_PORT", "A_B_C"] {
            assert!(NamingStyle::ScreamingSnake.matches(name), "{name}");
        }
    }

    #[test]
    fn screaming_snake_rejects() {
        for name in ["MAX__RETRIES", "Max_Retries", "MAX_", "_MAX", "MAX_1"] {
            assert!(!NamingStyle::ScreamingSnake.matches(name), "{name}");
        }
    }

    // Anchoring at both string ends is load-bearing: the predicates must not
    // accept a name just because a conforming run appears inside it.
    #[test]
    fn partial_matches_do_not_conform() {
        assert!(!NamingStyle::LowerCamel.matches("fooBAR123extra"));
        assert!(!NamingStyle::UpperCamel.matches("Customer!"));
        assert!(!NamingStyle::UpperCamel.matches("a Customer"));
        assert!(!NamingStyle::ScreamingSnake.matches("MAX_RETRIES please"));
    }

    #[test]
    fn empty_string_matches_nothing() {
        for style in [
            NamingStyle::UpperCamel,
            NamingStyle::LowerCamel,
            NamingStyle::ScreamingSnake,
        ] {
            assert!(!style.matches(""));
        }
    }
}
