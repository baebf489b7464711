//! Path expression normalizer.
//!
//! Expressions are not validated; they are normalized. Bracket segments are
//! rewritten to the same internal delimiter as `->`, the result is trimmed
//! and split, and whatever comes out is the segment list. Garbage input
//! yields segments that fail to resolve at traversal time instead of a
//! parse error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::Path;

/// Internal segment delimiter both access notations normalize to.
const DELIMITER: &str = "::";

/// `[key]` or `['key']` - bracket content is word characters or digits,
/// optionally single-quoted.
static BRACKET_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\['?(\w+)'?\]").expect("bracket segment pattern is valid"));

/// Parses a path expression into its ordered segment list.
pub fn parse(expr: &str) -> Path {
    // Arrow notation first, then bracket notation, onto one delimiter.
    let normalized = expr.replace("->", DELIMITER);
    let normalized = BRACKET_SEGMENT.replace_all(&normalized, "::$1");

    let trimmed = normalized.trim_matches(':');
    if trimmed.is_empty() {
        return Path::default();
    }

    trimmed.split(DELIMITER).map(str::to_string).collect()
}
