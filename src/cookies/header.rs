//! Cookie header string parsing.

use std::collections::HashMap;

/// Mapping from cookie name to raw cookie value.
///
/// Names are unique and whitespace-trimmed; values are kept verbatim.
pub type CookieMap = HashMap<String, String>;

/// Why a header segment did not become a name/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The segment contains no `=` separator.
    MissingSeparator,
    /// The name before the `=` is empty after trimming.
    EmptyName,
}

/// A header segment that did not parse, kept verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSegment {
    pub raw: String,
    pub reason: SkipReason,
}

/// Result of parsing one cookie header string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub cookies: CookieMap,
    pub skipped: Vec<SkippedSegment>,
}

/// Parse a semicolon-delimited cookie header into a name/value map.
///
/// Per segment, the first `=` splits name from value: the name is trimmed of
/// surrounding whitespace and must be non-empty; the value runs untrimmed to
/// the end of the segment, so it may be empty or contain further `=`
/// characters. A later duplicate name overwrites an earlier one.
///
/// Malformed segments never fail the parse: anything without a separator or
/// with an empty name lands in [`ParsedHeader::skipped`] with its reason,
/// and whitespace-only segments (e.g. from a trailing `;`) are dropped
/// without a record.
pub fn parse_cookie_header(header: &str) -> ParsedHeader {
    let mut parsed = ParsedHeader::default();

    for segment in header.split(';') {
        if segment.trim().is_empty() {
            continue;
        }

        match segment.split_once('=') {
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() {
                    parsed.skipped.push(SkippedSegment {
                        raw: segment.to_string(),
                        reason: SkipReason::EmptyName,
                    });
                } else {
                    parsed.cookies.insert(name.to_string(), value.to_string());
                }
            }
            None => {
                parsed.skipped.push(SkippedSegment {
                    raw: segment.to_string(),
                    reason: SkipReason::MissingSeparator,
                });
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pairs() {
        let parsed = parse_cookie_header("a=1; b=2");
        assert_eq!(parsed.cookies.len(), 2);
        assert_eq!(parsed.cookies["a"], "1");
        assert_eq!(parsed.cookies["b"], "2");
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_name_trimmed_value_not() {
        let parsed = parse_cookie_header("a= 1;b=2");
        assert_eq!(parsed.cookies["a"], " 1");
        assert_eq!(parsed.cookies["b"], "2");
    }

    #[test]
    fn test_duplicate_last_wins() {
        let parsed = parse_cookie_header("a=1; a=2");
        assert_eq!(parsed.cookies.len(), 1);
        assert_eq!(parsed.cookies["a"], "2");
    }

    #[test]
    fn test_only_first_equals_splits() {
        let parsed = parse_cookie_header("a=1=2");
        assert_eq!(parsed.cookies["a"], "1=2");
    }

    #[test]
    fn test_empty_value() {
        let parsed = parse_cookie_header("a=");
        assert_eq!(parsed.cookies["a"], "");
    }

    #[test]
    fn test_missing_separator_is_skipped() {
        let parsed = parse_cookie_header("a=1; junk; b=2");
        assert_eq!(parsed.cookies.len(), 2);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].raw, " junk");
        assert_eq!(parsed.skipped[0].reason, SkipReason::MissingSeparator);
    }

    #[test]
    fn test_empty_name_is_skipped() {
        let parsed = parse_cookie_header("=orphan; a=1");
        assert_eq!(parsed.cookies.len(), 1);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].reason, SkipReason::EmptyName);
    }

    #[test]
    fn test_trailing_semicolon_ignored() {
        let parsed = parse_cookie_header("a=1; ");
        assert_eq!(parsed.cookies.len(), 1);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_empty_header() {
        let parsed = parse_cookie_header("");
        assert!(parsed.cookies.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
