//! Parsing of alternate path strings such as `key1[*0].key\.2`

use crate::errors::MatchError;
use crate::path::types::{ParsedPath, PathSegment};
use crate::MatchResult;

/// Parse an alternate path into segments
///
/// Object keys are separated by `.`; `\.`, `\[`, `\]` and `\\` put the literal
/// character into a key. Array accesses follow a key (or stand alone) as
/// `[N]`, `[*N]`, `[N*]` or `[*]`.
///
/// # Examples
/// ```
/// # use jsonmatch_core::path::{parse_path, PathSegment};
/// let path = parse_path("key1[*0].key2").unwrap();
/// assert_eq!(path.segments, vec![
///     PathSegment::Key("key1".to_string()),
///     PathSegment::Wildcard { index: 0, star_first: true },
///     PathSegment::Key("key2".to_string()),
/// ]);
/// ```
pub fn parse_path(path: &str) -> MatchResult<ParsedPath> {
    let mut segments = Vec::new();

    for component in split_components(path) {
        parse_component(path, &component, &mut segments)?;
    }

    Ok(ParsedPath {
        raw: path.to_string(),
        segments,
    })
}

/// Escape a literal object key so it can be embedded in an alternate path
///
/// # Examples
/// ```
/// # use jsonmatch_core::path::escape_key;
/// assert_eq!(escape_key("k.1.2.3"), r"k\.1\.2\.3");
/// assert_eq!(escape_key("a[0]"), r"a\[0\]");
/// ```
pub fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        if matches!(c, '.' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Split on unescaped dots, keeping escape sequences intact for the
/// component parser.
fn split_components(path: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '.' => components.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    components.push(current);
    components
}

fn parse_component(
    raw: &str,
    component: &str,
    segments: &mut Vec<PathSegment>,
) -> MatchResult<()> {
    let mut key = String::new();
    let mut accesses = Vec::new();
    let mut bracket: Option<String> = None;
    let mut chars = component.chars();

    while let Some(c) = chars.next() {
        if let Some(content) = bracket.as_mut() {
            match c {
                ']' => {
                    accesses.push(parse_index_token(raw, content)?);
                    bracket = None;
                }
                '[' => return Err(MatchError::malformed(raw, "nested `[` in array access")),
                _ => content.push(c),
            }
            continue;
        }

        match c {
            '[' => bracket = Some(String::new()),
            ']' => return Err(MatchError::malformed(raw, "unmatched `]`")),
            _ if !accesses.is_empty() => {
                return Err(MatchError::malformed(
                    raw,
                    format!("unexpected `{c}` after array access"),
                ))
            }
            '\\' => match chars.next() {
                Some(next @ ('.' | '[' | ']' | '\\')) => key.push(next),
                Some(other) => {
                    key.push('\\');
                    key.push(other);
                }
                None => key.push('\\'),
            },
            _ => key.push(c),
        }
    }

    if bracket.is_some() {
        return Err(MatchError::malformed(raw, "unclosed `[`"));
    }

    // "[0]" on its own addresses the enclosing array, not a key named ""
    if !key.is_empty() || accesses.is_empty() {
        segments.push(PathSegment::Key(key));
    }
    segments.extend(accesses);
    Ok(())
}

fn parse_index_token(raw: &str, content: &str) -> MatchResult<PathSegment> {
    if content == "*" {
        return Ok(PathSegment::AnyIndex);
    }

    let (digits, star_first) = if let Some(rest) = content.strip_prefix('*') {
        (rest, Some(true))
    } else if let Some(rest) = content.strip_suffix('*') {
        (rest, Some(false))
    } else {
        (content, None)
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MatchError::malformed(
            raw,
            format!("invalid array access `[{content}]`"),
        ));
    }

    let index = digits
        .parse::<usize>()
        .map_err(|_| MatchError::malformed(raw, format!("index `{digits}` is too large")))?;

    Ok(match star_first {
        Some(star_first) => PathSegment::Wildcard { index, star_first },
        None => PathSegment::Index(index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> PathSegment {
        PathSegment::Key(name.to_string())
    }

    fn segments(path: &str) -> Vec<PathSegment> {
        parse_path(path).unwrap().segments
    }

    // === Object Keys ===

    #[test]
    fn test_parse_nested_keys() {
        assert_eq!(segments("key1.key2"), vec![key("key1"), key("key2")]);
    }

    #[test]
    fn test_parse_empty_path_is_empty_key() {
        assert_eq!(segments(""), vec![key("")]);
    }

    #[test]
    fn test_parse_trailing_dot() {
        assert_eq!(segments("key1."), vec![key("key1"), key("")]);
        assert_eq!(segments("."), vec![key(""), key("")]);
    }

    #[test]
    fn test_parse_escaped_dots() {
        assert_eq!(segments(r"key\.with\.dots"), vec![key("key.with.dots")]);
        assert_eq!(segments(r"k\.1\.2\.3"), vec![key("k.1.2.3")]);
        assert_eq!(segments(r"a\.b.c"), vec![key("a.b"), key("c")]);
    }

    #[test]
    fn test_parse_escaped_brackets() {
        assert_eq!(segments(r"key\[0\]"), vec![key("key[0]")]);
        assert_eq!(
            segments(r"key\[0\][1]"),
            vec![key("key[0]"), PathSegment::Index(1)]
        );
    }

    #[test]
    fn test_parse_backslashes() {
        assert_eq!(segments(r"a\\b"), vec![key(r"a\b")]);
        assert_eq!(segments(r"a\\.b"), vec![key(r"a\"), key("b")]);
        assert_eq!(segments(r"a\b"), vec![key(r"a\b")]);
        assert_eq!(segments("a\\"), vec![key("a\\")]);
    }

    #[test]
    fn test_parse_unicode_key() {
        assert_eq!(segments("ключ.値"), vec![key("ключ"), key("値")]);
    }

    // === Array Accesses ===

    #[test]
    fn test_parse_fixed_indexes() {
        assert_eq!(segments("[0]"), vec![PathSegment::Index(0)]);
        assert_eq!(segments("[28]"), vec![PathSegment::Index(28)]);
        assert_eq!(
            segments("key[0][1]"),
            vec![key("key"), PathSegment::Index(0), PathSegment::Index(1)]
        );
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(
            segments("[*0]"),
            vec![PathSegment::Wildcard {
                index: 0,
                star_first: true
            }]
        );
        assert_eq!(
            segments("[12*]"),
            vec![PathSegment::Wildcard {
                index: 12,
                star_first: false
            }]
        );
        assert_eq!(segments("[*]"), vec![PathSegment::AnyIndex]);
    }

    #[test]
    fn test_parse_chained_path() {
        assert_eq!(
            segments("key1[0].key2[*]"),
            vec![
                key("key1"),
                PathSegment::Index(0),
                key("key2"),
                PathSegment::AnyIndex
            ]
        );
    }

    #[test]
    fn test_parse_standalone_access_component() {
        assert_eq!(segments("key1.[0]"), segments("key1[0]"));
        assert_eq!(
            segments("[0].key"),
            vec![PathSegment::Index(0), key("key")]
        );
    }

    #[test]
    fn test_parse_keeps_raw() {
        assert_eq!(parse_path("a[*1]").unwrap().raw, "a[*1]");
    }

    // === Malformed Paths ===

    #[test]
    fn test_parse_unclosed_bracket() {
        assert!(matches!(
            parse_path("key[0"),
            Err(MatchError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_parse_unmatched_close_bracket() {
        assert!(matches!(
            parse_path("key]"),
            Err(MatchError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_parse_nested_brackets() {
        assert!(matches!(
            parse_path("key[[0]]"),
            Err(MatchError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_parse_text_after_access() {
        assert!(matches!(
            parse_path("key[0]abc"),
            Err(MatchError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_index_content() {
        for path in ["[]", "[a]", "[-1]", "[*0*]", "[**]", "[ 1]", "[1.5]"] {
            assert!(
                matches!(parse_path(path), Err(MatchError::MalformedPath { .. })),
                "{path} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_index_overflow() {
        let err = parse_path("[99999999999999999999999]").unwrap_err();
        assert_eq!(
            err,
            MatchError::malformed(
                "[99999999999999999999999]",
                "index `99999999999999999999999` is too large"
            )
        );
    }

    // === Escaping ===

    #[test]
    fn test_escape_key_round_trip() {
        for raw in ["k.1.2.3", "a[0]", r"back\slash", "", "plain", "]["] {
            let escaped = escape_key(raw);
            assert_eq!(segments(&escaped), vec![key(raw)], "round trip of {raw:?}");
        }
    }
}
