/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation marker scanning.
//!
//! A marker is `[@key]`. Doubling the at sign (`[@@key]`) escapes it: the
//! marker is recognized but is not a citation, and renders as the literal
//! `[@key]`. Article content is usually rendered HTML, where Markdown
//! converters emit `@` as the entity `&#64;`, so both spellings are accepted
//! in either position.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

const MARKER_PATTERN: &str = r"\[(?P<escape>@|&#64;)?(?:@|&#64;)\s*(?P<key>[^\]\s][^\]\r\n]*?)\s*\]";

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MARKER_PATTERN).expect("marker pattern is valid"));

static ANCHORED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{MARKER_PATTERN})")).expect("marker pattern is valid")
});

/// One marker found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Byte range of the whole marker, brackets included.
    pub span: Range<usize>,
    /// The key with surrounding whitespace removed.
    pub key: &'a str,
    /// The escape sequence (`@` or `&#64;`) when the marker is escaped.
    pub escape: Option<&'a str>,
}

impl<'a> Marker<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            span: whole.range(),
            key: caps.name("key")?.as_str(),
            escape: caps.name("escape").map(|m| m.as_str()),
        })
    }

    pub fn is_escaped(&self) -> bool {
        self.escape.is_some()
    }

    /// The literal text an escaped marker stands for, e.g. `[@key]`.
    pub fn literal(&self) -> String {
        format!("[{}{}]", self.escape.unwrap_or("@"), self.key)
    }
}

/// Match a marker at the very start of `window`.
///
/// Returns `None` when the window does not begin with a marker; text after
/// the marker is ignored.
pub fn match_marker(window: &str) -> Option<Marker<'_>> {
    ANCHORED_MARKER
        .captures(window)
        .and_then(|caps| Marker::from_captures(&caps))
}

/// Find every marker in `text`, left to right, escaped ones included.
pub fn scan(text: &str) -> impl Iterator<Item = Marker<'_>> {
    MARKER
        .captures_iter(text)
        .filter_map(|caps| Marker::from_captures(&caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_plain_marker() {
        let m = match_marker("[&#64;Bai2011] and more").unwrap();
        assert_eq!(m.key, "Bai2011");
        assert_eq!(m.escape, None);
        assert_eq!(m.span, 0..14);
    }

    #[test]
    fn test_match_trims_key_whitespace() {
        let m = match_marker("[&#64;  Bai2011 ]").unwrap();
        assert_eq!(m.key, "Bai2011");
        let m = match_marker("[@ ein relt]").unwrap();
        assert_eq!(m.key, "ein relt");
    }

    #[test]
    fn test_match_escaped_marker() {
        let m = match_marker("[&#64;&#64;Bai2011]").unwrap();
        assert_eq!(m.escape, Some("&#64;"));
        assert_eq!(m.key, "Bai2011");
        assert!(m.is_escaped());
        assert_eq!(m.literal(), "[&#64;Bai2011]");

        let m = match_marker("[@@user]").unwrap();
        assert_eq!(m.literal(), "[@user]");
    }

    #[test]
    fn test_match_is_anchored() {
        assert!(match_marker("see [@abc]").is_none());
        assert!(match_marker(" [@abc]").is_none());
    }

    #[test]
    fn test_malformed_markers_do_not_match() {
        assert!(match_marker("[abc]").is_none());
        assert!(match_marker("[@]").is_none());
        assert!(match_marker("[@   ]").is_none());
        assert!(match_marker("[@abc\ndef]").is_none());
        assert!(match_marker("[@abc").is_none());
    }

    #[test]
    fn test_scan_finds_all_in_order() {
        let text = "a [@one] b [@@two] c [&#64;three]\n[@one]";
        let found: Vec<_> = scan(text).map(|m| (m.key, m.is_escaped())).collect();
        assert_eq!(
            found,
            vec![("one", false), ("two", true), ("three", false), ("one", false)]
        );
    }

    #[test]
    fn test_scan_spans_point_at_markers() {
        let text = "x [@k] y";
        let m = scan(text).next().unwrap();
        assert_eq!(&text[m.span.clone()], "[@k]");
    }
}
