/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation aggregation.
//!
//! Sweeps an article once, left to right, and folds repeated citations of the
//! same reference into a single [`CitationRecord`] whose position is fixed by
//! the first citation and whose count grows with each further one.

use crate::citation::CitationRecord;
use crate::error::ProcessorError;
use crate::scanner;
use crate::style::{EntryFormatter, FormattedEntry};
use citelink_core::{Bibliography, Entry};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Everything learned from scanning one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Records in order of first citation.
    pub records: Vec<CitationRecord>,
    /// Keys with no bibliography entry, one per occurrence, in text order.
    pub unresolved: Vec<String>,
}

/// Resolves the markers of an article against a bibliography.
pub struct Aggregator<'a, F: ?Sized> {
    bibliography: &'a Bibliography,
    formatter: &'a F,
}

impl<'a, F: EntryFormatter + ?Sized> Aggregator<'a, F> {
    pub fn new(bibliography: &'a Bibliography, formatter: &'a F) -> Self {
        Self {
            bibliography,
            formatter,
        }
    }

    /// Scan `content` and build its citation records.
    ///
    /// Escaped markers are skipped silently. Each unresolved occurrence logs
    /// one warning and is otherwise ignored. The formatter is called once,
    /// with every distinct resolved entry.
    pub fn aggregate(&self, content: &str) -> Result<Aggregation, ProcessorError> {
        // Keyed by the bibliography's spelling, so case variants of one key
        // share a record.
        let mut counts: IndexMap<&str, (&Entry, usize)> = IndexMap::new();
        let mut unresolved = Vec::new();

        for marker in scanner::scan(content).filter(|m| !m.is_escaped()) {
            match self.bibliography.get(marker.key) {
                Some(entry) => {
                    counts.entry(entry.key.as_str()).or_insert((entry, 0)).1 += 1;
                }
                None => {
                    warn!("No BibTeX entry found for key \"{}\"", marker.key);
                    unresolved.push(marker.key.to_string());
                }
            }
        }

        if counts.is_empty() {
            return Ok(Aggregation {
                records: Vec::new(),
                unresolved,
            });
        }

        let entries: Vec<&Entry> = counts.values().map(|(entry, _)| *entry).collect();
        let mut formatted: HashMap<String, FormattedEntry> = self
            .formatter
            .format_entries(&entries)?
            .into_iter()
            .map(|f| (f.key.clone(), f))
            .collect();

        let records = counts
            .iter()
            .filter_map(|(key, (_, count))| match formatted.remove(*key) {
                Some(entry) => Some(CitationRecord::with_count(entry, *count)),
                None => {
                    debug!(key = *key, "formatter returned no entry for cited key");
                    None
                }
            })
            .collect();

        Ok(Aggregation {
            records,
            unresolved,
        })
    }
}

/// Scan an article and return its citation records in first-citation order.
pub fn find_citations<F: EntryFormatter + ?Sized>(
    content: &str,
    bibliography: &Bibliography,
    formatter: &F,
) -> Result<Vec<CitationRecord>, ProcessorError> {
    Aggregator::new(bibliography, formatter)
        .aggregate(content)
        .map(|aggregation| aggregation.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use citelink_core::Person;
    use std::cell::Cell;

    fn bib() -> Bibliography {
        [
            Entry::new("abc", "misc").with_author(Person::new("", "Einstein")),
            Entry::new("abcd", "misc").with_author(Person::new("", "Einstein")),
        ]
        .into_iter()
        .collect()
    }

    /// Counts calls and echoes the key as label.
    struct CountingFormatter {
        calls: Cell<usize>,
        sizes: Cell<usize>,
    }

    impl EntryFormatter for CountingFormatter {
        fn format_entries(
            &self,
            entries: &[&Entry],
        ) -> Result<Vec<FormattedEntry>, ProcessorError> {
            self.calls.set(self.calls.get() + 1);
            self.sizes.set(entries.len());
            Ok(entries
                .iter()
                .rev()
                .map(|e| FormattedEntry {
                    key: e.key.clone(),
                    label: e.key.to_uppercase(),
                    text: String::new(),
                })
                .collect())
        }
    }

    #[test]
    fn test_counts_and_first_appearance_order() {
        let content = "[@abcd] x [@abc] y [@ABC] z [@abc]";
        let records = find_citations(content, &bib(), &Style::default()).unwrap();
        let summary: Vec<_> = records.iter().map(|r| (r.cite_key(), r.count)).collect();
        assert_eq!(summary, vec![("abcd", 1), ("abc", 3)]);
    }

    #[test]
    fn test_formatter_called_once_with_distinct_entries() {
        let formatter = CountingFormatter {
            calls: Cell::new(0),
            sizes: Cell::new(0),
        };
        let content = "[@abc][@abc][@abcd][@abc]";
        let records = find_citations(content, &bib(), &formatter).unwrap();
        assert_eq!(formatter.calls.get(), 1);
        assert_eq!(formatter.sizes.get(), 2);
        // Reversed formatter output is matched back into text order.
        assert_eq!(records[0].rendered_label(), "ABC");
        assert_eq!(records[1].rendered_label(), "ABCD");
    }

    #[test]
    fn test_unresolved_and_escaped_markers() {
        let content = "[@missing] [@@abc] [@ missing ]";
        let aggregation = Aggregator::new(&bib(), &Style::default())
            .aggregate(content)
            .unwrap();
        assert!(aggregation.records.is_empty());
        assert_eq!(aggregation.unresolved, vec!["missing", "missing"]);
    }

    #[test]
    fn test_no_markers_skips_formatter() {
        let formatter = CountingFormatter {
            calls: Cell::new(0),
            sizes: Cell::new(0),
        };
        let records = find_citations("plain text", &bib(), &formatter).unwrap();
        assert!(records.is_empty());
        assert_eq!(formatter.calls.get(), 0);
    }
}
