/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-article citation records.

use crate::style::FormattedEntry;
use serde::{Serialize, Serializer};

/// One formatted reference cited by an article, with its occurrence count.
///
/// Two records are equal when their label, text and key are equal; the count
/// only says how many times the reference was cited.
#[derive(Debug, Clone)]
pub struct CitationRecord {
    entry: FormattedEntry,
    pub count: usize,
}

impl CitationRecord {
    pub fn new(entry: FormattedEntry) -> Self {
        Self::with_count(entry, 1)
    }

    pub fn with_count(entry: FormattedEntry, count: usize) -> Self {
        Self { entry, count }
    }

    pub fn formatted_entry(&self) -> &FormattedEntry {
        &self.entry
    }

    /// The key as known to the formatter.
    pub fn cite_key(&self) -> &str {
        &self.entry.key
    }

    /// The HTML anchor id: the key with all whitespace removed.
    pub fn ref_id(&self) -> String {
        citelink_core::anchor_id(&self.entry.key)
    }

    pub fn rendered_label(&self) -> &str {
        &self.entry.label
    }

    pub fn rendered_entry(&self) -> &str {
        &self.entry.text
    }
}

impl PartialEq for CitationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.rendered_label() == other.rendered_label()
            && self.rendered_entry() == other.rendered_entry()
            && self.cite_key() == other.cite_key()
    }
}

impl Eq for CitationRecord {}

impl Serialize for CitationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("CitationRecord", 5)?;
        s.serialize_field("key", self.cite_key())?;
        s.serialize_field("ref-id", &self.ref_id())?;
        s.serialize_field("label", self.rendered_label())?;
        s.serialize_field("count", &self.count)?;
        s.serialize_field("text", self.rendered_entry())?;
        s.end()
    }
}
