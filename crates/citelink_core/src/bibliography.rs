/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The case-insensitive, insertion-ordered bibliography.

use crate::reference::Entry;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Entries keyed by citation key.
///
/// Lookups trim surrounding whitespace and ignore case; iteration follows
/// insertion order. The bibliography is built once by a loader and then only
/// read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bibliography {
    entries: IndexMap<String, Entry>,
}

/// Two distinct keys that produce the same HTML anchor id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorCollision {
    pub anchor: String,
    pub first: String,
    pub second: String,
}

/// The HTML anchor id for a citation key: the key with all whitespace removed.
pub fn anchor_id(key: &str) -> String {
    key.chars().filter(|c| !c.is_whitespace()).collect()
}

fn lookup_key(key: &str) -> String {
    key.trim().to_lowercase()
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing (and returning) any entry whose key differs
    /// only in case or surrounding whitespace.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(lookup_key(&entry.key), entry)
    }

    /// Find an entry by key, ignoring case and surrounding whitespace.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(&lookup_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&lookup_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Keys that collapse to the same anchor id once whitespace is removed.
    ///
    /// Such keys would produce duplicate `id` attributes when cited from the
    /// same article, so callers report them as a data problem.
    pub fn anchor_collisions(&self) -> Vec<AnchorCollision> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut collisions = Vec::new();
        for entry in self.iter() {
            let anchor = anchor_id(&entry.key);
            match seen.get(anchor.as_str()) {
                Some(first) => collisions.push(AnchorCollision {
                    anchor: anchor.clone(),
                    first: first.to_string(),
                    second: entry.key.clone(),
                }),
                None => {
                    seen.insert(anchor, &entry.key);
                }
            }
        }
        collisions
    }
}

impl FromIterator<Entry> for Bibliography {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut bib = Self::new();
        for entry in iter {
            bib.insert(entry);
        }
        bib
    }
}

impl<'a> IntoIterator for &'a Bibliography {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bib() -> Bibliography {
        [
            Entry::new("ein relt", "book"),
            Entry::new("hawuian", "book"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let bib = bib();
        assert_eq!(bib.get("Ein Relt").map(|e| e.key.as_str()), Some("ein relt"));
        assert_eq!(bib.get("  HAWUIAN ").map(|e| e.key.as_str()), Some("hawuian"));
        assert!(bib.get("einrelt").is_none());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let keys: Vec<_> = bib().iter().map(|e| e.key.clone()).collect();
        assert_eq!(keys, vec!["ein relt", "hawuian"]);
    }

    #[test]
    fn test_insert_replaces_case_variant() {
        let mut bib = bib();
        let old = bib.insert(Entry::new("HAWUIAN", "misc"));
        assert_eq!(old.map(|e| e.entry_type), Some("book".to_string()));
        assert_eq!(bib.len(), 2);
    }

    #[test]
    fn test_anchor_id_strips_all_whitespace() {
        assert_eq!(anchor_id("ein relt"), "einrelt");
        assert_eq!(anchor_id(" a\tb\nc "), "abc");
    }

    #[test]
    fn test_anchor_collisions_reported() {
        let mut bib = bib();
        bib.insert(Entry::new("einrelt", "misc"));
        let collisions = bib.anchor_collisions();
        assert_eq!(
            collisions,
            vec![AnchorCollision {
                anchor: "einrelt".to_string(),
                first: "ein relt".to_string(),
                second: "einrelt".to_string(),
            }]
        );
    }
}
