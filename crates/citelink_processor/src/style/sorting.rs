/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use citelink_core::{Entry, SortingStyle};
use std::cmp::Ordering;

pub struct Sorter {
    style: SortingStyle,
}

impl Sorter {
    pub fn new(style: SortingStyle) -> Self {
        Self { style }
    }

    /// Sort entries according to the configured sorting style.
    ///
    /// The sort is stable, so entries with equal keys keep their input order.
    pub fn sort_entries<'b>(&self, entries: &[&'b Entry]) -> Vec<&'b Entry> {
        let mut sorted = entries.to_vec();
        match self.style {
            SortingStyle::None => {}
            SortingStyle::AuthorYearTitle => sorted.sort_by(author_year_title),
        }
        sorted
    }
}

fn author_year_title(a: &&Entry, b: &&Entry) -> Ordering {
    author_key(a)
        .cmp(&author_key(b))
        .then_with(|| year_key(a).cmp(&year_key(b)))
        .then_with(|| title_key(a).cmp(&title_key(b)))
}

/// Lower-cased "von Last First" of every author (or editor), falling back to
/// the key when the entry has no persons.
fn author_key(entry: &Entry) -> String {
    let persons = entry.primary_persons();
    if persons.is_empty() {
        return entry.key.to_lowercase();
    }
    persons
        .iter()
        .map(|p| format!("{} {}", p.von_last(), p.given()).trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("   ")
}

fn year_key(entry: &Entry) -> i32 {
    entry
        .year()
        .and_then(|y| y.parse::<i32>().ok())
        .unwrap_or(0)
}

fn title_key(entry: &Entry) -> String {
    entry.title().unwrap_or_default().to_lowercase()
}
