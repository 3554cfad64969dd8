/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Label generation.
//!
//! Alpha labels look like `Ein11`, `WF71` or `VSP+17`:
//!
//! - 1 author: up to three characters of the "von Last" name + year
//! - 2 to 4 authors: first character of each name + year
//! - 5 or more authors: first characters of three names + `+` + year
//!
//! Labels that collide within one formatted set get `a`, `b`, ... suffixes.

use citelink_core::{Entry, LabelStyle};
use std::collections::HashMap;

const SINGLE_AUTHOR_CHARS: usize = 3;
const ET_AL_MIN: usize = 5;
const ET_AL_MARKER: &str = "+";

/// Assign one label per entry, in the given order.
pub fn assign_labels(entries: &[&Entry], style: LabelStyle) -> Vec<String> {
    match style {
        LabelStyle::Number => (1..=entries.len()).map(|n| n.to_string()).collect(),
        LabelStyle::Alpha => {
            disambiguate(entries.iter().map(|entry| alpha_label(entry)).collect())
        }
    }
}

/// Generate a base alpha label (without disambiguation suffix).
pub fn alpha_label(entry: &Entry) -> String {
    format!("{}{}", name_part(entry), year_part(entry))
}

fn name_part(entry: &Entry) -> String {
    let persons = entry.primary_persons();
    match persons.len() {
        // No author/editor: use the start of the key
        0 => leading_chars(&entry.key, SINGLE_AUTHOR_CHARS),
        1 => leading_chars(&persons[0].von_last(), SINGLE_AUTHOR_CHARS),
        n if n < ET_AL_MIN => persons
            .iter()
            .map(|p| leading_chars(&p.von_last(), 1))
            .collect(),
        _ => {
            let initials: String = persons
                .iter()
                .take(3)
                .map(|p| leading_chars(&p.von_last(), 1))
                .collect();
            format!("{}{}", initials, ET_AL_MARKER)
        }
    }
}

fn leading_chars(s: &str, n: usize) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).take(n).collect()
}

fn year_part(entry: &Entry) -> String {
    entry
        .year()
        .map(|y| {
            let digits: String = y.chars().filter(char::is_ascii_digit).collect();
            if digits.len() >= 2 {
                digits[digits.len() - 2..].to_string()
            } else {
                digits
            }
        })
        .unwrap_or_default()
}

/// Append `a`, `b`, ... to every label that occurs more than once.
fn disambiguate(labels: Vec<String>) -> Vec<String> {
    let mut totals: HashMap<String, usize> = HashMap::new();
    for label in &labels {
        *totals.entry(label.clone()).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    labels
        .into_iter()
        .map(|label| {
            if totals[&label] < 2 {
                return label;
            }
            let index = seen.entry(label.clone()).or_default();
            let suffixed = format!("{}{}", label, suffix(*index));
            *index += 1;
            suffixed
        })
        .collect()
}

/// `0 -> a`, `25 -> z`, `26 -> aa`.
fn suffix(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'a' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}
