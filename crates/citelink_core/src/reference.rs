/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Raw bibliography entries.
//!
//! An [`Entry`] is the loader's view of one BibTeX-like record: a key, a
//! lower-case type, plain string fields and the author/editor lists. Nothing
//! here knows how an entry is rendered; that is the formatter's job.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single bibliography record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Entry {
    /// The citation key as written in the source.
    pub key: String,
    /// Lower-case entry type, e.g. `book` or `article`.
    #[serde(rename = "type", default = "default_entry_type")]
    pub entry_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<Person>,
    /// Remaining fields keyed by lower-case name.
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_fields"
    )]
    pub fields: IndexMap<String, String>,
}

fn default_entry_type() -> String {
    "misc".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

fn deserialize_fields<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, StringOrNumber>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                StringOrNumber::String(s) => s,
                StringOrNumber::Number(n) => n.to_string(),
            };
            (name.to_lowercase(), value)
        })
        .collect())
}

impl Entry {
    /// Create an entry with no fields or persons.
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into().to_lowercase(),
            ..Default::default()
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_lowercase(), value.into());
        self
    }

    /// Builder-style author setter.
    pub fn with_author(mut self, person: Person) -> Self {
        self.authors.push(person);
        self
    }

    /// Look up a field, ignoring empty values.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    /// The publication year, taken from `year` or the leading part of `date`.
    pub fn year(&self) -> Option<&str> {
        self.field("year").or_else(|| {
            self.field("date")
                .map(|d| d.split(['-', '/']).next().unwrap_or(d))
                .filter(|y| !y.is_empty())
        })
    }

    /// Authors if present, otherwise editors.
    pub fn primary_persons(&self) -> &[Person] {
        if self.authors.is_empty() {
            &self.editors
        } else {
            &self.authors
        }
    }
}

/// A personal name split into BibTeX name parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "PersonRepr")]
pub struct Person {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub middle: String,
    /// The "von" part, e.g. `van der`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prelast: String,
    pub last: String,
    /// The "Jr." part.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lineage: String,
}

/// Persons may be written either as a single name string or as parts.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersonRepr {
    Name(String),
    Parts {
        #[serde(default)]
        first: String,
        #[serde(default)]
        middle: String,
        #[serde(default)]
        prelast: String,
        last: String,
        #[serde(default)]
        lineage: String,
    },
}

impl From<PersonRepr> for Person {
    fn from(repr: PersonRepr) -> Self {
        match repr {
            PersonRepr::Name(name) => Person::parse(&name),
            PersonRepr::Parts {
                first,
                middle,
                prelast,
                last,
                lineage,
            } => Person {
                first,
                middle,
                prelast,
                last,
                lineage,
            },
        }
    }
}

impl Person {
    pub fn new(first: &str, last: &str) -> Self {
        let mut given = first.split_whitespace();
        Self {
            first: given.next().unwrap_or_default().to_string(),
            middle: given.collect::<Vec<_>>().join(" "),
            last: last.to_string(),
            ..Default::default()
        }
    }

    /// Parse a name in one of the BibTeX forms `First von Last`,
    /// `von Last, First` or `von Last, Jr, First`.
    pub fn parse(name: &str) -> Self {
        let parts: Vec<&str> = name.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [von_last] => {
                let words: Vec<&str> = von_last.split_whitespace().collect();
                let Some((last, rest)) = words.split_last() else {
                    return Self::default();
                };
                let von_start = rest.iter().position(|w| starts_lowercase(w));
                let (given, prelast) = match von_start {
                    Some(idx) => rest.split_at(idx),
                    None => (rest, &[][..]),
                };
                let mut person = Self::new(&given.join(" "), last);
                person.prelast = prelast.join(" ");
                person
            }
            [von_last, first] => {
                let mut person = Self::from_von_last(von_last);
                person.set_given(first);
                person
            }
            [von_last, lineage, first, ..] => {
                let mut person = Self::from_von_last(von_last);
                person.lineage = lineage.to_string();
                person.set_given(first);
                person
            }
            [] => Self::default(),
        }
    }

    fn from_von_last(von_last: &str) -> Self {
        let words: Vec<&str> = von_last.split_whitespace().collect();
        let split = words
            .iter()
            .rposition(|w| starts_lowercase(w))
            .map(|idx| idx + 1)
            .filter(|&idx| idx < words.len())
            .unwrap_or(0);
        Self {
            prelast: words[..split].join(" "),
            last: words[split..].join(" "),
            ..Default::default()
        }
    }

    fn set_given(&mut self, given: &str) {
        let mut words = given.split_whitespace();
        self.first = words.next().unwrap_or_default().to_string();
        self.middle = words.collect::<Vec<_>>().join(" ");
    }

    /// The "von Last" part used for labels and sort keys.
    pub fn von_last(&self) -> String {
        join_nonempty(&[&self.prelast, &self.last], " ")
    }

    /// First and middle names joined.
    pub fn given(&self) -> String {
        join_nonempty(&[&self.first, &self.middle], " ")
    }
}

fn starts_lowercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_lowercase)
}

fn join_nonempty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}
