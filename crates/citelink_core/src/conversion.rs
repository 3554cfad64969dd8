/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conversion from `biblatex` entries.

use crate::reference::{Entry, Person};
use biblatex::{Chunk, Spanned};
use indexmap::IndexMap;

/// Fields that become person lists instead of plain strings.
const PERSON_FIELDS: &[&str] = &["author", "editor"];

fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) | Chunk::Math(s) => s.as_str(),
            _ => "",
        })
        .collect()
}

impl Entry {
    /// Build an entry from a parsed `biblatex` entry.
    pub fn from_biblatex(entry: &biblatex::Entry) -> Self {
        let fields: IndexMap<String, String> = entry
            .fields
            .iter()
            .filter(|(name, _)| !PERSON_FIELDS.contains(&name.to_lowercase().as_str()))
            .map(|(name, chunks)| (name.to_lowercase(), chunks_to_string(chunks)))
            .collect();

        let authors = entry
            .author()
            .map(|persons| persons.iter().map(Person::from_biblatex).collect())
            .unwrap_or_default();
        let editors = entry
            .editors()
            .map(|groups| {
                groups
                    .iter()
                    .flat_map(|(persons, _)| persons.iter().map(Person::from_biblatex))
                    .collect()
            })
            .unwrap_or_default();

        Entry {
            key: entry.key.clone(),
            entry_type: entry.entry_type.to_string().to_lowercase(),
            authors,
            editors,
            fields,
        }
    }
}

impl Person {
    fn from_biblatex(person: &biblatex::Person) -> Self {
        let mut given = person.given_name.split_whitespace();
        Person {
            first: given.next().unwrap_or_default().to_string(),
            middle: given.collect::<Vec<_>>().join(" "),
            prelast: person.prefix.clone(),
            last: person.name.clone(),
            lineage: person.suffix.clone(),
        }
    }
}
