/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Entry text templates.
//!
//! Each entry renders as newline-separated sentences of HTML. Field values
//! are escaped; missing parts are dropped together with their punctuation.

use super::names::format_names;
use crate::error::ProcessorError;
use citelink_core::{Entry, NameStyle};
use html_escape::encode_text;

/// Render the bibliographic text of one entry.
pub fn render_entry(entry: &Entry, name_style: NameStyle) -> Result<String, ProcessorError> {
    if requires_title(entry) && entry.title().is_none() {
        return Err(ProcessorError::MissingField {
            key: entry.key.clone(),
            field: "title",
        });
    }

    let field = |name: &str| entry.field(name).map(|v| encode_text(v).into_owned());
    let emph = |name: &str| field(name).map(|v| format!("<em>{}</em>", v));

    let mut sentences = vec![persons(entry, name_style)];
    match entry.entry_type.as_str() {
        "book" => {
            sentences.push(emph("title"));
            sentences.push(join(&[field("publisher"), field("address"), year(entry)]));
        }
        "article" => {
            sentences.push(field("title"));
            sentences.push(join(&[emph("journal"), volume(entry), year(entry)]));
        }
        "inproceedings" | "incollection" | "inbook" => {
            sentences.push(field("title"));
            let pages = field("pages").map(|p| format!("pages {}", p));
            let container = emph("booktitle").map(|b| format!("In {}", b));
            sentences.push(join(&[container, pages]));
            sentences.push(join(&[field("publisher"), field("address"), year(entry)]));
        }
        _ => {
            sentences.push(field("title"));
            sentences.push(join(&[field("howpublished"), field("note"), year(entry)]));
        }
    }

    Ok(sentences
        .into_iter()
        .flatten()
        .map(add_period)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn requires_title(entry: &Entry) -> bool {
    matches!(
        entry.entry_type.as_str(),
        "book" | "article" | "inproceedings" | "incollection" | "inbook"
    )
}

fn persons(entry: &Entry, style: NameStyle) -> Option<String> {
    if !entry.authors.is_empty() {
        return Some(encode_text(&format_names(&entry.authors, style)).into_owned());
    }
    if entry.editors.is_empty() {
        return None;
    }
    let role = if entry.editors.len() > 1 {
        "editors"
    } else {
        "editor"
    };
    Some(format!(
        "{}, {}",
        encode_text(&format_names(&entry.editors, style)),
        role
    ))
}

fn year(entry: &Entry) -> Option<String> {
    entry.year().map(|y| encode_text(y).into_owned())
}

/// `volume(number):pages`, with each piece optional.
fn volume(entry: &Entry) -> Option<String> {
    let mut out = entry.field("volume").unwrap_or_default().to_string();
    if let Some(number) = entry.field("number") {
        out.push_str(&format!("({})", number));
    }
    if let Some(pages) = entry.field("pages") {
        out.push(':');
        out.push_str(pages);
    }
    let out = out.trim_start_matches(':');
    (!out.is_empty()).then(|| encode_text(out).into_owned())
}

fn join(parts: &[Option<String>]) -> Option<String> {
    let parts: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn add_period(sentence: String) -> String {
    if sentence.ends_with(['.', '?', '!']) {
        sentence
    } else {
        sentence + "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citelink_core::Person;

    fn relativity() -> Entry {
        Entry::new("ein relt", "book")
            .with_author(Person::new("Albert", "Einstein"))
            .with_field("year", "2011")
            .with_field("title", "Relativity: The Special and General Theory")
            .with_field("publisher", "Emporum Books")
    }

    #[test]
    fn test_book() {
        assert_eq!(
            render_entry(&relativity(), NameStyle::Plain).unwrap(),
            "Albert Einstein.\n<em>Relativity: The Special and General Theory</em>.\nEmporum Books, 2011."
        );
    }

    #[test]
    fn test_book_last_first() {
        let text = render_entry(&relativity(), NameStyle::LastFirst).unwrap();
        assert!(text.starts_with("Einstein, Albert.\n"));
    }

    #[test]
    fn test_article() {
        let entry = Entry::new("a", "article")
            .with_author(Person::new("Albert", "Einstein"))
            .with_field("title", "Zur Elektrodynamik bewegter Körper")
            .with_field("journal", "Annalen der Physik")
            .with_field("volume", "17")
            .with_field("number", "10")
            .with_field("pages", "891--921")
            .with_field("year", "1905");
        assert_eq!(
            render_entry(&entry, NameStyle::Plain).unwrap(),
            "Albert Einstein.\nZur Elektrodynamik bewegter Körper.\n<em>Annalen der Physik</em>, 17(10):891--921, 1905."
        );
    }

    #[test]
    fn test_inproceedings() {
        let entry = Entry::new("p", "inproceedings")
            .with_author(Person::new("Ada", "Lovelace"))
            .with_field("title", "Notes")
            .with_field("booktitle", "Scientific Memoirs")
            .with_field("pages", "666--731")
            .with_field("publisher", "Taylor")
            .with_field("year", "1843");
        assert_eq!(
            render_entry(&entry, NameStyle::Plain).unwrap(),
            "Ada Lovelace.\nNotes.\nIn <em>Scientific Memoirs</em>, pages 666--731.\nTaylor, 1843."
        );
    }

    #[test]
    fn test_misc_with_editors_and_no_title() {
        let mut entry = Entry::new("m", "misc").with_field("year", "2020");
        entry.editors = vec![Person::new("Jane", "Doe"), Person::new("John", "Roe")];
        assert_eq!(
            render_entry(&entry, NameStyle::Plain).unwrap(),
            "Jane Doe and John Roe, editors.\n2020."
        );
    }

    #[test]
    fn test_fields_are_escaped() {
        let entry = relativity().with_field("publisher", "Smith & Sons <Ltd>");
        let text = render_entry(&entry, NameStyle::Plain).unwrap();
        assert!(text.contains("Smith &amp; Sons &lt;Ltd&gt;, 2011."));
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let mut entry = relativity();
        entry.fields.shift_remove("title");
        let err = render_entry(&entry, NameStyle::Plain).unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::MissingField { ref key, field: "title" } if key == "ein relt"
        ));
    }

    #[test]
    fn test_existing_terminal_punctuation_is_kept() {
        let entry = Entry::new("s", "misc")
            .with_author(Person::new("Erwin", "Schrödinger"))
            .with_field("title", "What Is Life?");
        assert_eq!(
            render_entry(&entry, NameStyle::Plain).unwrap(),
            "Erwin Schrödinger.\nWhat Is Life?"
        );
    }
}
