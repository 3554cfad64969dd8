/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use citelink_core::{Bibliography, Entry};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::ProcessorError;

/// The source formats a bibliography can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BibliographyFormat {
    BibTeX,
    Yaml,
    Json,
}

impl BibliographyFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ProcessorError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "bib" | "bibtex" => Ok(Self::BibTeX),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ProcessorError::UnsupportedFormat(ext)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::BibTeX => "BibTeX",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// Load a bibliography from a file given its path.
/// Supports BibTeX/BibLaTeX (`.bib`) and entry lists in YAML or JSON.
pub fn load_bibliography(path: &Path) -> Result<Bibliography, ProcessorError> {
    let format = BibliographyFormat::from_path(path)?;
    let src = fs::read_to_string(path)?;
    let bib = parse_bibliography(&src, format)?;
    debug!(path = %path.display(), entries = bib.len(), "loaded bibliography");
    Ok(bib)
}

/// Parse bibliography source text.
///
/// YAML and JSON sources hold either a list of entries or a map from key to
/// entry; in the map form an entry's `key` may be omitted.
pub fn parse_bibliography(
    src: &str,
    format: BibliographyFormat,
) -> Result<Bibliography, ProcessorError> {
    let entries: Vec<Entry> = match format {
        BibliographyFormat::BibTeX => biblatex::Bibliography::parse(src)
            .map_err(|e| parse_error(format, e))?
            .iter()
            .map(Entry::from_biblatex)
            .collect(),
        // JSON is read into the YAML value model so both share one path.
        BibliographyFormat::Yaml | BibliographyFormat::Json => {
            let value: serde_yaml::Value = match format {
                BibliographyFormat::Json => {
                    serde_json::from_str(src).map_err(|e| parse_error(format, e))?
                }
                _ => serde_yaml::from_str(src).map_err(|e| parse_error(format, e))?,
            };
            if value.is_mapping() {
                let map = serde_yaml::from_value(value).map_err(|e| parse_error(format, e))?;
                keyed_entries(map).map_err(|e| parse_error(format, e))?
            } else {
                serde_yaml::from_value(value).map_err(|e| parse_error(format, e))?
            }
        }
    };

    let mut bib = Bibliography::new();
    for entry in entries {
        if let Some(previous) = bib.insert(entry) {
            warn!("duplicate bibliography entry for key \"{}\"; keeping the last one", previous.key);
        }
    }
    Ok(bib)
}

fn parse_error(format: BibliographyFormat, e: impl std::fmt::Display) -> ProcessorError {
    ProcessorError::ParseError(format.name().to_string(), e.to_string())
}

fn keyed_entries(
    map: IndexMap<String, serde_yaml::Value>,
) -> Result<Vec<Entry>, serde_yaml::Error> {
    map.into_iter()
        .map(|(key, mut value)| {
            if let serde_yaml::Value::Mapping(fields) = &mut value {
                let key_field = serde_yaml::Value::from("key");
                if !fields.contains_key(&key_field) {
                    fields.insert(key_field, serde_yaml::Value::from(key));
                }
            }
            serde_yaml::from_value(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            BibliographyFormat::from_path(Path::new("refs.BIB")).unwrap(),
            BibliographyFormat::BibTeX
        );
        assert_eq!(
            BibliographyFormat::from_path(Path::new("refs.yml")).unwrap(),
            BibliographyFormat::Yaml
        );
        assert!(matches!(
            BibliographyFormat::from_path(Path::new("refs.ris")),
            Err(ProcessorError::UnsupportedFormat(ext)) if ext == "ris"
        ));
    }

    #[test]
    fn test_yaml_keyed_map() {
        let src = r#"
ein relt:
  type: book
  authors: ["Albert Einstein"]
  fields:
    title: Relativity
    year: 2011
"#;
        let bib = parse_bibliography(src, BibliographyFormat::Yaml).unwrap();
        let entry = bib.get("ein relt").unwrap();
        assert_eq!(entry.key, "ein relt");
        assert_eq!(entry.year(), Some("2011"));
    }

    #[test]
    fn test_json_list() {
        let src = r#"[{"key": "a", "type": "misc", "fields": {"title": "A"}}]"#;
        let bib = parse_bibliography(src, BibliographyFormat::Json).unwrap();
        assert_eq!(bib.len(), 1);
        assert_eq!(bib.get("A").unwrap().title(), Some("A"));
    }

    #[test]
    fn test_bibtex_syntax_error() {
        let err = parse_bibliography("@book{broken, title = {", BibliographyFormat::BibTeX)
            .unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(format, _) if format == "BibTeX"));
    }

    #[test]
    fn load_bibliography_fixture() {
        let path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/references.bib");
        let bib = load_bibliography(&path).expect("bib fixture should parse");
        assert!(bib.contains_key("einstein"));
    }
}
