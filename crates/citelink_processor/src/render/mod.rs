/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliography rendering.

pub mod html;

use crate::citation::CitationRecord;

use self::html::Html;

/// Renders an article's citation records as an HTML bibliography.
///
/// The fragment is a `<div id="citations">` around an `<ol>` with one
/// `<li id="{ref_id}">` per record, in the order given. Each item ends with
/// back-links numbered `1..=count`, the `n`th pointing at the `n`th in-text
/// citation of that reference.
#[derive(Debug, Default, Clone)]
pub struct BibliographyRenderer {
    html: Html,
    heading: Option<String>,
}

impl BibliographyRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an `<h2>` heading inside the container.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn render(&self, records: &[CitationRecord]) -> String {
        let items = records.iter().map(|r| self.html.entry(r)).collect();
        self.html.bibliography(self.heading.as_deref(), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FormattedEntry;

    fn record(key: &str, label: &str, count: usize) -> CitationRecord {
        CitationRecord::with_count(
            FormattedEntry {
                key: key.to_string(),
                label: label.to_string(),
                text: format!("Text of {}.", key),
            },
            count,
        )
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            BibliographyRenderer::new().render(&[]),
            "<div id=\"citations\">\n<ol>\n</ol>\n</div>"
        );
    }

    #[test]
    fn test_render_with_heading() {
        let out = BibliographyRenderer::new()
            .with_heading("References")
            .render(&[record("a", "A01", 1)]);
        assert!(out.starts_with("<div id=\"citations\">\n<h2>References</h2>\n<ol>\n<li id=\"a\">"));
    }

    #[test]
    fn test_items_keep_input_order() {
        let out = BibliographyRenderer::new().render(&[
            record("zeta", "Z", 1),
            record("alpha", "A", 1),
        ]);
        let zeta = out.find("id=\"zeta\"").unwrap();
        let alpha = out.find("id=\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }
}
