/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML markup for citations and bibliography entries.

use crate::citation::CitationRecord;
use html_escape::{encode_double_quoted_attribute as attr, encode_text};

#[derive(Debug, Default, Clone)]
pub struct Html;

impl Html {
    /// The id of the `n`th in-text citation of a reference.
    pub fn citation_id(&self, ref_id: &str, n: usize) -> String {
        format!("cite-{}-{}", ref_id, n)
    }

    /// The in-text link replacing the `n`th marker of a reference.
    pub fn in_text_link(&self, record: &CitationRecord, n: usize) -> String {
        let ref_id = record.ref_id();
        format!(
            r##"<a href="#{}" id="{}" class="citation">[{}]</a>"##,
            attr(&ref_id),
            attr(&self.citation_id(&ref_id, n)),
            encode_text(record.rendered_label())
        )
    }

    /// The back-reference from a bibliography item to its `n`th citation.
    pub fn back_link(&self, record: &CitationRecord, n: usize) -> String {
        let ref_id = record.ref_id();
        format!(
            r##"<a class="cite-backref" href="#{}" title="Jump back to citation {} of {}"><sup><i><b>{}</b></i></sup></a>"##,
            attr(&self.citation_id(&ref_id, n)),
            n,
            attr(record.rendered_label()),
            n
        )
    }

    /// One list item: the rendered entry followed by `count` back-links.
    pub fn entry(&self, record: &CitationRecord) -> String {
        let back_links: Vec<String> = (1..=record.count)
            .map(|n| self.back_link(record, n))
            .collect();
        let mut item = format!(r#"<li id="{}">{}"#, attr(&record.ref_id()), record.rendered_entry());
        if !back_links.is_empty() {
            item.push(' ');
            item.push_str(&back_links.join(" "));
        }
        item.push_str("</li>");
        item
    }

    /// Wrap list items in the `citations` container.
    pub fn bibliography(&self, heading: Option<&str>, items: Vec<String>) -> String {
        let mut out = String::from("<div id=\"citations\">\n");
        if let Some(heading) = heading {
            out.push_str(&format!("<h2>{}</h2>\n", encode_text(heading)));
        }
        out.push_str("<ol>\n");
        for item in items {
            out.push_str(&item);
            out.push('\n');
        }
        out.push_str("</ol>\n</div>");
        out
    }
}
