/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The article interface seen by the processor.

use crate::citation::CitationRecord;
use serde::Serialize;

/// The bibliography attached to an article that cites something.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleBibliography {
    /// Citation records in order of first citation.
    pub cites: Vec<CitationRecord>,
    /// The rendered HTML fragment.
    pub rendered: String,
}

/// Anything with rendered content that can receive a bibliography.
pub trait Article {
    /// A name for log messages.
    fn name(&self) -> Option<&str> {
        None
    }

    fn content(&self) -> &str;

    fn set_content(&mut self, content: String);

    fn attach_bibliography(&mut self, bibliography: ArticleBibliography);
}

/// A plain in-memory article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Caller-chosen identifier, e.g. a file path; only used in logs.
    pub name: String,
    pub content: String,
    pub bibliography: Option<ArticleBibliography>,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            bibliography: None,
        }
    }

    /// The content with the bibliography fragment added, if there is one.
    ///
    /// In a full page the fragment goes just before the last `</body>`;
    /// otherwise it is appended.
    pub fn render(&self) -> String {
        let Some(bib) = &self.bibliography else {
            return self.content.clone();
        };
        match self.content.to_ascii_lowercase().rfind("</body>") {
            Some(idx) => {
                let (head, tail) = self.content.split_at(idx);
                format!("{}\n{}\n{}", head.trim_end(), bib.rendered, tail)
            }
            None => format!("{}\n{}\n", self.content.trim_end(), bib.rendered),
        }
    }
}

impl Article for Document {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn attach_bibliography(&mut self, bibliography: ArticleBibliography) {
        self.bibliography = Some(bibliography);
    }
}
