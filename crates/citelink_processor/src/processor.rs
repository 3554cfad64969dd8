/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Article-level citation processing.
//!
//! For each article the processor aggregates citations, rewrites the markers
//! into links, renders the bibliography and attaches both to the article.
//! Articles without citations are left exactly as they were.

use crate::aggregator::Aggregator;
use crate::article::{Article, ArticleBibliography};
use crate::citation::CitationRecord;
use crate::error::ProcessorError;
use crate::render::BibliographyRenderer;
use crate::scanner;
use crate::style::{EntryFormatter, Style};
use citelink_core::Bibliography;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, error, warn};

/// Counts from one [`CitationsProcessor::process`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    /// Articles seen.
    pub articles: usize,
    /// Articles that received a bibliography.
    pub cited: usize,
    /// Articles skipped because processing failed.
    pub failed: usize,
}

/// Drives aggregation and rendering over a collection of articles.
///
/// The bibliography and formatter are shared, read-only inputs for the whole
/// run.
pub struct CitationsProcessor<'a, F: ?Sized = Style> {
    bibliography: &'a Bibliography,
    formatter: &'a F,
    renderer: BibliographyRenderer,
}

impl<'a, F: EntryFormatter + ?Sized> CitationsProcessor<'a, F> {
    pub fn new(bibliography: &'a Bibliography, formatter: &'a F) -> Self {
        Self {
            bibliography,
            formatter,
            renderer: BibliographyRenderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: BibliographyRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Process every article in order.
    ///
    /// A failure in one article is logged and counted; the remaining articles
    /// are still processed.
    pub fn process<'b, A, I>(&self, articles: I) -> ProcessSummary
    where
        A: Article + ?Sized + 'b,
        I: IntoIterator<Item = &'b mut A>,
    {
        let mut summary = ProcessSummary::default();
        for article in articles {
            summary.articles += 1;
            match self.process_article(&mut *article) {
                Ok(true) => summary.cited += 1,
                Ok(false) => {}
                Err(e) => {
                    summary.failed += 1;
                    error!(
                        article = article.name().unwrap_or("<unnamed>"),
                        "skipping citations: {}", e
                    );
                }
            }
        }
        debug!(?summary, "citation processing finished");
        summary
    }

    /// Process one article. Returns whether a bibliography was attached.
    pub fn process_article<A: Article + ?Sized>(
        &self,
        article: &mut A,
    ) -> Result<bool, ProcessorError> {
        let aggregation = Aggregator::new(self.bibliography, self.formatter)
            .aggregate(article.content())?;
        let cites = aggregation.records;
        if cites.is_empty() {
            return Ok(false);
        }

        warn_on_anchor_collisions(article.name(), &cites);

        let content = self.rewrite_content(article.content(), &cites);
        let rendered = self.renderer.render(&cites);
        article.set_content(content);
        article.attach_bibliography(ArticleBibliography { cites, rendered });
        Ok(true)
    }

    /// Replace markers with in-text links.
    ///
    /// The `n`th citation of a reference links with id `cite-{ref_id}-{n}`,
    /// matching back-link `n` in the bibliography. Escaped markers become
    /// their literal text; markers without a record are left as written.
    pub fn rewrite_content(&self, content: &str, cites: &[CitationRecord]) -> String {
        let records: HashMap<&str, &CitationRecord> =
            cites.iter().map(|r| (r.cite_key(), r)).collect();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        let mut result = String::with_capacity(content.len());
        let mut last_idx = 0;
        for marker in scanner::scan(content) {
            result.push_str(&content[last_idx..marker.span.start]);
            last_idx = marker.span.end;

            if marker.is_escaped() {
                result.push_str(&marker.literal());
                continue;
            }

            let record = self
                .bibliography
                .get(marker.key)
                .and_then(|entry| records.get(entry.key.as_str()));
            match record {
                Some(record) => {
                    let n = seen.entry(record.cite_key()).or_default();
                    *n += 1;
                    result.push_str(&self.renderer.html().in_text_link(record, *n));
                }
                None => result.push_str(&content[marker.span.clone()]),
            }
        }
        result.push_str(&content[last_idx..]);
        result
    }
}

fn warn_on_anchor_collisions(article: Option<&str>, cites: &[CitationRecord]) {
    let mut ids = HashSet::new();
    for record in cites {
        let ref_id = record.ref_id();
        if !ids.insert(ref_id.clone()) {
            warn!(
                article = article.unwrap_or("<unnamed>"),
                "citation anchor \"{}\" is used by more than one key (\"{}\")",
                ref_id,
                record.cite_key()
            );
        }
    }
}
