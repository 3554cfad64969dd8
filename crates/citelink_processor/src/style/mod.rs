/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Entry formatting.
//!
//! The aggregator treats formatting as a black box behind [`EntryFormatter`]:
//! it hands over the distinct entries an article cites and receives one
//! [`FormattedEntry`] (label + HTML text) per entry. [`Style`] is the built-in
//! implementation, assembled from the enumerated strategies in
//! [`StyleConfig`] once at startup.

pub mod labels;
pub mod names;
pub mod sorting;
pub mod template;

use crate::error::ProcessorError;
use citelink_core::{Entry, StyleConfig};
use serde::Serialize;
use tracing::warn;

use self::sorting::Sorter;

/// One entry after formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedEntry {
    /// The entry's key as spelled in the bibliography.
    pub key: String,
    /// Short label, e.g. `Ein11` or `3`.
    pub label: String,
    /// Full bibliographic text as HTML.
    pub text: String,
}

/// Turns raw entries into labelled, rendered entries.
pub trait EntryFormatter {
    /// Format a set of distinct entries together.
    ///
    /// Entries are formatted as one set so that labels can be disambiguated
    /// against each other. The result may be in any order; callers match
    /// results back by key.
    fn format_entries(&self, entries: &[&Entry]) -> Result<Vec<FormattedEntry>, ProcessorError>;
}

/// The built-in formatter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    config: StyleConfig,
}

impl Style {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }
}

impl From<StyleConfig> for Style {
    fn from(config: StyleConfig) -> Self {
        Self::new(config)
    }
}

impl EntryFormatter for Style {
    /// Entries that cannot be rendered are logged and left out; the rest are
    /// labelled as if the skipped ones were absent.
    fn format_entries(&self, entries: &[&Entry]) -> Result<Vec<FormattedEntry>, ProcessorError> {
        let sorted = Sorter::new(self.config.sorting_style).sort_entries(entries);
        let (renderable, texts): (Vec<&Entry>, Vec<String>) = sorted
            .into_iter()
            .filter_map(
                |entry| match template::render_entry(entry, self.config.name_style) {
                    Ok(text) => Some((entry, text)),
                    Err(e) => {
                        warn!("skipping bibliography entry: {}", e);
                        None
                    }
                },
            )
            .unzip();
        let labels = labels::assign_labels(&renderable, self.config.label_style);

        Ok(renderable
            .iter()
            .zip(labels)
            .zip(texts)
            .map(|((entry, label), text)| FormattedEntry {
                key: entry.key.clone(),
                label,
                text,
            })
            .collect())
    }
}
