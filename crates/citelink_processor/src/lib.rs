/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citelink Processor
//!
//! Turns `[@key]` citation markers in generated HTML articles into links to a
//! per-article bibliography. Each article is scanned once; repeated citations
//! of one reference share a single bibliography item whose back-links point
//! at every place it was cited.
//!
//! Formatting is pluggable through [`EntryFormatter`]; the built-in [`Style`]
//! is selected by a [`citelink_core::StyleConfig`].
//!
//! # Example
//!
//! ```rust
//! use citelink_core::{Bibliography, Entry, Person};
//! use citelink_processor::{CitationsProcessor, Document, Style};
//!
//! let bib: Bibliography = [Entry::new("kuhn1962", "book")
//!     .with_author(Person::new("Thomas", "Kuhn"))
//!     .with_field("title", "The Structure of Scientific Revolutions")
//!     .with_field("year", "1962")]
//! .into_iter()
//! .collect();
//!
//! let style = Style::default();
//! let processor = CitationsProcessor::new(&bib, &style);
//!
//! let mut doc = Document::new("post", "<p>As argued [@kuhn1962].</p>");
//! assert!(processor.process_article(&mut doc).unwrap());
//! assert_eq!(
//!     doc.content,
//!     r##"<p>As argued <a href="#kuhn1962" id="cite-kuhn1962-1" class="citation">[Kuh62]</a>.</p>"##
//! );
//! assert!(doc.render().contains(r#"<li id="kuhn1962">"#));
//! ```

pub mod aggregator;
pub mod article;
pub mod citation;
pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod scanner;
pub mod style;

pub use aggregator::{find_citations, Aggregation, Aggregator};
pub use article::{Article, ArticleBibliography, Document};
pub use citation::CitationRecord;
pub use error::ProcessorError;
pub use io::{load_bibliography, parse_bibliography, BibliographyFormat};
pub use processor::{CitationsProcessor, ProcessSummary};
pub use render::BibliographyRenderer;
pub use scanner::Marker;
pub use style::{EntryFormatter, FormattedEntry, Style};
