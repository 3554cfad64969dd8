/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for citelink.
//!
//! This crate holds the bibliography types shared by the processor and the
//! command line: raw [`Entry`] records with their [`Person`] lists, the
//! case-insensitive [`Bibliography`] they are looked up in, and the
//! enumerated style options ([`StyleConfig`]) that select a formatting
//! strategy at startup.
//!
//! # Example
//!
//! ```rust
//! use citelink_core::{Bibliography, Entry, Person};
//!
//! let mut bib = Bibliography::new();
//! bib.insert(Entry {
//!     key: "ein relt".to_string(),
//!     entry_type: "book".to_string(),
//!     authors: vec![Person::parse("Einstein, Albert")],
//!     ..Default::default()
//! });
//!
//! let entry = bib.get("  EIN RELT ").unwrap();
//! assert_eq!(entry.key, "ein relt");
//! assert_eq!(citelink_core::anchor_id(&entry.key), "einrelt");
//! ```

pub mod bibliography;
pub mod conversion;
pub mod options;
pub mod reference;

pub use bibliography::{anchor_id, AnchorCollision, Bibliography};
pub use options::{LabelStyle, NameStyle, ParseStyleError, SortingStyle, StyleConfig};
pub use reference::{Entry, Person};
