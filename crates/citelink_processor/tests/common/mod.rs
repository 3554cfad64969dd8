/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use citelink_core::{Bibliography, Entry, Person};
use std::path::PathBuf;

// --- Helper Functions for Test Data Construction ---

pub const EINSTEIN_TEXT: &str =
    "Albert Einstein.\n<em>Relativity: The Special and General Theory</em>.\nEmporum Books, 2011.";

pub const HAWKING_TEXT: &str =
    "Stephen Hawking.\n<em>The Universe in a Nutshell</em>.\nBantam Spectra, 2001.";

pub fn einstein() -> Entry {
    Entry::new("ein relt", "book")
        .with_author(Person::new("Albert", "Einstein"))
        .with_field("title", "Relativity: The Special and General Theory")
        .with_field("publisher", "Emporum Books")
        .with_field("year", "2011")
}

pub fn hawking() -> Entry {
    Entry::new("hawuian", "book")
        .with_author(Person::new("Stephen", "Hawking"))
        .with_field("title", "The Universe in a Nutshell")
        .with_field("publisher", "Bantam Spectra")
        .with_field("year", "2001")
}

pub fn bibliography() -> Bibliography {
    [einstein(), hawking()].into_iter().collect()
}

/// Path to a file under the workspace `tests/fixtures` directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// The in-text link for the `n`th citation of `ref_id`.
pub fn in_text(ref_id: &str, label: &str, n: usize) -> String {
    format!(
        r##"<a href="#{ref_id}" id="cite-{ref_id}-{n}" class="citation">[{label}]</a>"##
    )
}

/// The `n`th back-link of `ref_id`.
pub fn back_link(ref_id: &str, label: &str, n: usize) -> String {
    format!(
        r##"<a class="cite-backref" href="#cite-{ref_id}-{n}" title="Jump back to citation {n} of {label}"><sup><i><b>{n}</b></i></sup></a>"##
    )
}
