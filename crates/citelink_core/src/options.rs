/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style options.
//!
//! Each option is a closed set of named strategies. Names are accepted in
//! kebab-case, with the historical BibTeX spellings (`lastfirst`,
//! `author_year_title`) as aliases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How short labels are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelStyle {
    /// Author initials plus a two-digit year, e.g. `Ein11`.
    #[default]
    Alpha,
    /// Sequential numbers.
    Number,
}

/// How personal names are written in the rendered entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyle {
    /// `First Middle von Last, Jr.`
    #[default]
    Plain,
    /// `von Last, Jr., First Middle`
    #[serde(alias = "lastfirst")]
    LastFirst,
}

/// The order in which entries are considered when assigning labels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortingStyle {
    /// Keep the order entries were handed to the formatter.
    None,
    #[default]
    #[serde(alias = "author_year_title")]
    AuthorYearTitle,
}

/// Complete formatter configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StyleConfig {
    pub label_style: LabelStyle,
    pub name_style: NameStyle,
    pub sorting_style: SortingStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \"{name}\" (expected one of: {})", .expected.join(", "))]
pub struct ParseStyleError {
    pub kind: &'static str,
    pub name: String,
    pub expected: &'static [&'static str],
}

macro_rules! named_strategy {
    ($ty:ty, $kind:literal, [$(($variant:path, $name:literal $(, $alias:literal)*)),+ $(,)?]) => {
        impl $ty {
            /// The canonical configuration name.
            pub fn name(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseStyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name $(| $alias)* => Ok($variant),)+
                    _ => Err(ParseStyleError {
                        kind: $kind,
                        name: s.to_string(),
                        expected: &[$($name),+],
                    }),
                }
            }
        }
    };
}

named_strategy!(
    LabelStyle,
    "label style",
    [(LabelStyle::Alpha, "alpha"), (LabelStyle::Number, "number")]
);
named_strategy!(
    NameStyle,
    "name style",
    [
        (NameStyle::Plain, "plain"),
        (NameStyle::LastFirst, "last-first", "lastfirst")
    ]
);
named_strategy!(
    SortingStyle,
    "sorting style",
    [
        (SortingStyle::None, "none"),
        (SortingStyle::AuthorYearTitle, "author-year-title", "author_year_title")
    ]
);
