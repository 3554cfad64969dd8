/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use citelink_core::StyleConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::ProcessArgs;

/// Settings read from a YAML file, then overridden by command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Bibliography path; relative paths resolve against the settings file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<PathBuf>,

    pub style: StyleConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))?;

        if let Some(bib) = settings.bibliography.as_mut() {
            if bib.is_relative() {
                if let Some(dir) = path.parent() {
                    *bib = dir.join(&*bib);
                }
            }
        }
        Ok(settings)
    }

    /// Settings for a `process` run: the file named by `--config`, if any,
    /// with flags applied on top.
    pub fn resolve(args: &ProcessArgs) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_overrides(args);
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, args: &ProcessArgs) {
        if let Some(bib) = &args.bibliography {
            self.bibliography = Some(bib.clone());
        }
        if let Some(label_style) = args.label_style {
            self.style.label_style = label_style;
        }
        if let Some(name_style) = args.name_style {
            self.style.name_style = name_style;
        }
        if let Some(sorting_style) = args.sorting_style {
            self.style.sorting_style = sorting_style;
        }
        if let Some(heading) = &args.heading {
            self.heading = Some(heading.clone());
        }
    }
}
