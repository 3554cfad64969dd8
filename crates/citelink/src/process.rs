/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The `process` command: HTML files in, linked HTML files out.

use anyhow::{bail, Context, Result};
use citelink_processor::{
    load_bibliography, BibliographyRenderer, CitationRecord, CitationsProcessor, Document,
    ProcessSummary, Style,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::cli::ProcessArgs;
use crate::config::Settings;

/// One HTML file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub path: PathBuf,
    /// Path relative to the input root, used to mirror the tree under `--output`.
    pub relative: PathBuf,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: ProcessSummary,
    articles: Vec<ArticleReport<'a>>,
}

#[derive(Serialize)]
struct ArticleReport<'a> {
    path: &'a Path,
    cites: &'a [CitationRecord],
}

pub fn run(args: &ProcessArgs) -> Result<()> {
    let settings = Settings::resolve(args)?;
    let Some(bib_path) = settings.bibliography.as_deref() else {
        bail!("no bibliography given; pass --bibliography or set it in the settings file");
    };
    let bibliography = load_bibliography(bib_path)
        .with_context(|| format!("failed to load bibliography {}", bib_path.display()))?;
    info!(entries = bibliography.len(), "loaded bibliography");

    let mut inputs = Vec::new();
    let mut documents = Vec::new();
    let mut unreadable = 0;
    for input in collect_inputs(&args.inputs)? {
        match fs::read_to_string(&input.path) {
            Ok(content) => {
                documents.push(Document::new(input.path.display().to_string(), content));
                inputs.push(input);
            }
            Err(e) => {
                unreadable += 1;
                error!(path = %input.path.display(), "skipping unreadable article: {}", e);
            }
        }
    }

    let style = Style::new(settings.style);
    let mut renderer = BibliographyRenderer::new();
    if let Some(heading) = &settings.heading {
        renderer = renderer.with_heading(heading.clone());
    }
    let mut summary = CitationsProcessor::new(&bibliography, &style)
        .with_renderer(renderer)
        .process(&mut documents);
    summary.articles += unreadable;
    summary.failed += unreadable;

    for (input, doc) in inputs.iter().zip(&documents) {
        let target = output_path(input, args.output.as_deref());
        if doc.bibliography.is_none() && target == input.path {
            debug!(path = %input.path.display(), "no citations; left unchanged");
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&target, doc.render())
            .with_context(|| format!("failed to write {}", target.display()))?;
        info!(path = %target.display(), "wrote article");
    }

    if args.json {
        let report = Report {
            summary,
            articles: inputs
                .iter()
                .zip(&documents)
                .filter_map(|(input, doc)| {
                    doc.bibliography.as_ref().map(|bib| ArticleReport {
                        path: &input.path,
                        cites: &bib.cites,
                    })
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Processed {} article(s): {} with citations, {} failed.",
            summary.articles, summary.cited, summary.failed
        );
    }
    Ok(())
}

/// Expand files and directories into the HTML files to process.
///
/// Directories are walked recursively in file-name order.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for root in paths {
        if root.is_dir() {
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
                if entry.file_type().is_file() && is_html(entry.path()) {
                    let relative = entry.path().strip_prefix(root)?.to_path_buf();
                    inputs.push(Input {
                        path: entry.path().to_path_buf(),
                        relative,
                    });
                }
            }
        } else if root.is_file() {
            let relative = root
                .file_name()
                .map(PathBuf::from)
                .with_context(|| format!("not a file: {}", root.display()))?;
            inputs.push(Input {
                path: root.clone(),
                relative,
            });
        } else {
            bail!("input not found: {}", root.display());
        }
    }
    Ok(inputs)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Where an input is written: mirrored under `output`, or in place.
pub fn output_path(input: &Input, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.join(&input.relative),
        None => input.path.clone(),
    }
}
