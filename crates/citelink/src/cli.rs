/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use citelink_core::{LabelStyle, NameStyle, SortingStyle};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "citelink", author, version)]
#[command(about = "Link citation markers in HTML articles to generated bibliographies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite citation markers and append bibliographies
    Process(ProcessArgs),
    /// Load a bibliography and report anchor collisions
    Check {
        /// Path to the bibliography (.bib, .yaml, .yml or .json)
        bibliography: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProcessArgs {
    /// HTML files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to the bibliography (overrides the settings file)
    #[arg(short, long)]
    pub bibliography: Option<PathBuf>,

    /// Path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Label style: alpha or number
    #[arg(long)]
    pub label_style: Option<LabelStyle>,

    /// Name style: plain or last-first
    #[arg(long)]
    pub name_style: Option<NameStyle>,

    /// Sorting style: none or author-year-title
    #[arg(long)]
    pub sorting_style: Option<SortingStyle>,

    /// Heading placed above each bibliography
    #[arg(long)]
    pub heading: Option<String>,

    /// Write results under this directory instead of in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON report of citations per article
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_style_flags_parse() {
        let cli = Cli::try_parse_from([
            "citelink",
            "process",
            "site",
            "--label-style",
            "number",
            "--name-style",
            "lastfirst",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        assert_eq!(args.label_style, Some(LabelStyle::Number));
        assert_eq!(args.name_style, Some(NameStyle::LastFirst));
        assert_eq!(args.sorting_style, None);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(Cli::try_parse_from(["citelink", "process", "site", "--label-style", "roman"])
            .is_err());
    }
}
