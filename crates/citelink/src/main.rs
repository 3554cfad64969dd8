/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod config;
mod process;

use anyhow::{Context, Result};
use citelink_processor::load_bibliography;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Process(args) => process::run(args),
        Command::Check { bibliography } => check(bibliography),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn check(path: &Path) -> Result<()> {
    let bibliography = load_bibliography(path)
        .with_context(|| format!("failed to load bibliography {}", path.display()))?;
    println!("{}: {} entries", path.display(), bibliography.len());

    let collisions = bibliography.anchor_collisions();
    if collisions.is_empty() {
        println!("No anchor collisions.");
    }
    for collision in collisions {
        println!(
            "Anchor \"{}\" is shared by keys \"{}\" and \"{}\"",
            collision.anchor, collision.first, collision.second
        );
    }
    Ok(())
}
