// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Binary entry point for the Sill desktop shell.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Binary entry point for the Sill desktop shell.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use env_logger::Env;
use log::LevelFilter;

use sill::{HostFs, ShellSession, SillApp};

/// Sill command-line arguments.
#[derive(Debug, Parser)]
#[command(author = "Lukas Bower", version, about = "Sill desktop shell", long_about = None)]
struct Cli {
    /// Directory the session starts in; defaults to SILL_START_DIR, then
    /// the process working directory.
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder =
        env_logger::Builder::from_env(Env::new().filter_or("SILL_LOG", default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn resolve_start_dir(cli_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir);
    }
    if let Ok(value) = env::var("SILL_START_DIR") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
    env::current_dir().context("failed to read the process working directory")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start_dir = resolve_start_dir(cli.start_dir)?;
    let session = ShellSession::new(HostFs, &start_dir)
        .with_context(|| format!("cannot start a session in {}", start_dir.display()))?;
    log::info!("starting window in {}", session.cwd().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Sill"),
        ..Default::default()
    };
    eframe::run_native(
        "Sill",
        options,
        Box::new(|cc| Ok(Box::new(SillApp::new(cc, session)))),
    )
    .map_err(|err| anyhow!("window session failed: {err}"))
}
