// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! polyrec - save and restore polymorphic record sequences.
//!
//! Usage:
//!   polyrec demo --output records.txt
//!   polyrec show records.txt
//!   polyrec tags

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyrec::{
    Config, NamedRecord, OutputMode, Registry, Sequence, Store, ValuedRecord, Wrapper,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polyrec")]
#[command(about = "Save and restore polymorphic record sequences")]
#[command(version)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save a sample sequence, load it back and render both
    Demo {
        /// Output file (defaults to the config's default_output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a saved sequence
    Show {
        /// File written by `polyrec demo` or the library
        path: PathBuf,
    },
    /// List registered record tags
    Tags,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!(?config, "configuration loaded");

    let store = Store::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Demo { output } => {
            let path = output.unwrap_or_else(|| config.default_output.clone());
            run_demo(&store, &path, &mut out)?;
        }
        Command::Show { path } => {
            let items = store
                .load(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            store.codec().emit(&mut out, &items, OutputMode::Display)?;
        }
        Command::Tags => {
            for entry in Registry::global().entries() {
                writeln!(out, "{}\t{}", entry.tag(), entry.name())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn run_demo(store: &Store, path: &Path, out: &mut dyn Write) -> Result<()> {
    let before: Sequence = vec![
        Wrapper::new(NamedRecord::new("Alice")),
        Wrapper::new(ValuedRecord::new(12)),
    ];

    writeln!(out, "before serialize:")?;
    store.codec().emit(out, &before, OutputMode::Display)?;
    writeln!(out)?;

    store
        .save(path, &before)
        .with_context(|| format!("failed to save {}", path.display()))?;

    let after = store
        .load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    writeln!(out, "after deserialize:")?;
    store.codec().emit(out, &after, OutputMode::Display)?;
    writeln!(out)?;

    info!(path = %path.display(), records = after.len(), "demo complete");
    Ok(())
}
