//! Ced - a modal terminal text editor for a single file.
//!
//! # Usage
//!
//! ```bash
//! ced notes.txt
//! ced src/main.c
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ced::app::App;

/// A modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "ced", version, about, long_about = None)]
struct Cli {
    /// File to edit; created on first save if it does not exist
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // A missing file argument exits with code 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("Failed to report usage error")?;
            std::process::exit(1);
        }
    };

    let mut app = App::new(cli.file);
    app.run().context("Application error")
}
