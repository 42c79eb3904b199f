//! lstree: list a directory as an indented tree.
//!
//! Prints the direct children of a directory (or its whole subtree with
//! `--deep`), decorated with per-extension icons, followed by file and
//! folder counts and the total size of the listed files.

mod cli;
mod config;
mod display;
mod error;
mod logging;
mod node;
mod scanner;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Decoration, IconConfig};
use display::Display;
use error::LsTreeError;
use scanner::Scanner;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    logging::init_logging();
    let args = Args::parse_args();

    let requested = match args.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(LsTreeError::CurrentDir)?,
    };

    // Validate the path exists
    let path = requested
        .canonicalize()
        .with_context(|| format!("Cannot access path '{}'", requested.display()))?;

    if !path.is_dir() {
        return Err(LsTreeError::NotADirectory(path).into());
    }

    // The configuration must load before anything is listed
    let decoration = if args.plain {
        Decoration::Plain
    } else {
        let config = IconConfig::load(&args.config).with_context(|| {
            format!("Error loading the config file '{}'", args.config.display())
        })?;
        info!(
            icons = config.icons.len(),
            colors = config.colors.len(),
            "loaded config"
        );
        // JSON output must stay a single document
        if args.show_config && args.format == OutputFormat::Text {
            println!("Loaded Config:");
            println!("{}", serde_json::to_string_pretty(config.loaded())?);
        }
        Decoration::Themed(config)
    };

    let result = Scanner::new()
        .deep(args.deep)
        .scan(&path)
        .with_context(|| format!("Failed to list '{}'", path.display()))?;
    if result.is_empty() {
        info!(root = %path.display(), "directory is empty");
    }

    let display = Display::new()
        .with_decoration(decoration)
        .with_color(args.color.enabled());
    let label = root_label(&path);

    match args.format {
        OutputFormat::Text => display.print_results(&result, &label),
        OutputFormat::Json => println!("{}", display.render_json(&result, &label, args.deep)?),
    }

    Ok(())
}

/// Final path component, or the whole path for roots like `/`
fn root_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
