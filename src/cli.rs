//! Command-line argument parsing using clap derive macros.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// List a directory as an indented tree with icons and a size summary.
///
/// Lists the direct children of PATH, or every descendant with --deep,
/// sorted by name within each directory.
#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// List files and folders recursively
    #[arg(short, long)]
    pub deep: bool,

    /// Icon/color configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,

    /// Print names only, without loading the icon configuration
    #[arg(long, conflicts_with = "show_config")]
    pub plain: bool,

    /// When to color icons
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the loaded configuration before a text listing
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether escape codes should be written to stdout
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
