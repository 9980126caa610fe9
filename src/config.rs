//! CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::DEFAULT_CLASSES;

/// Trazar: training-log confusion matrix visualization
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "trazar")]
#[command(version)]
#[command(about = "Reconstruct a confusion matrix from a training log and render it as a heatmap")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Parse a training log and render the rate heatmap
    Render(RenderArgs),

    /// Check that a log yields a complete matrix without rendering
    Validate(ValidateArgs),

    /// Display summary statistics for the reconstructed matrix
    Info(InfoArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RenderArgs {
    /// Path to the training log containing the matrix dump
    #[arg(value_name = "INPUT", default_value = "errors.txt")]
    pub input: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "matrix.png")]
    pub output: PathBuf,

    /// Number of classes (matrix dimension)
    #[arg(long, default_value_t = DEFAULT_CLASSES)]
    pub classes: usize,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the training log containing the matrix dump
    #[arg(value_name = "INPUT", default_value = "errors.txt")]
    pub input: PathBuf,

    /// Number of classes (matrix dimension)
    #[arg(long, default_value_t = DEFAULT_CLASSES)]
    pub classes: usize,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the training log containing the matrix dump
    #[arg(value_name = "INPUT", default_value = "errors.txt")]
    pub input: PathBuf,

    /// Number of classes (matrix dimension)
    #[arg(long, default_value_t = DEFAULT_CLASSES)]
    pub classes: usize,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}
