//! Trazar CLI
//!
//! Heatmap rendering entry point for the trazar library.
//!
//! # Usage
//!
//! ```bash
//! # Render the matrix embedded in errors.txt to matrix.png
//! trazar render
//!
//! # Render with explicit paths and class count
//! trazar render train.log -o confusion.png --classes 100
//!
//! # Check the log without rendering
//! trazar validate train.log
//!
//! # Show matrix statistics
//! trazar info train.log --format json
//! ```

use clap::Parser;
use std::process::ExitCode;
use trazar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
