//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ValidateArgs;
use crate::matrix::ConfusionMatrix;
use crate::parse::parse_log;

/// Check that a log yields a complete matrix, without rendering anything
pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let values = parse_log(&args.input).map_err(|e| e.to_string())?;
    let token_count = values.len();
    let matrix = ConfusionMatrix::from_counts(values, args.classes).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "OK: {} integers form a {}x{} matrix",
            token_count,
            matrix.n_classes(),
            matrix.n_classes()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Samples: {}", matrix.total()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Accuracy: {:.4}", matrix.accuracy()),
    );
    Ok(())
}
