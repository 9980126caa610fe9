//! Render command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::RenderArgs;

/// Run the full pipeline: parse the log, normalize, write the heatmap
pub fn run_render(args: RenderArgs, level: LogLevel) -> Result<(), String> {
    let rates = crate::run_pipeline(&args.input, &args.output, args.classes)
        .map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {}", args.output.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Classes: {}", rates.n_classes()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Max rate: {:.4}", rates.max_rate()),
    );
    Ok(())
}
