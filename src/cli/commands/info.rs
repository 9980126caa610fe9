//! Info command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InfoArgs, OutputFormat};
use crate::matrix::{ConfusionMatrix, RateMatrix};
use crate::parse::parse_log;

/// Per-class score entry for the summary report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScore {
    pub class: usize,
    pub precision: f64,
    pub recall: f64,
    pub support: u64,
}

/// Summary statistics for a reconstructed matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub classes: usize,
    pub samples: u64,
    pub accuracy: f64,
    pub max_rate: f64,
    pub empty_columns: usize,
    pub best_class: Option<ClassScore>,
    pub worst_class: Option<ClassScore>,
}

/// Print matrix statistics in the requested format
pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let values = parse_log(&args.input).map_err(|e| e.to_string())?;
    let matrix = ConfusionMatrix::from_counts(values, args.classes).map_err(|e| e.to_string())?;
    let rates = RateMatrix::from_confusion(&matrix);
    let summary = build_summary(&matrix, &rates);

    match args.format {
        OutputFormat::Text => log(level, LogLevel::Normal, &format_summary(&summary)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("Failed to serialize summary: {e}"))?;
            log(level, LogLevel::Normal, &json);
        }
    }
    Ok(())
}

/// Compute the summary report for a matrix and its rates
pub fn build_summary(matrix: &ConfusionMatrix, rates: &RateMatrix) -> MatrixSummary {
    let n = matrix.n_classes();

    let empty_columns = (0..n).filter(|&j| matrix.predicted(j) == 0).count();

    let score = |class: usize| ClassScore {
        class,
        precision: matrix.precision(class),
        recall: matrix.recall(class),
        support: matrix.support(class),
    };
    // Rank classes by recall; ignore classes with no true samples
    let mut ranked: Vec<usize> = (0..n).filter(|&c| matrix.support(c) > 0).collect();
    ranked.sort_by(|&a, &b| {
        matrix
            .recall(a)
            .partial_cmp(&matrix.recall(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    MatrixSummary {
        classes: n,
        samples: matrix.total(),
        accuracy: matrix.accuracy(),
        max_rate: rates.max_rate(),
        empty_columns,
        best_class: ranked.last().map(|&c| score(c)),
        worst_class: ranked.first().map(|&c| score(c)),
    }
}

/// Format the summary as the text report
fn format_summary(summary: &MatrixSummary) -> String {
    let mut lines = vec![
        "Matrix Information:".to_string(),
        format!("  Classes: {}", summary.classes),
        format!("  Samples: {}", summary.samples),
        format!("  Accuracy: {:.4}", summary.accuracy),
        format!("  Max rate: {:.4}", summary.max_rate),
        format!("  Empty prediction columns: {}", summary.empty_columns),
    ];
    if let Some(best) = &summary.best_class {
        lines.push(format!(
            "  Best class (recall): {} (precision {:.4}, recall {:.4}, support {})",
            best.class, best.precision, best.recall, best.support
        ));
    }
    if let Some(worst) = &summary.worst_class {
        lines.push(format!(
            "  Worst class (recall): {} (precision {:.4}, recall {:.4}, support {})",
            worst.class, worst.precision, worst.recall, worst.support
        ));
    }
    lines.join("\n")
}
