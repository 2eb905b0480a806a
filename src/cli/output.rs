//! Output formatting for the CLI
//!
//! Provides utilities for printing the run summary in human-readable
//! or JSON form. Colored output respects the NO_COLOR env var.

use crate::core::types::{ConsolidationReport, SplitOutcome};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format bytes into human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let gb_val = bytes as f64 / GB as f64;
    let mb_val = bytes as f64 / MB as f64;
    let kb_val = bytes as f64 / KB as f64;

    if bytes >= GB {
        format!("{gb_val:.1} GB")
    } else if bytes >= MB {
        format!("{mb_val:.1} MB")
    } else if bytes >= KB {
        format!("{kb_val:.1} KB")
    } else {
        format!("{bytes} B")
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Print `data` as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Human-readable lines describing a finished run
pub fn report_lines(report: &ConsolidationReport) -> Vec<String> {
    let walk = &report.walk;
    let mut lines = vec![format!(
        "{} {} files into {} in {}",
        colors::success("Consolidated"),
        colors::number(&walk.files_written.to_string()),
        colors::file_path(&report.output_path.display().to_string()),
        colors::number(&format_duration(report.duration_ms as f64 / 1000.0))
    )];

    match &report.split {
        SplitOutcome::Unsplit { size_bytes } => {
            lines.push(format!(
                "No split needed ({})",
                colors::number(&format_bytes(*size_bytes))
            ));
        }
        SplitOutcome::Split { size_bytes, parts } => {
            lines.push(format!(
                "Artifact larger than threshold ({}), split into {} parts:",
                colors::number(&format_bytes(*size_bytes)),
                colors::number(&parts.len().to_string())
            ));
            for part in parts {
                lines.push(format!(
                    "  {} {}",
                    colors::file_path(&part.path.display().to_string()),
                    colors::dim(&format!("({})", format_bytes(part.size_bytes)))
                ));
            }
            lines.push("Original artifact removed after split".to_string());
        }
    }

    lines
}

/// Print the run summary
pub fn print_report(report: &ConsolidationReport) {
    for line in report_lines(report) {
        println!("{line}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
