//! Formatting utilities for CLI output.

use crate::stats::FsalOpStats;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders FSAL statistics as a fixed-width table, times in microseconds.
///
/// The header is styled only when `styled` is set, so the output stays
/// plain when piped.
///
/// # Examples
///
/// ```
/// use ganeshactl::{cli::formatting::format_stats_table, stats::FsalOpStats};
///
/// let stats = [FsalOpStats { op: 101, num_ops: 2, resp_time: 3000, resp_min: 1000, resp_max: 2000 }];
/// let table = format_stats_table(&stats, false);
/// assert!(table.lines().nth(1).unwrap().starts_with("   101"));
/// ```
pub fn format_stats_table(stats: &[FsalOpStats], styled: bool) -> String {
    let header = format!(
        "{:>6} {:>12} {:>12} {:>12} {:>12}",
        "op", "count", "avg(us)", "min(us)", "max(us)"
    );

    let mut table = if styled {
        format_header(&header)
    } else {
        header
    };

    for op in stats {
        table.push('\n');
        table.push_str(&format!(
            "{:>6} {:>12} {:>12.3} {:>12.3} {:>12.3}",
            op.op,
            op.num_ops,
            micros(op.average().as_nanos()),
            micros(op.min().as_nanos()),
            micros(op.max().as_nanos()),
        ));
    }

    table
}

#[allow(clippy::cast_precision_loss)]
fn micros(nanos: u128) -> f64 {
    nanos as f64 / 1_000.0
}
