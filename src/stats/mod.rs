//! Reader for the GPFS FSAL statistics dump.
//!
//! The daemon writes one line per FSAL operation that was called at least
//! once:
//!
//! ```text
//! op:<op>, num:<count>, resp:<total ns>, resp_min:<ns>, resp_max:<ns>
//! ```


use std::{fs, path::Path, str::FromStr, time::Duration};

use crate::{CtlError, Result};

/// Accumulated response times for one FSAL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsalOpStats {
    /// GPFS operation code
    pub op: u32,
    /// Number of calls recorded
    pub num_ops: u64,
    /// Sum of all response times, in nanoseconds
    pub resp_time: u64,
    /// Fastest response, in nanoseconds
    pub resp_min: u64,
    /// Slowest response, in nanoseconds
    pub resp_max: u64,
}

impl FsalOpStats {
    /// Mean response time, or zero when no calls were recorded.
    pub fn average(&self) -> Duration {
        match self.resp_time.checked_div(self.num_ops) {
            Some(avg) => Duration::from_nanos(avg),
            None => Duration::ZERO,
        }
    }

    /// Fastest response time.
    pub fn min(&self) -> Duration {
        Duration::from_nanos(self.resp_min)
    }

    /// Slowest response time.
    pub fn max(&self) -> Duration {
        Duration::from_nanos(self.resp_max)
    }
}

impl FromStr for FsalOpStats {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut fields = line.split(',').map(str::trim);
        let mut next = |key: &str| -> std::result::Result<u64, String> {
            let field = fields
                .next()
                .ok_or_else(|| format!("missing field '{key}'"))?;
            let value = field
                .strip_prefix(key)
                .and_then(|rest| rest.strip_prefix(':'))
                .ok_or_else(|| format!("expected '{key}:', found '{field}'"))?;
            value
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("bad value for '{key}': {e}"))
        };

        let op = next("op")?;
        let stats = FsalOpStats {
            op: u32::try_from(op).map_err(|_| format!("op code {op} out of range"))?,
            num_ops: next("num")?,
            resp_time: next("resp")?,
            resp_min: next("resp_min")?,
            resp_max: next("resp_max")?,
        };

        if let Some(extra) = fields.next() {
            return Err(format!("unexpected trailing field '{extra}'"));
        }

        Ok(stats)
    }
}

/// Parses the contents of an FSAL stats dump. Blank lines are skipped.
///
/// # Errors
/// Returns `CtlError::StatsParse` for the first line that does not match the
/// dump format.
pub fn parse_fsal_stats(content: &str) -> Result<Vec<FsalOpStats>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse().map_err(|details| CtlError::StatsParse {
                line: idx + 1,
                details,
            })
        })
        .collect()
}

/// Reads and parses an FSAL stats dump from disk.
///
/// # Errors
/// Returns `CtlError::Io` if the file cannot be read, or
/// `CtlError::StatsParse` if its contents are malformed.
pub fn read_fsal_stats(path: &Path) -> Result<Vec<FsalOpStats>> {
    let content = fs::read_to_string(path)?;
    parse_fsal_stats(&content)
}
