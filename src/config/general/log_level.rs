use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the tool.
///
/// Logs are written to stderr, so raising the level never changes what the
/// tool prints on stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only transport failures and other errors.
    Error,

    /// Warnings and errors (default level).
    #[default]
    Warn,

    /// Connection and call progress.
    Info,

    /// Bus addressing details and reply contents.
    Debug,

    /// Everything, including zbus internals when `RUST_LOG` allows it.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
