mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General settings that affect the tool as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}
