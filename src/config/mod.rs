//! Configuration schema and loading.
//!
//! The configuration file is optional. Without one, every setting falls
//! back to the fixed NFS-Ganesha defaults and the tool behaves exactly like
//! a bare `dump-gpfs-stats` invocation.

mod bus;
mod dump;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use bus::BusConfig;
pub use dump::{DEFAULT_FSAL_STATS, DEFAULT_NFSV3_STATS, DumpConfig};
pub use general::{GeneralConfig, LogLevel};
pub use loading::ConfigSource;
pub use paths::ConfigPaths;

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Bus addressing of the daemon's administrative object.
    #[serde(default)]
    pub bus: BusConfig,

    /// Statistics files written by the daemon.
    #[serde(default)]
    pub dump: DumpConfig,
}
