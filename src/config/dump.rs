use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the GPFS FSAL statistics dump.
pub const DEFAULT_FSAL_STATS: &str = "/tmp/fsal.stats";
/// Default location of the NFSv3 operation statistics dump.
pub const DEFAULT_NFSV3_STATS: &str = "/tmp/nfsv3.stats";

/// Files the daemon writes when asked to dump its statistics.
///
/// The daemon picks these paths itself; they are only read back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DumpConfig {
    /// GPFS FSAL per-operation statistics.
    pub fsal_stats: PathBuf,

    /// NFSv3 per-operation statistics.
    pub nfsv3_stats: PathBuf,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            fsal_stats: PathBuf::from(DEFAULT_FSAL_STATS),
            nfsv3_stats: PathBuf::from(DEFAULT_NFSV3_STATS),
        }
    }
}
