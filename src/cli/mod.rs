//! Command-line surface of `dump-gpfs-stats`.
//!
//! Every flag is optional. Run bare, the tool asks the daemon on the system
//! bus to dump its statistics and waits for the reply with no timeout.

pub mod formatting;


use std::path::PathBuf;

use clap::Parser;

use crate::{config::Config, services::admin::BusKind};

/// Ask NFS-Ganesha to dump its FSAL and NFSv3 statistics
#[derive(Parser, Debug, Default)]
#[command(name = "dump-gpfs-stats")]
#[command(about = "Ask NFS-Ganesha to dump GPFS FSAL and NFSv3 operation statistics")]
pub struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/ganesha/ganeshactl.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Give up if the daemon does not reply within SECS seconds
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Talk to the daemon on the session bus instead of the system bus
    #[arg(long)]
    pub session: bool,

    /// Print a summary of the FSAL statistics after a successful dump
    #[arg(long)]
    pub show: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(secs) = self.timeout {
            config.bus.timeout_secs = Some(secs);
        }
        if self.session {
            config.bus.bus = BusKind::Session;
        }
    }
}
