//! ganeshactl - administrative client for the NFS-Ganesha file server.
//!
//! Talks to the daemon's `org.ganesha.nfsd.admin` D-Bus interface. The
//! `dump-gpfs-stats` binary asks the daemon to dump its GPFS FSAL and NFSv3
//! statistics and reports the outcome.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ganeshactl::{
//!     config::Config,
//!     invoker::StatsDumpInvoker,
//!     services::admin::DbusAdminService,
//! };
//!
//! # async fn run() -> ganeshactl::Result<()> {
//! let config = Config::load(None)?;
//! let service =
//!     DbusAdminService::connect(config.bus.remote_object(), config.bus.timeout()).await?;
//! let invoker = StatsDumpInvoker::new(service, config.dump);
//!
//! let outcome = invoker.run(&mut std::io::stdout()).await?;
//! println!("exit status {}", outcome.code());
//! # Ok(())
//! # }
//! ```

/// Command-line arguments and output formatting.
pub mod cli;

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// The statistics dump command.
pub mod invoker;

/// D-Bus services of the NFS-Ganesha daemon.
pub mod services;

/// Reader for the FSAL statistics dump file.
pub mod stats;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{CtlError, Result};
