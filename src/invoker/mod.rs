//! The `fsal_stats` dump command.
//!
//! Calls the daemon once, turns the `(success, message)` reply into a
//! [`DumpOutcome`], and reports it. Transport failures are returned as
//! errors and nothing is written for them.


use std::{io::Write, process::ExitCode};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    config::{DEFAULT_FSAL_STATS, DEFAULT_NFSV3_STATS, DumpConfig},
    services::admin::{AdminError, AdminService, CallResult},
};

/// What the daemon reported for a dump request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// Both statistics files were written
    Dumped,
    /// The daemon could not dump; carries its diagnostic
    Failed(String),
}

impl From<CallResult> for DumpOutcome {
    fn from(result: CallResult) -> Self {
        if result.success {
            DumpOutcome::Dumped
        } else {
            DumpOutcome::Failed(result.message)
        }
    }
}

impl DumpOutcome {
    /// Process exit status for this outcome.
    pub fn code(&self) -> u8 {
        match self {
            DumpOutcome::Dumped => 0,
            DumpOutcome::Failed(_) => 1,
        }
    }

    /// [`Self::code`] as an [`ExitCode`].
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Lines reported to the user for this outcome.
    ///
    /// The daemon always writes to the default dump paths, so those are the
    /// ones named on success regardless of configuration.
    pub fn lines(&self) -> Vec<String> {
        match self {
            DumpOutcome::Dumped => vec![
                format!("Dumped GPFS fsal stats to {DEFAULT_FSAL_STATS} file"),
                format!("Dumped NFSv3 OP stats to {DEFAULT_NFSV3_STATS} file"),
            ],
            DumpOutcome::Failed(message) => vec![format!("Dumping stats failed: {message}")],
        }
    }
}

/// Asks the daemon to dump its statistics and reports the result.
pub struct StatsDumpInvoker<S> {
    service: S,
    dump: DumpConfig,
}

impl<S: AdminService> StatsDumpInvoker<S> {
    /// Creates an invoker over `service`; `dump` names where the stats files
    /// are read back from.
    pub fn new(service: S, dump: DumpConfig) -> Self {
        Self { service, dump }
    }

    /// Where the statistics files are read back from.
    pub fn dump_config(&self) -> &DumpConfig {
        &self.dump
    }

    /// Calls `fsal_stats` once.
    ///
    /// # Errors
    /// Returns the transport error if the call could not be completed.
    #[instrument(skip(self))]
    pub async fn invoke(&self) -> std::result::Result<DumpOutcome, AdminError> {
        let outcome = DumpOutcome::from(self.service.fsal_stats().await?);

        match &outcome {
            DumpOutcome::Dumped => info!("Daemon dumped statistics"),
            DumpOutcome::Failed(message) => warn!(%message, "Daemon refused to dump statistics"),
        }

        Ok(outcome)
    }

    /// Calls `fsal_stats` and writes the outcome lines to `out`.
    ///
    /// # Errors
    /// Returns `CtlError::Admin` on transport failure, in which case nothing
    /// is written, or `CtlError::Io` if writing fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<DumpOutcome> {
        let outcome = self.invoke().await?;

        for line in outcome.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        Ok(outcome)
    }
}
