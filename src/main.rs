//! dump-gpfs-stats - ask NFS-Ganesha to dump its FSAL and NFSv3 statistics.
//!
//! Prints two confirmation lines and exits 0 when the daemon dumped, prints
//! `Dumping stats failed: <reason>` and exits 1 when it refused. Bus and
//! configuration failures are returned from `main` and exit non-zero without
//! writing to stdout.

use std::{
    error::Error,
    io::{self, ErrorKind, IsTerminal, Write},
    path::Path,
    process::ExitCode,
};

use clap::Parser;
use ganeshactl::{
    CtlError,
    cli::{
        Cli,
        formatting::{format_error, format_stats_table},
    },
    config::Config,
    invoker::{DumpOutcome, StatsDumpInvoker},
    services::admin::DbusAdminService,
    stats, tracing_config,
};
use tracing::{debug, warn};

// The runtime is the bus client's threading setup; it exists before any
// connection is made and lives until the process exits.
#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    let (mut config, source) = Config::load_with_source(cli.config.as_deref())?;
    cli.apply(&mut config);

    tracing_config::init_cli_mode(config.general.log_level)?;
    debug!(%source, "Loaded configuration");

    let service =
        DbusAdminService::connect(config.bus.remote_object(), config.bus.timeout()).await?;
    let invoker = StatsDumpInvoker::new(service, config.dump);

    let mut stdout = io::stdout();
    let outcome = invoker.run(&mut stdout).await?;

    if cli.show && outcome == DumpOutcome::Dumped {
        show_fsal_stats(&invoker.dump_config().fsal_stats, &mut stdout)?;
    }

    Ok(outcome.exit_code())
}

/// Prints the FSAL stats table. A missing or unreadable dump does not change
/// the exit status; the dump itself already succeeded.
fn show_fsal_stats(path: &Path, out: &mut io::Stdout) -> io::Result<()> {
    match stats::read_fsal_stats(path) {
        Ok(stats) => {
            let styled = out.is_terminal();
            writeln!(out, "{}", format_stats_table(&stats, styled))?;
            out.flush()
        }
        Err(CtlError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "{} not found, the daemon may run on another host",
                path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                format_error(&format!("Could not read {}: {e}", path.display()))
            );
            Ok(())
        }
    }
}
