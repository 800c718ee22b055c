use ngstate_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr if the log file is unavailable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("ngstate error: {:#}", err);
        std::process::exit(1);
    }
}
