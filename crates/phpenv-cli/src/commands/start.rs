//! Implementation of the `phpenv start` command.
//!
//! Probes the PATH for the orchestrator, then runs `docker-compose up`
//! inside the scaffold directory with inherited standard streams. A
//! missing orchestrator is a remediation message, not a failure; the
//! probe happens before anything else so we never change directory when
//! there is nothing to launch.

use std::process::Command;

use tracing::{debug, info, instrument};

use phpenv_core::layout::{ORCHESTRATOR, SCAFFOLD_DIR_NAME};

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `phpenv start` command.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match which::which(ORCHESTRATOR) {
        Ok(path) => debug!(path = %path.display(), "orchestrator found"),
        Err(_) => {
            output.error(&format!("{ORCHESTRATOR} was not found on your PATH"))?;
            output.print("Install Docker Desktop, found here:")?;
            output.print("https://www.docker.com/products/docker-desktop")?;
            output.print(
                "(On Windows, make sure the Hyper-V features or the required \
                 WSL 2 components are enabled during installation.)",
            )?;
            // Remediation, not failure: exit 0 so shell scripts can probe.
            return Ok(());
        }
    }

    let scaffold_dir = std::env::current_dir()?.join(SCAFFOLD_DIR_NAME);
    if !scaffold_dir.is_dir() {
        return Err(CliError::ScaffoldMissing { path: scaffold_dir });
    }

    output.info("starting containers")?;
    info!(dir = %scaffold_dir.display(), "running {} up", ORCHESTRATOR);

    // Inherit stdio: compose output streams straight to the user and runs
    // until interrupted or the containers stop.
    let status = Command::new(ORCHESTRATOR)
        .arg("up")
        .current_dir(&scaffold_dir)
        .status()
        .map_err(|e| CliError::IoError {
            message: format!("failed to launch {ORCHESTRATOR}"),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        // None means killed by a signal; report as a generic failure.
        let code = status.code().unwrap_or(1).clamp(0, u8::MAX as i32) as u8;
        Err(CliError::OrchestratorExit { code })
    }
}
