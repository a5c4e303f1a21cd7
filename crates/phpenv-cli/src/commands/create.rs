//! Implementation of the `phpenv create` command.
//!
//! Responsibility: wire the local filesystem adapter and built-in
//! templates into the core scaffold service, then display what happened.
//! Merge failures are reported as warnings — the command still succeeds,
//! matching the "best effort, report and continue" contract.

use std::path::Path;

use tracing::{info, instrument};

use phpenv_adapters::{LocalFilesystem, builtin_templates};
use phpenv_core::{BuildReport, CopyPolicy, DirOutcome, FileOutcome, MergeReport, ScaffoldService};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `phpenv create` command.
///
/// Sequence:
/// 1. Lay out the scaffold skeleton (idempotent)
/// 2. Merge the current directory into `phpenv/src/public`
/// 3. Report per-entry failures without failing the run
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), builtin_templates());

    output.header("Creating docker environment")?;
    info!(base = %cwd.display(), "scaffold started");

    let build = service.build(&cwd).map_err(CliError::Core)?;
    render_build(&build, &cwd, &output)?;

    // CLI flags OR into the configured defaults.
    let policy = CopyPolicy::new(
        args.delete_originals || config.create.delete_originals,
        args.overwrite || config.create.overwrite,
    );

    output.print("")?;
    output.info("copying sources into phpenv/src/public")?;
    let merged = service.merge_sources(&cwd, &policy).map_err(CliError::Core)?;
    render_merge(&merged, &output)?;

    info!(
        copied = merged.copied,
        failures = merged.failures.len(),
        "scaffold completed"
    );
    output.success("Project setup completed")?;

    if !global.quiet && merged.is_clean() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  phpenv start   # docker-compose up inside ./phpenv")?;
        output.print("  open http://localhost:8080")?;
    }

    Ok(())
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_build(report: &BuildReport, base: &Path, out: &OutputManager) -> CliResult<()> {
    for (path, outcome) in &report.dirs {
        let shown = path.strip_prefix(base).unwrap_or(path);
        match outcome {
            DirOutcome::Created => out.print(&format!("  created {}/", shown.display()))?,
            DirOutcome::AlreadyExists => {
                out.print(&format!("  exists  {}/", shown.display()))?;
            }
        }
    }
    for (path, outcome) in &report.files {
        let shown = path.strip_prefix(base).unwrap_or(path);
        match outcome {
            FileOutcome::Created => out.print(&format!("  created {}", shown.display()))?,
            FileOutcome::Populated => {
                out.print(&format!("  seeded  {}", shown.display()))?;
            }
            FileOutcome::SkippedExists => {
                out.print(&format!("  exists  {}", shown.display()))?;
            }
        }
    }
    Ok(())
}

fn render_merge(report: &MergeReport, out: &OutputManager) -> CliResult<()> {
    out.print(&format!(
        "  {} copied, {} skipped, {} deleted",
        report.copied, report.skipped, report.deleted
    ))?;
    for failure in &report.failures {
        out.warning(&format!(
            "could not copy {} -> {}: {}",
            failure.src.display(),
            failure.dest.display(),
            failure.message
        ))?;
    }
    Ok(())
}
