//! Recursive tree merge with per-entry error collection.
//!
//! The merge copies a source directory into a destination directory one
//! level at a time, honouring the [`CopyPolicy`]. A failure on one entry
//! is recorded in the [`MergeReport`] and traversal continues with the
//! remaining siblings; only a structural failure at the merge root (the
//! source cannot be listed at all) aborts the run.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    error::{ScaffoldError, ScaffoldResult},
    policy::CopyPolicy,
    ports::Filesystem,
};

/// One entry that could not be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeFailure {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub message: String,
}

/// Outcome of a merge run.
///
/// A non-empty failure list is informational: the run itself completed
/// and the counters describe what did happen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries that failed, in traversal order.
    pub failures: Vec<MergeFailure>,
    /// Files copied to the destination.
    pub copied: usize,
    /// Files left alone because the destination already had them.
    pub skipped: usize,
    /// Source files and directories removed under `delete_source`.
    pub deleted: usize,
}

impl MergeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, src: &Path, dest: &Path, message: impl Into<String>) {
        self.failures.push(MergeFailure {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            message: message.into(),
        });
    }
}

/// Depth-first merge engine over the [`Filesystem`] port.
pub struct TreeMerger<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> TreeMerger<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Merge `src` into `dest` under `policy`.
    ///
    /// Returns `Err` only when `src` itself cannot be listed; everything
    /// below that is best-effort and lands in the report.
    pub fn merge(
        &self,
        src: &Path,
        dest: &Path,
        policy: &CopyPolicy,
    ) -> ScaffoldResult<MergeReport> {
        if !self.fs.is_dir(src) {
            return Err(ScaffoldError::SourceUnreadable {
                path: src.to_path_buf(),
            });
        }
        let mut report = MergeReport::default();
        self.merge_level(src, dest, policy, &mut report)?;
        debug!(
            copied = report.copied,
            skipped = report.skipped,
            deleted = report.deleted,
            failures = report.failures.len(),
            "merge finished"
        );
        Ok(report)
    }

    /// Merge one directory level; recursion carries the shared report.
    fn merge_level(
        &self,
        src: &Path,
        dest: &Path,
        policy: &CopyPolicy,
        report: &mut MergeReport,
    ) -> ScaffoldResult<()> {
        let names = self.fs.list_dir(src)?;

        if !self.fs.is_dir(dest) {
            self.fs.create_dir_all(dest)?;
        }

        for name in names {
            if policy.is_ignored(&name) {
                debug!(name, "ignored by policy");
                continue;
            }
            let src_child = src.join(&name);
            let dest_child = dest.join(&name);

            if self.fs.is_dir(&src_child) {
                // A subtree that fails structurally is recorded and the
                // siblings still get their turn.
                if let Err(e) = self.merge_level(&src_child, &dest_child, policy, report) {
                    report.record(&src_child, &dest_child, e.to_string());
                    continue;
                }
                if policy.delete_source {
                    self.cleanup_source_dir(&src_child, report);
                }
            } else {
                self.merge_file(&src_child, &dest_child, policy, report);
            }
        }
        Ok(())
    }

    fn merge_file(&self, src: &Path, dest: &Path, policy: &CopyPolicy, report: &mut MergeReport) {
        if self.fs.exists(dest) && !policy.overwrite {
            debug!(dest = %dest.display(), "destination exists, copy skipped");
            report.skipped += 1;
            // Presence at the destination counts as success for deletion
            // purposes even though no copy happened.
            if policy.delete_source && self.fs.exists(src) {
                self.delete_source_file(src, dest, report);
            }
            return;
        }

        match self.fs.copy_file(src, dest) {
            Ok(()) => {
                debug!(src = %src.display(), "copied");
                report.copied += 1;
                if policy.delete_source {
                    self.delete_source_file(src, dest, report);
                }
            }
            Err(e) => {
                warn!(src = %src.display(), error = %e, "failed to copy");
                report.record(src, dest, e.to_string());
            }
        }
    }

    fn delete_source_file(&self, src: &Path, dest: &Path, report: &mut MergeReport) {
        match self.fs.remove_file(src) {
            Ok(()) => report.deleted += 1,
            Err(e) => report.record(src, dest, e.to_string()),
        }
    }

    /// Post-order cleanup: remove a source directory only once the merge
    /// has emptied it. A directory that still holds entries (skipped
    /// copies, failures) is left in place.
    fn cleanup_source_dir(&self, src: &Path, report: &mut MergeReport) {
        match self.fs.list_dir(src) {
            Ok(children) if children.is_empty() => match self.fs.remove_empty_dir(src) {
                Ok(()) => {
                    debug!(dir = %src.display(), "deleted empty source directory");
                    report.deleted += 1;
                }
                Err(e) => report.record(src, src, e.to_string()),
            },
            Ok(_) => {
                debug!(dir = %src.display(), "source directory not empty, left in place");
            }
            Err(e) => report.record(src, src, e.to_string()),
        }
    }
}
