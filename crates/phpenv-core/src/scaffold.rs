//! Scaffold service - lays out the fixed project skeleton.
//!
//! Composes the idempotent creation primitives (`ensure_dir`,
//! `ensure_file`) to produce the tree described by
//! [`ScaffoldLayout`](crate::layout::ScaffoldLayout), then merges the
//! caller's sources into `phpenv/src/public` via the
//! [`TreeMerger`](crate::merge::TreeMerger).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    error::ScaffoldResult,
    layout::{ScaffoldLayout, TemplatePack},
    merge::{MergeReport, TreeMerger},
    policy::CopyPolicy,
    ports::Filesystem,
};

/// Outcome of an idempotent directory creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExists,
}

/// Outcome of an idempotent file seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// File did not exist and was created (with its payload, if any).
    Created,
    /// File existed but was empty; the payload was written into it.
    Populated,
    /// File existed with content, or no payload was supplied. No write.
    SkippedExists,
}

/// What `build` did, entry by entry, for user-facing status lines.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub dirs: Vec<(PathBuf, DirOutcome)>,
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl BuildReport {
    /// True when nothing was written: every entry already existed.
    pub fn is_noop(&self) -> bool {
        self.dirs.iter().all(|(_, d)| *d == DirOutcome::AlreadyExists)
            && self
                .files
                .iter()
                .all(|(_, f)| *f == FileOutcome::SkippedExists)
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    fs: Box<dyn Filesystem>,
    templates: TemplatePack,
}

impl ScaffoldService {
    pub fn new(fs: Box<dyn Filesystem>, templates: TemplatePack) -> Self {
        Self { fs, templates }
    }

    /// Idempotently ensure a directory exists, intermediates included.
    pub fn ensure_dir(&self, path: &Path) -> ScaffoldResult<DirOutcome> {
        if self.fs.is_dir(path) {
            debug!(path = %path.display(), "directory exists, skipped");
            return Ok(DirOutcome::AlreadyExists);
        }
        self.fs.create_dir_all(path)?;
        debug!(path = %path.display(), "directory created");
        Ok(DirOutcome::Created)
    }

    /// Idempotently ensure a file exists, seeding `content` at most once.
    ///
    /// An existing empty file gets the payload written into it; an
    /// existing non-empty file is never touched. Repeated calls after the
    /// first successful populate are no-ops.
    pub fn ensure_file(&self, path: &Path, content: Option<&str>) -> ScaffoldResult<FileOutcome> {
        if !self.fs.exists(path) {
            self.fs.write_file(path, content.unwrap_or(""))?;
            debug!(path = %path.display(), "file created");
            return Ok(FileOutcome::Created);
        }
        if let Some(data) = content {
            if self.fs.file_size(path)? == 0 {
                self.fs.write_file(path, data)?;
                debug!(path = %path.display(), "payload written into empty file");
                return Ok(FileOutcome::Populated);
            }
        }
        debug!(path = %path.display(), "file exists, skipped");
        Ok(FileOutcome::SkippedExists)
    }

    /// Lay out the fixed skeleton under `base/phpenv`.
    ///
    /// All paths and payloads are constants; calling this twice on the
    /// same base produces an identical tree and rewrites nothing.
    #[instrument(skip_all, fields(base = %base.display()))]
    pub fn build(&self, base: &Path) -> ScaffoldResult<BuildReport> {
        let layout = ScaffoldLayout::under(base);
        let mut report = BuildReport::default();

        let root = layout.root().to_path_buf();
        let root_outcome = self.ensure_dir(&root)?;
        report.dirs.push((root, root_outcome));

        let compose = layout.compose_file();
        let outcome = self.ensure_file(&compose, Some(self.templates.compose))?;
        report.files.push((compose, outcome));

        for dir in [
            layout.sites_available_dir(),
            layout.public_dir(),
            layout.private_db_dir(),
        ] {
            let outcome = self.ensure_dir(&dir)?;
            report.dirs.push((dir, outcome));
        }

        for (file, payload) in [
            (layout.dockerfile(), self.templates.dockerfile),
            (layout.apache_conf(), self.templates.apache_conf),
            (layout.vhost_conf(), self.templates.vhost_conf),
        ] {
            let outcome = self.ensure_file(&file, Some(payload))?;
            report.files.push((file, outcome));
        }

        info!("scaffold skeleton laid out");
        Ok(report)
    }

    /// Merge the caller's tree at `base` into `base/phpenv/src/public`.
    ///
    /// The scaffold directory itself is excluded by the policy invariant,
    /// so scaffolding and sources can share a working directory.
    #[instrument(skip_all, fields(base = %base.display()))]
    pub fn merge_sources(&self, base: &Path, policy: &CopyPolicy) -> ScaffoldResult<MergeReport> {
        let layout = ScaffoldLayout::under(base);
        TreeMerger::new(self.fs.as_ref()).merge(base, &layout.public_dir(), policy)
    }
}
