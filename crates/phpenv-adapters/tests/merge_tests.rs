//! Merge engine behavior, driven through the in-memory adapter.

use std::path::{Path, PathBuf};

use phpenv_adapters::MemoryFilesystem;
use phpenv_core::{CopyPolicy, ScaffoldResult, TreeMerger, ports::Filesystem};

fn p(s: &str) -> PathBuf {
    PathBuf::from(s)
}

#[test]
fn merge_copies_every_non_excluded_file() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "<?php echo 1;");
    fs.add_file("work/assets/style.css", "body {}");
    fs.add_file("work/assets/img/logo.svg", "<svg/>");
    fs.add_dir("dest");

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(false, true))
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.copied, 3);
    assert_eq!(
        fs.read_file(&p("dest/index.php")).as_deref(),
        Some("<?php echo 1;")
    );
    assert_eq!(
        fs.read_file(&p("dest/assets/img/logo.svg")).as_deref(),
        Some("<svg/>")
    );
}

#[test]
fn merge_creates_missing_destination_tree() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/a.php", "a");

    TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("out/deep/public"), &CopyPolicy::default())
        .unwrap();

    assert!(fs.is_dir(Path::new("out/deep/public")));
    assert!(fs.read_file(&p("out/deep/public/a.php")).is_some());
}

#[test]
fn overwrite_gate_protects_existing_destination_content() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "new content");
    fs.add_file("dest/index.php", "original");

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(false, false))
        .unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(report.copied, 0);
    assert_eq!(fs.read_file(&p("dest/index.php")).as_deref(), Some("original"));
}

#[test]
fn overwrite_replaces_existing_destination_content() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "new content");
    fs.add_file("dest/index.php", "original");

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(false, true))
        .unwrap();

    assert_eq!(report.copied, 1);
    assert_eq!(
        fs.read_file(&p("dest/index.php")).as_deref(),
        Some("new content")
    );
}

#[test]
fn delete_source_removes_files_and_emptied_directories() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/sub/a.php", "a");
    fs.add_file("work/sub/b.php", "b");

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(true, true))
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.copied, 2);
    // two files + the emptied directory
    assert_eq!(report.deleted, 3);
    assert!(!fs.exists(Path::new("work/sub/a.php")));
    assert!(!fs.is_dir(Path::new("work/sub")));
    assert!(fs.read_file(&p("dest/sub/b.php")).is_some());
}

#[test]
fn delete_source_spares_directories_that_still_hold_entries() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/sub/keep", "x");
    fs.add_file("work/sub/copy.php", "y");

    // "keep" is ignored at every level, so it is neither copied nor deleted
    // and its directory must survive.
    let policy = CopyPolicy::new(true, true).with_ignored(["keep"]);
    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &policy)
        .unwrap();

    assert!(report.is_clean());
    assert!(fs.is_dir(Path::new("work/sub")));
    assert!(fs.exists(Path::new("work/sub/keep")));
    assert!(!fs.exists(Path::new("work/sub/copy.php")));
    assert!(fs.read_file(&p("dest/sub/copy.php")).is_some());
    assert!(!fs.exists(Path::new("dest/sub/keep")));
}

#[test]
fn skipped_destination_still_deletes_source_under_delete_policy() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "new");
    fs.add_file("dest/index.php", "old");

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(true, false))
        .unwrap();

    // presence at the destination counts as success for deletion purposes
    assert_eq!(report.skipped, 1);
    assert_eq!(report.deleted, 1);
    assert!(!fs.exists(Path::new("work/index.php")));
    assert_eq!(fs.read_file(&p("dest/index.php")).as_deref(), Some("old"));
}

#[test]
fn scaffold_directory_is_never_merged_into_itself() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "site");
    fs.add_file("work/phpenv/docker-compose.yml", "services: {}");

    let report = TreeMerger::new(&fs)
        .merge(
            Path::new("work"),
            Path::new("work/phpenv/src/public"),
            &CopyPolicy::new(false, true),
        )
        .unwrap();

    assert!(report.is_clean());
    assert!(fs.read_file(&p("work/phpenv/src/public/index.php")).is_some());
    // nothing under phpenv/ was treated as a source
    assert!(
        !fs.exists(Path::new("work/phpenv/src/public/phpenv")),
        "scaffold copied into itself"
    );
    assert!(!fs.exists(Path::new("work/phpenv/src/public/docker-compose.yml")));
}

#[test]
fn merge_on_missing_source_is_a_structural_error() {
    let fs = MemoryFilesystem::new();
    let result = TreeMerger::new(&fs).merge(
        Path::new("nowhere"),
        Path::new("dest"),
        &CopyPolicy::default(),
    );
    assert!(result.is_err());
}

// ── per-entry failure collection ──────────────────────────────────────────────

/// Wrapper that fails `copy_file` for one file name, to prove a failing
/// entry never aborts the run.
struct DenyCopy {
    inner: MemoryFilesystem,
    deny: &'static str,
}

impl Filesystem for DenyCopy {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.inner.create_dir_all(path)
    }
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<String>> {
        self.inner.list_dir(path)
    }
    fn file_size(&self, path: &Path) -> ScaffoldResult<u64> {
        self.inner.file_size(path)
    }
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        self.inner.write_file(path, content)
    }
    fn copy_file(&self, src: &Path, dest: &Path) -> ScaffoldResult<()> {
        if src.file_name().is_some_and(|n| n == self.deny) {
            return Err(phpenv_core::ScaffoldError::Filesystem {
                path: src.to_path_buf(),
                reason: "Failed to copy file: permission denied".into(),
            });
        }
        self.inner.copy_file(src, dest)
    }
    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        self.inner.remove_file(path)
    }
    fn remove_empty_dir(&self, path: &Path) -> ScaffoldResult<()> {
        self.inner.remove_empty_dir(path)
    }
}

#[test]
fn copy_failure_is_recorded_and_siblings_continue() {
    let inner = MemoryFilesystem::new();
    inner.add_file("work/broken.php", "x");
    inner.add_file("work/ok.php", "y");
    let fs = DenyCopy {
        inner: inner.clone(),
        deny: "broken.php",
    };

    let report = TreeMerger::new(&fs)
        .merge(Path::new("work"), Path::new("dest"), &CopyPolicy::new(false, true))
        .unwrap();

    assert_eq!(report.copied, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].src, p("work/broken.php"));
    assert!(report.failures[0].message.contains("permission denied"));
    assert!(inner.read_file(&p("dest/ok.php")).is_some());
}
