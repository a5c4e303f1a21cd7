//! Scaffold service behavior: skeleton layout, seeding, idempotence.

use std::path::{Path, PathBuf};

use phpenv_adapters::{MemoryFilesystem, builtin_templates};
use phpenv_core::{CopyPolicy, DirOutcome, FileOutcome, Filesystem, ScaffoldService};

fn service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), builtin_templates())
}

fn p(s: &str) -> PathBuf {
    PathBuf::from(s)
}

#[test]
fn build_lays_out_the_full_skeleton() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("work");
    service(&fs).build(Path::new("work")).unwrap();

    for dir in [
        "work/phpenv",
        "work/phpenv/docker/php/sites-available",
        "work/phpenv/src/public",
        "work/phpenv/src/private/db",
    ] {
        assert!(fs.is_dir(Path::new(dir)), "missing directory {dir}");
    }
    for file in [
        "work/phpenv/docker-compose.yml",
        "work/phpenv/docker/php/Dockerfile",
        "work/phpenv/docker/php/apache2.conf",
        "work/phpenv/docker/php/sites-available/000-default.conf",
    ] {
        let content = fs.read_file(&p(file)).unwrap_or_default();
        assert!(!content.is_empty(), "template file {file} is empty");
    }
}

#[test]
fn build_twice_is_a_noop_and_preserves_content() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("work");
    let svc = service(&fs);

    let first = svc.build(Path::new("work")).unwrap();
    assert!(!first.is_noop());

    let before = fs.read_file(&p("work/phpenv/docker-compose.yml")).unwrap();
    let second = svc.build(Path::new("work")).unwrap();
    assert!(second.is_noop());
    assert!(
        second
            .files
            .iter()
            .all(|(_, o)| *o == FileOutcome::SkippedExists)
    );
    assert_eq!(
        fs.read_file(&p("work/phpenv/docker-compose.yml")).unwrap(),
        before
    );
}

#[test]
fn ensure_dir_distinguishes_created_from_existing() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    assert_eq!(
        svc.ensure_dir(Path::new("a/b")).unwrap(),
        DirOutcome::Created
    );
    assert_eq!(
        svc.ensure_dir(Path::new("a/b")).unwrap(),
        DirOutcome::AlreadyExists
    );
}

#[test]
fn ensure_file_populates_an_existing_empty_file() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/empty.conf", "");
    let svc = service(&fs);

    let outcome = svc
        .ensure_file(Path::new("work/empty.conf"), Some("payload"))
        .unwrap();
    assert_eq!(outcome, FileOutcome::Populated);
    assert_eq!(
        fs.read_file(&p("work/empty.conf")).as_deref(),
        Some("payload")
    );

    // repeated calls after the populate are no-ops
    let again = svc
        .ensure_file(Path::new("work/empty.conf"), Some("other"))
        .unwrap();
    assert_eq!(again, FileOutcome::SkippedExists);
    assert_eq!(
        fs.read_file(&p("work/empty.conf")).as_deref(),
        Some("payload")
    );
}

#[test]
fn ensure_file_never_touches_non_empty_files() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/full.conf", "user content");
    let svc = service(&fs);

    let outcome = svc
        .ensure_file(Path::new("work/full.conf"), Some("payload"))
        .unwrap();
    assert_eq!(outcome, FileOutcome::SkippedExists);
    assert_eq!(
        fs.read_file(&p("work/full.conf")).as_deref(),
        Some("user content")
    );
}

#[test]
fn ensure_file_without_payload_creates_empty_file() {
    let fs = MemoryFilesystem::new();
    fs.add_dir("work");
    let svc = service(&fs);

    assert_eq!(
        svc.ensure_file(Path::new("work/blank"), None).unwrap(),
        FileOutcome::Created
    );
    assert_eq!(fs.read_file(&p("work/blank")).as_deref(), Some(""));
    assert_eq!(
        svc.ensure_file(Path::new("work/blank"), None).unwrap(),
        FileOutcome::SkippedExists
    );
}

#[test]
fn merge_sources_lands_cwd_files_in_public() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "<?php phpinfo();");
    let svc = service(&fs);

    svc.build(Path::new("work")).unwrap();
    let report = svc
        .merge_sources(Path::new("work"), &CopyPolicy::new(false, true))
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(
        fs.read_file(&p("work/phpenv/src/public/index.php"))
            .as_deref(),
        Some("<?php phpinfo();")
    );
    // the original stays put without a delete policy
    assert!(fs.exists(Path::new("work/index.php")));
}

#[test]
fn rerun_after_delete_copies_only_new_files() {
    let fs = MemoryFilesystem::new();
    fs.add_file("work/index.php", "v1");
    let svc = service(&fs);

    svc.build(Path::new("work")).unwrap();
    svc.merge_sources(Path::new("work"), &CopyPolicy::new(true, false))
        .unwrap();
    assert!(!fs.exists(Path::new("work/index.php")));

    // a fresh index.php appears; destination already has the old copy,
    // so without overwrite it is skipped per-file
    fs.add_file("work/index.php", "v2");
    fs.add_file("work/about.php", "about");
    let report = svc
        .merge_sources(Path::new("work"), &CopyPolicy::new(false, false))
        .unwrap();

    assert_eq!(report.copied, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        fs.read_file(&p("work/phpenv/src/public/index.php"))
            .as_deref(),
        Some("v1")
    );
    assert_eq!(
        fs.read_file(&p("work/phpenv/src/public/about.php"))
            .as_deref(),
        Some("about")
    );
}
