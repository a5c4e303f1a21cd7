//! The fixed scaffold layout.
//!
//! Every path the tool creates is a constant relative to one root
//! directory, [`SCAFFOLD_DIR_NAME`]. Nothing in this module touches the
//! filesystem; it only knows where things go, not how they get there.

use std::path::{Path, PathBuf};

/// Name of the generated root directory.
///
/// This doubles as the standing exclusion name for tree merges: a merge
/// rooted in the same working directory must never copy the scaffold
/// into itself.
pub const SCAFFOLD_DIR_NAME: &str = "phpenv";

/// Executable the `start` command looks for on the PATH.
pub const ORCHESTRATOR: &str = "docker-compose";

// Relative paths under the scaffold root.
const COMPOSE_FILE: &str = "docker-compose.yml";
const DOCKERFILE: &str = "docker/php/Dockerfile";
const APACHE_CONF: &str = "docker/php/apache2.conf";
const VHOST_CONF: &str = "docker/php/sites-available/000-default.conf";
const SITES_AVAILABLE_DIR: &str = "docker/php/sites-available";
const PUBLIC_DIR: &str = "src/public";
const PRIVATE_DB_DIR: &str = "src/private/db";

/// Static content payloads for the seeded configuration files.
///
/// The core treats these as opaque text; the adapters crate supplies the
/// real built-in payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplatePack {
    pub compose: &'static str,
    pub dockerfile: &'static str,
    pub apache_conf: &'static str,
    pub vhost_conf: &'static str,
}

/// Absolute paths of the scaffold tree rooted under a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    root: PathBuf,
}

impl ScaffoldLayout {
    /// Layout rooted at `base/phpenv`.
    pub fn under(base: impl AsRef<Path>) -> Self {
        Self {
            root: base.as_ref().join(SCAFFOLD_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn compose_file(&self) -> PathBuf {
        self.root.join(COMPOSE_FILE)
    }

    pub fn dockerfile(&self) -> PathBuf {
        self.root.join(DOCKERFILE)
    }

    pub fn apache_conf(&self) -> PathBuf {
        self.root.join(APACHE_CONF)
    }

    pub fn vhost_conf(&self) -> PathBuf {
        self.root.join(VHOST_CONF)
    }

    pub fn sites_available_dir(&self) -> PathBuf {
        self.root.join(SITES_AVAILABLE_DIR)
    }

    /// Destination of the source merge (`phpenv/src/public`).
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(PUBLIC_DIR)
    }

    /// Mount point for database init scripts (`phpenv/src/private/db`).
    pub fn private_db_dir(&self) -> PathBuf {
        self.root.join(PRIVATE_DB_DIR)
    }
}
