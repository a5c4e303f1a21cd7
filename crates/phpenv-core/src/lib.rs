//! Phpenv Core - scaffold layout, copy policy, and the tree-merge engine.
//!
//! This crate provides the application core for the `phpenv` scaffolding
//! tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           phpenv-cli (CLI)              │
//! │     (parses args, drives services)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, TreeMerger)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Filesystem Port (Trait)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    phpenv-adapters (Infrastructure)     │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use phpenv_core::{CopyPolicy, ScaffoldService, TemplatePack};
//!
//! // Adapters are injected; see phpenv-adapters for implementations.
//! let service = ScaffoldService::new(filesystem, TemplatePack::default());
//! let report = service.build(std::path::Path::new(".")).unwrap();
//! let merged = service
//!     .merge_sources(std::path::Path::new("."), &CopyPolicy::new(false, true))
//!     .unwrap();
//! ```

pub mod error;
pub mod layout;
pub mod merge;
pub mod policy;
pub mod ports;
pub mod scaffold;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{ScaffoldError, ScaffoldResult};
    pub use crate::layout::{SCAFFOLD_DIR_NAME, ScaffoldLayout, TemplatePack};
    pub use crate::merge::{MergeFailure, MergeReport, TreeMerger};
    pub use crate::policy::CopyPolicy;
    pub use crate::ports::Filesystem;
    pub use crate::scaffold::{BuildReport, DirOutcome, FileOutcome, ScaffoldService};
}

pub use error::{ScaffoldError, ScaffoldResult};
pub use layout::{SCAFFOLD_DIR_NAME, ScaffoldLayout, TemplatePack};
pub use merge::{MergeFailure, MergeReport, TreeMerger};
pub use policy::CopyPolicy;
pub use ports::Filesystem;
pub use scaffold::{BuildReport, DirOutcome, FileOutcome, ScaffoldService};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
