//! Infrastructure adapters for phpenv.
//!
//! This crate implements the port defined in `phpenv_core::ports` and
//! ships the built-in configuration payloads. All external I/O lives
//! here; the core stays pure.

pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::builtin_templates;
