//! Filesystem adapters implementing `phpenv_core::ports::Filesystem`.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
