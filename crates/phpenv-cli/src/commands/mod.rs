//! Command handlers. One module per subcommand; no business logic here,
//! only wiring between CLI arguments, adapters, and core services.

pub mod completions;
pub mod create;
pub mod start;
