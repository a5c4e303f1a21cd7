//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// The subcommand is optional on purpose: a bare `phpenv` prints usage
/// and exits successfully instead of failing.
#[derive(Debug, Parser)]
#[command(
    name    = "phpenv",
    bin_name = "phpenv",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f40b} Dockerised PHP development environments",
    long_about = "phpenv scaffolds a docker-compose based PHP + Apache + MySQL \
                  development environment and merges your project sources into it.",
    after_help = "EXAMPLES:\n\
        \x20 phpenv create           # scaffold ./phpenv and copy sources into src/public\n\
        \x20 phpenv create -d        # delete originals after a successful copy\n\
        \x20 phpenv create -o        # overwrite files already present in src/public\n\
        \x20 phpenv start            # run docker-compose up inside ./phpenv",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; absent means "show help".
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the docker folder/file structure.
    #[command(
        visible_alias = "c",
        about = "Create the docker environment scaffold",
        after_help = "EXAMPLES:\n\
            \x20 phpenv create\n\
            \x20 phpenv create -d      # remove originals once copied\n\
            \x20 phpenv create -d -o   # also overwrite existing copies"
    )]
    Create(CreateArgs),

    /// Start the docker process (docker-compose up).
    #[command(about = "Start the containers via docker-compose")]
    Start,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 phpenv completions bash > ~/.local/share/bash-completion/completions/phpenv\n\
            \x20 phpenv completions zsh  > ~/.zfunc/_phpenv"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `phpenv create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Delete the original files after a successful copy.
    #[arg(
        short = 'd',
        long = "delete-originals",
        help = "Delete originals after successful copy"
    )]
    pub delete_originals: bool,

    /// Overwrite destination files that already exist.
    #[arg(
        short = 'o',
        long = "overwrite",
        help = "Overwrite files already present in src/public"
    )]
    pub overwrite: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `phpenv completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
