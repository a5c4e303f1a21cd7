//! Shell completion generation via clap_complete.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Execute the `phpenv completions` command.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, name, &mut stdout),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut stdout),
    }

    Ok(())
}
