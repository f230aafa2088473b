use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::{Generator, generate};
use std::io;

/// Write a completion script for `shell` to stdout
pub fn execute<G: Generator>(shell: G) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
