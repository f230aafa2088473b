use anyhow::Result;
use clap::Parser;
use routegen::cli::{Cli, Commands, ManifestArgs};
use routegen::commands;
use routegen::output::{self, Verbosity};
use routegen::utils::logging;
use std::process;

fn main() {
    if let Err(e) = run() {
        output::error(&format!("{e:#}"));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    output::set_verbosity(verbosity);
    logging::init(verbosity);

    let config_path = cli.config.as_deref();

    // Bare `routegen` behaves like the original one-shot script
    match cli.command.unwrap_or(Commands::Generate {
        manifest: ManifestArgs::default(),
        dry_run: false,
    }) {
        Commands::Generate { manifest, dry_run } => {
            let config = commands::resolve_config(config_path, &manifest)?;
            commands::generate::execute(&config, dry_run)?;
        }
        Commands::Check { manifest } => {
            let config = commands::resolve_config(config_path, &manifest)?;
            commands::check::execute(&config)?;
        }
        Commands::List { manifest } => {
            let config = commands::resolve_config(config_path, &manifest)?;
            commands::list::execute(&config)?;
        }
        Commands::Completion { shell } => {
            commands::completion::execute(shell);
        }
    }

    Ok(())
}
