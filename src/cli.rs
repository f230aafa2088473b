//! Command-line interface definitions for routegen.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes (#[arg(help = "...")]),
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::config::ManifestConfig;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for routegen.
#[derive(Parser)]
#[command(
    name = "routegen",
    version = crate::VERSION,
    about = "Regenerate routes.json from a directory of GPX files",
    long_about = "Scans a routes directory for .gpx files and writes a JSON manifest \
                  listing each route's display name and relative file path"
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: ./routegen.toml when present)
    #[arg(long, global = true, env = "ROUTEGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Scan the routes directory and rewrite the manifest
    Generate {
        #[command(flatten)]
        manifest: ManifestArgs,

        /// Print the manifest to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify the manifest on disk matches the routes directory
    Check {
        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// List the routes that would be written
    List {
        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that builds a manifest.
///
/// Unset options fall back to the environment, then the config file, then
/// the built-in defaults.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestArgs {
    /// Directory scanned for route files [default: routes]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub routes_dir: Option<PathBuf>,

    /// Manifest destination [default: routes.json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Route file extension, matched case-sensitively [default: gpx]
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Sort entries by file name instead of directory order
    #[arg(long)]
    pub sort: bool,

    /// Write non-ASCII characters as-is instead of \uXXXX escapes
    #[arg(long)]
    pub no_ascii: bool,

    /// Leave out files matching a pattern (`prefix*`, `*suffix`, `*text*`); repeatable
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,
}

impl ManifestArgs {
    /// Layer these flags over an already resolved configuration.
    pub fn apply(&self, config: &mut ManifestConfig) {
        if let Some(dir) = &self.routes_dir {
            config.routes_dir.clone_from(dir);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(extension) = &self.extension {
            config.extension.clone_from(extension);
        }
        if self.sort {
            config.sort = true;
        }
        if self.no_ascii {
            config.ensure_ascii = false;
        }
        config.ignore_patterns.extend(self.ignore.iter().cloned());
    }
}
