//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::platform::DATA_DIR_ENV;

/// Retrodock - Retro game unit distribution and installation.
#[derive(Debug, Parser)]
#[command(name = "retrodock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding installed units (overrides the platform default)
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download and install a unit by id, URL, or path
    Pull(PullArgs),

    /// Pack a unit into a zip archive
    Pack(PackArgs),

    /// Unpack a unit's files to a directory
    Unpack(UnpackArgs),

    /// Remove an installed unit
    Rm(RmArgs),

    /// List installed games
    Games(ListArgs),

    /// List installed boots
    Boots(ListArgs),

    /// List installed agents
    Agents(ListArgs),

    /// Show data directories and configured sources
    Info,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PullArgs {
    /// Id, URL, or path of the unit
    pub target: String,

    /// Pull even if the unit is already installed
    #[arg(short, long)]
    pub force: bool,

    /// Unpack the unit's files instead of installing the archive
    #[arg(long)]
    pub unpack: bool,

    /// Destination directory or file (overrides the builtin directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Timeout for each download attempt, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Search these sources instead of the configured ones (repeatable)
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Search these sources after the configured ones (repeatable)
    #[arg(long = "extra-source", value_name = "SOURCE")]
    pub extra_sources: Vec<String>,

    /// Also pull the boot runtime declared by the pulled unit
    #[arg(long)]
    pub boot: bool,
}

/// Arguments for the `pack` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackArgs {
    /// Id or path of the unit
    pub target: String,

    /// Destination directory or archive path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `unpack` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnpackArgs {
    /// Id or path of the unit
    pub target: String,

    /// Destination directory
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `rm` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RmArgs {
    /// Id of the installed unit
    pub target: String,
}

/// Arguments for the listing commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pull_parses_repeated_sources() {
        let cli = Cli::parse_from([
            "retrodock",
            "pull",
            "pong",
            "--source",
            "https://a.example/releases/",
            "--source",
            "https://b.example/releases/",
            "--force",
        ]);

        let Commands::Pull(args) = cli.command else {
            panic!("expected pull");
        };
        assert_eq!(args.target, "pong");
        assert_eq!(args.sources.len(), 2);
        assert!(args.force);
        assert!(!args.unpack);
    }

    #[test]
    fn data_dir_is_global() {
        let cli = Cli::parse_from(["retrodock", "games", "--data-dir", "/tmp/retro"]);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/retro")));
    }
}
