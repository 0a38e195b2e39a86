//! CLI for the imgpath URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use imgpath_core::config::{self, ImgpathConfig};
use imgpath_core::StoreLocations;
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_resolve, run_show_config};

/// Top-level CLI for imgpath.
#[derive(Debug, Parser)]
#[command(name = "imgpath")]
#[command(about = "imgpath: map locally served image URLs to files on disk", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/imgpath/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve URLs to local file paths.
    Resolve {
        /// Absolute or root-relative URLs.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Also fail for URLs whose resolved file does not exist.
        #[arg(long)]
        check_exists: bool,
    },

    /// Report whether URLs are served by this site.
    Check {
        /// Absolute or root-relative URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the config file location and effective values.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<(ImgpathConfig, PathBuf)> {
    match path {
        Some(p) => Ok((config::load_from(p)?, p.to_path_buf())),
        None => Ok((config::load_or_init()?, config::config_path()?)),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let (cfg, cfg_path) = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config from {}: {:?}", cfg_path.display(), cfg);
        let store = StoreLocations::new(cfg);

        match cli.command {
            CliCommand::Resolve { urls, check_exists } => run_resolve(&store, &urls, check_exists)?,
            CliCommand::Check { urls } => run_check(&store, &urls),
            CliCommand::Config => run_show_config(&store, &cfg_path)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
