//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mithila_core::{build_all, clean, config::DEFAULT_DIST_DIR};

use crate::commands;

#[derive(Parser)]
#[command(name = "mithila-fonts")]
#[command(about = "Build and inspect the Mithila Devanagari prototype fonts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    #[arg(long, default_value = DEFAULT_DIST_DIR)]
    pub dist_dir: PathBuf,
    #[arg(short, long)]
    pub version: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build fonts and review pages, then validate them
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Report character coverage and metadata per font
    Validate {
        /// Font files to validate; defaults to every generated font in the
        /// dist directory
        paths: Vec<PathBuf>,
        #[arg(long, default_value = DEFAULT_DIST_DIR)]
        dist_dir: PathBuf,
    },
    /// Quick per-file summary of generated fonts
    Check {
        #[arg(long, default_value = DEFAULT_DIST_DIR)]
        dist_dir: PathBuf,
    },
    /// Regenerate the HTML review pages
    Report {
        #[arg(long, default_value = DEFAULT_DIST_DIR)]
        dist_dir: PathBuf,
    },
    /// Remove generated output
    Clean {
        #[arg(long, default_value = DEFAULT_DIST_DIR)]
        dist_dir: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Build { args } => build_all(&args.dist_dir, args.version),
            Commands::Validate { paths, dist_dir } => commands::validate(paths, &dist_dir),
            Commands::Check { dist_dir } => commands::check(&dist_dir),
            Commands::Report { dist_dir } => commands::report(&dist_dir),
            Commands::Clean { dist_dir } => clean(&dist_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_defaults_to_the_dist_dir() {
        let cli = Cli::try_parse_from(["mithila-fonts", "build"]).unwrap();
        match cli.command {
            Commands::Build { args } => {
                assert_eq!(args.dist_dir, PathBuf::from("dist"));
                assert!(args.version.is_none());
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn validate_accepts_explicit_paths() {
        let cli =
            Cli::try_parse_from(["mithila-fonts", "validate", "a.ttf", "b.ttf"]).unwrap();
        match cli.command {
            Commands::Validate { paths, .. } => {
                assert_eq!(paths, vec![PathBuf::from("a.ttf"), PathBuf::from("b.ttf")]);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["mithila-fonts", "frobnicate"]).is_err());
    }
}
