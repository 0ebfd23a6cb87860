//! Command-line argument parsing for recordkit
//!
//! Provides clap-based CLI with one subcommand per tool and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordkit - menu-driven record tools for the terminal
#[derive(Parser, Debug)]
#[command(name = "recordkit")]
#[command(author = "Aman Rawat")]
#[command(version)]
#[command(about = "Air-quality CSV viewer and hospital record manager", long_about = None)]
pub struct Args {
    /// Configuration file (defaults to ~/.recordkit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Tools
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Air Quality Data Visualizer (CSV)
    Air,

    /// Hospital Patient Management System
    Hospital,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level from flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Log filter matching this verbosity
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::VeryVerbose => log::LevelFilter::Debug,
        }
    }
}
