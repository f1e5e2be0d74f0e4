//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --root, --compose, --format, --color, --verbose)
//!   are inherited by all subcommands
//! - SERVICE arguments are optional; the binary prompts for one when stdin
//!   is a terminal

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, OutputFormat};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Fancy,
    Simple,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Fancy => OutputFormat::Fancy,
            FormatArg::Simple => OutputFormat::Simple,
        }
    }
}

/// Doxy - manage a directory of docker-compose services
#[derive(Parser, Debug)]
#[command(name = "doxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to $DOXY_CONFIG, then <config dir>/doxy/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory containing the services
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Compose executable, e.g. "docker compose" or "docker-compose"
    #[arg(long, global = true, value_name = "CMD")]
    pub compose: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List services
    #[command(visible_alias = "ls")]
    List {
        /// Show the sub-services declared in each compose file
        #[arg(short, long)]
        sub_services: bool,

        /// List disabled services instead
        #[arg(short, long, conflicts_with = "all")]
        disabled: bool,

        /// List enabled and disabled services
        #[arg(short, long)]
        all: bool,
    },

    /// Open a service's compose file in $VISUAL / $EDITOR
    Edit {
        /// Service name (prompted when omitted)
        service: Option<String>,
    },

    /// Enable a disabled service
    Enable {
        /// Service name (prompted when omitted)
        service: Option<String>,
    },

    /// Disable a service
    Disable {
        /// Service name (prompted when omitted)
        service: Option<String>,
    },

    /// Run an arbitrary compose command against a service
    #[command(visible_alias = "ctl")]
    Control {
        /// Service name (prompted when omitted)
        service: Option<String>,

        /// Arguments passed to the compose executable
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Pull new images and restart a service
    Update {
        /// Service name (prompted when omitted)
        service: Option<String>,

        /// Tear the service down (down --remove-orphans) instead of stopping it
        #[arg(short, long)]
        remove: bool,

        /// Skip the stop/teardown step
        #[arg(long, conflicts_with = "remove")]
        no_stop: bool,
    },

    /// Show images, containers, processes and recent logs
    Status {
        /// Service name (prompted when omitted)
        service: Option<String>,

        /// Number of log lines to show (defaults to status.log_lines)
        #[arg(short = 'n', long)]
        lines: Option<usize>,
    },

    /// Start every enabled service
    StartAll,

    /// Print the effective configuration
    Config,
}
