//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Site descriptor CLI for the documentation generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to the root (default: docsite.toml)
    #[arg(short = 'C', long, default_value = "docsite.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of `emit`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitFormat {
    #[default]
    Json,
    Toml,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the built-in descriptor to the config file
    Init,

    /// Validate the descriptor and report every problem found
    Check,

    /// Validate, then write the descriptor for the generator
    Emit {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: EmitFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the repository and public URL the site deploys to
    Target,
}

#[allow(unused)]
impl Cli {
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn is_emit(&self) -> bool {
        matches!(self.command, Commands::Emit { .. })
    }
}
