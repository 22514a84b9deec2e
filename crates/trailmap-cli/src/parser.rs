//! Main CLI parser and top-level argument handling.
//!
//! Global options describe the trail (root, lookup paths, extensions,
//! aliases). Each has an environment fallback so a `.env` file can hold a
//! project's configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Resolve logical asset paths against ordered lookup directories.
#[derive(Parser, Debug)]
#[command(name = "trailmap")]
#[command(about = "Resolve logical asset paths to files on disk")]
#[command(version)]
pub struct Cli {
    /// Root that relative lookup paths are expanded against
    #[arg(long, global = true, env = "TRAILMAP_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Lookup directory, highest priority first (repeatable)
    #[arg(
        short = 'p',
        long = "path",
        global = true,
        env = "TRAILMAP_PATHS",
        value_delimiter = ','
    )]
    pub paths: Vec<PathBuf>,

    /// Recognized extension, highest priority first (repeatable)
    #[arg(
        short = 'e',
        long = "ext",
        global = true,
        env = "TRAILMAP_EXTENSIONS",
        value_delimiter = ','
    )]
    pub extensions: Vec<String>,

    /// Extension aliases as BASE=ALIAS[,ALIAS...] (repeatable)
    #[arg(
        short = 'a',
        long = "alias",
        global = true,
        env = "TRAILMAP_ALIASES",
        value_delimiter = ';'
    )]
    pub aliases: Vec<String>,

    /// Memoize filesystem observations for the whole invocation
    #[arg(long, global = true)]
    pub cached: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
