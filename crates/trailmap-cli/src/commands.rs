//! Main commands enum.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve logical paths; fallbacks are tried in order
    Find {
        /// Logical path(s), e.g. "app/styles" or "widgets/number/index"
        #[arg(required = true)]
        logical_paths: Vec<String>,
        /// Directory that ./ and ../ logical paths are resolved against
        #[arg(short = 'b', long = "base-path")]
        base_path: Option<PathBuf>,
        /// Print every candidate in priority order instead of the winner
        #[arg(long)]
        all: bool,
    },

    /// List the entries of a directory as the resolver sees them
    Entries {
        /// Directory to list (relative to the root)
        dir: PathBuf,
    },

    /// Show what the resolver observes for a single path
    Stat {
        /// Path to stat (relative to the root)
        path: PathBuf,
    },

    /// Print the effective registry
    Show {
        /// Emit JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },
}
