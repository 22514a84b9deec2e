//! Find command handler.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use trailmap_core::FindOptions;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the find command.
#[derive(Debug, Clone, Default)]
pub struct FindArgs {
    pub logical_paths: Vec<String>,
    pub base_path: Option<PathBuf>,
    pub all: bool,
}

/// Print the resolved path, or with `all`, every candidate in the order the
/// resolver considers them.
pub fn execute(ctx: &CliContext, args: &FindArgs, out: &mut impl Write) -> Result<()> {
    let options = FindOptions {
        base_path: args.base_path.as_deref().map(|p| ctx.absolute(p)),
    };

    if args.all {
        let mut candidates: Vec<PathBuf> = Vec::new();
        ctx.find_with(&args.logical_paths, &options, |path: &Path| {
            candidates.push(path.to_path_buf());
            false
        })
        .map_err(CliError::from)?;

        if candidates.is_empty() {
            return Err(not_found(args).into());
        }
        for candidate in candidates {
            writeln!(out, "{}", candidate.display())?;
        }
        return Ok(());
    }

    let found = ctx
        .find_with(&args.logical_paths, &options, |_| true)
        .map_err(CliError::from)?;
    match found {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        None => Err(not_found(args).into()),
    }
}

fn not_found(args: &FindArgs) -> CliError {
    CliError::NotFound(args.logical_paths.join(", "))
}
