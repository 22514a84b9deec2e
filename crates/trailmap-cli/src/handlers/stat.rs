//! Stat command handler.

use std::io::Write;
use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print `key = value` lines describing what the resolver sees at `path`.
pub fn execute(ctx: &CliContext, path: &Path, out: &mut impl Write) -> Result<()> {
    let absolute = ctx.absolute(path);
    let Some(status) = ctx.stat(path).map_err(CliError::from)? else {
        return Err(CliError::NotFound(absolute.display().to_string()).into());
    };

    let kind = if status.is_file {
        "file"
    } else if status.is_dir {
        "directory"
    } else {
        "other"
    };

    writeln!(out, "path = {}", absolute.display())?;
    writeln!(out, "kind = {kind}")?;
    writeln!(out, "len = {}", status.len)?;
    if let Some(secs) = status
        .modified
        .and_then(|m| m.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
    {
        writeln!(out, "modified = {secs}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{TrailConfig, bootstrap};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn describes_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "1234").unwrap();
        let ctx = bootstrap(&TrailConfig {
            root: dir.path().to_path_buf(),
            ..TrailConfig::default()
        })
        .unwrap();

        let mut out = Vec::new();
        execute(&ctx, Path::new("app.js"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("kind = file\n"));
        assert!(text.contains("len = 4\n"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let ctx = bootstrap(&TrailConfig {
            root: dir.path().to_path_buf(),
            ..TrailConfig::default()
        })
        .unwrap();

        let err = execute(&ctx, Path::new("nope.js"), &mut Vec::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 1);
    }
}
