//! Entries command handler.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the directory listing the resolver works from, one name per line.
/// A missing directory prints nothing.
pub fn execute(ctx: &CliContext, dir: &Path, out: &mut impl Write) -> Result<()> {
    for name in ctx.entries(dir).map_err(CliError::from)? {
        writeln!(out, "{name}")?;
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
    fn lists_filtered_entries() {
        let dir = tempdir().unwrap();
        for name in ["b.js", "a.js", ".hidden", "a.js~"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let ctx = bootstrap(&TrailConfig {
            root: dir.path().to_path_buf(),
            ..TrailConfig::default()
        })
        .unwrap();

        let mut out = Vec::new();
        execute(&ctx, Path::new("."), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.js\nb.js\n");

        let mut out = Vec::new();
        execute(&ctx, Path::new("missing"), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
