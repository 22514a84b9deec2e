//! Show command handler.
//!
//! Prints the effective registry, either as `key = value` lines or as the
//! JSON form of [`trailmap_core::RegistrySnapshot`].

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;

pub fn execute(ctx: &CliContext, json: bool, out: &mut impl Write) -> Result<()> {
    let snapshot = ctx.snapshot();

    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "root = {}", snapshot.root.display())?;
    for path in &snapshot.paths {
        writeln!(out, "path = {}", path.display())?;
    }
    for ext in &snapshot.extensions {
        writeln!(out, "extension = {ext}")?;
    }
    for entry in &snapshot.aliases {
        writeln!(out, "alias = {}={}", entry.extension, entry.aliases.join(","))?;
    }
    writeln!(out, "cached = {}", ctx.is_cached())?;
    Ok(())
}
