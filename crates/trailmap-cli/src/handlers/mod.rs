//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ..., out: &mut impl Write) -> Result<()>`
//! - Thin wrappers that query the context and format the answer
//! - "No match" is reported as [`crate::error::CliError::NotFound`]

pub mod entries;
pub mod find;
pub mod show;
pub mod stat;
