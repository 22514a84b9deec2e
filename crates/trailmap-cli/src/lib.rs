//! Command-line front end for `trailmap-core`.
//!
//! Kept as a library so the parser, bootstrap and handlers can be tested
//! without spawning the binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliContext, TrailConfig, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
