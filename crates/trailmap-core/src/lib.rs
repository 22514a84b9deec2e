//! Logical path resolution.
//!
//! A [`Trail`] maps a symbolic name such as `"app/styles"` to a concrete file
//! by searching an ordered list of lookup directories, accepting any
//! registered extensions and extension aliases, and breaking ties
//! deterministically. [`Trail::cached`] returns a [`CachedTrail`] that freezes
//! filesystem observations for its lifetime.
//!
//! The crate never reads file contents and never watches the filesystem.

#![deny(unused_crate_dependencies)]

pub mod cached;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod probe;
pub mod ranker;
pub mod registry;
mod search;
mod trail;

pub use cached::{CachedProbe, CachedTrail};
pub use error::{PathError, PathResult};
pub use probe::{DirectProbe, FileStatus, FsProbe};
pub use registry::{AliasEntry, AliasTable, Registry, RegistrySnapshot};
pub use search::FindOptions;
pub use trail::Trail;
