//! Path registry: root, lookup directories, extensions and aliases.
//!
//! # Design
//!
//! - Lists are ordered by priority; earlier entries win.
//! - Every mutation normalizes and validates its whole input before touching
//!   state, so a rejected call leaves the registry exactly as it was.
//! - Prepend/append first remove the incoming values, so repeating a call is
//!   idempotent and never duplicates an entry.
//! - The registry is a plain value. Derived caches (compiled patterns) live
//!   in [`crate::Trail`], which clears them on every mutation.

mod aliases;
mod snapshot;

use std::path::{Path, PathBuf};

use crate::error::{PathError, PathResult};
use crate::normalize::{absolute_root, normalize_extension, resolve};

pub use aliases::{AliasEntry, AliasTable};
pub use snapshot::RegistrySnapshot;

/// Lookup configuration for a trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    root: PathBuf,
    paths: Vec<PathBuf>,
    extensions: Vec<String>,
    aliases: AliasTable,
}

impl Registry {
    /// Create an empty registry. A relative `root` is anchored at the
    /// current working directory.
    pub fn new(root: impl AsRef<Path>) -> PathResult<Self> {
        Ok(Self {
            root: absolute_root(root.as_ref())?,
            paths: Vec::new(),
            extensions: Vec::new(),
            aliases: AliasTable::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lookup directories, highest priority first.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Registered extensions, highest priority first.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Aliases of `extension` (normalized form, e.g. `.css`).
    pub fn aliases_for(&self, extension: &str) -> &[String] {
        self.aliases.get(extension)
    }

    /// Whether `dir` is a registered lookup directory or lies below one.
    pub fn contains_path(&self, dir: &Path) -> bool {
        self.paths.iter().any(|p| dir.starts_with(p))
    }

    pub fn prepend_paths<I, S>(&mut self, paths: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let paths = self.normalize_paths(paths)?;
        prepend(&mut self.paths, paths);
        tracing::debug!(count = self.paths.len(), "prepended lookup paths");
        Ok(())
    }

    pub fn append_paths<I, S>(&mut self, paths: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let paths = self.normalize_paths(paths)?;
        append(&mut self.paths, paths);
        tracing::debug!(count = self.paths.len(), "appended lookup paths");
        Ok(())
    }

    /// Remove the given lookup directories, or all of them when `paths` is
    /// empty. Returns what was removed, in registry order.
    pub fn remove_paths<I, S>(&mut self, paths: I) -> PathResult<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let paths = self.normalize_paths(paths)?;
        let removed = remove(&mut self.paths, &paths);
        tracing::debug!(
            removed = removed.len(),
            count = self.paths.len(),
            "removed lookup paths"
        );
        Ok(removed)
    }

    pub fn prepend_extensions<I, S>(&mut self, extensions: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = normalize_extensions(extensions)?;
        prepend(&mut self.extensions, extensions);
        tracing::debug!(count = self.extensions.len(), "prepended extensions");
        Ok(())
    }

    pub fn append_extensions<I, S>(&mut self, extensions: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = normalize_extensions(extensions)?;
        append(&mut self.extensions, extensions);
        tracing::debug!(count = self.extensions.len(), "appended extensions");
        Ok(())
    }

    /// Remove the given extensions, or all of them when `extensions` is
    /// empty. Returns what was removed, in registry order.
    pub fn remove_extensions<I, S>(&mut self, extensions: I) -> PathResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = normalize_extensions(extensions)?;
        let removed = remove(&mut self.extensions, &extensions);
        tracing::debug!(
            removed = removed.len(),
            count = self.extensions.len(),
            "removed extensions"
        );
        Ok(removed)
    }

    /// Register `aliases` as interchangeable with `extension`.
    ///
    /// Each alias is first detached from any other extension that owns it.
    /// An empty alias list is rejected.
    pub fn alias_extension<I, S>(&mut self, extension: &str, aliases: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extension = normalize_extension(extension)?;
        let aliases = normalize_extensions(aliases)?;
        if aliases.is_empty() {
            return Err(PathError::invalid(format!(
                "no aliases given for extension {extension}"
            )));
        }

        self.aliases.alias(&extension, &aliases);
        tracing::debug!(
            extension = %extension,
            aliases = self.aliases.get(&extension).len(),
            "aliased extension"
        );
        Ok(())
    }

    /// Detach each of `aliases` from whichever extension owns it. Returns the
    /// aliases that were registered.
    pub fn unalias_extension<I, S>(&mut self, aliases: I) -> PathResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let aliases = normalize_extensions(aliases)?;
        let removed = self.aliases.unalias(&aliases);
        tracing::debug!(removed = removed.len(), "unaliased extensions");
        Ok(removed)
    }

    fn normalize_paths<I, S>(&self, paths: I) -> PathResult<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut out = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if path.as_os_str().is_empty() {
                return Err(PathError::invalid("lookup path cannot be empty"));
            }
            out.push(resolve(&self.root, path));
        }
        Ok(dedup(out))
    }
}

fn normalize_extensions<I, S>(extensions: I) -> PathResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalized = extensions
        .into_iter()
        .map(|ext| normalize_extension(ext.as_ref()))
        .collect::<PathResult<Vec<_>>>()?;
    Ok(dedup(normalized))
}

/// Keep the first occurrence of each value.
fn dedup<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Remove `items` from `list`, or empty it when `items` is empty.
fn remove<T: PartialEq>(list: &mut Vec<T>, items: &[T]) -> Vec<T> {
    if items.is_empty() {
        return std::mem::take(list);
    }

    let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(list)
        .into_iter()
        .partition(|value| items.contains(value));
    *list = kept;
    removed
}

fn prepend<T: PartialEq>(list: &mut Vec<T>, mut items: Vec<T>) {
    if items.is_empty() {
        return;
    }
    remove(list, &items);
    items.append(list);
    *list = items;
}

fn append<T: PartialEq>(list: &mut Vec<T>, mut items: Vec<T>) {
    if items.is_empty() {
        return;
    }
    remove(list, &items);
    list.append(&mut items);
}
