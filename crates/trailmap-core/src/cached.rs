//! Observation cache: a frozen trail that memoizes filesystem probes.
//!
//! A [`CachedTrail`] owns a copy of the registry taken when it was created and
//! a [`CachedProbe`] that answers every `stat` and `entries` call at most once
//! per path, absent and empty answers included. There is no invalidation;
//! drop the view and take a new one when the filesystem may have changed.
//!
//! Probe errors are not memoized. A failed observation is retried on the next
//! call and propagates every time it fails.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::PathResult;
use crate::pattern::PatternCache;
use crate::probe::{DirectProbe, FileStatus, FsProbe};
use crate::registry::{Registry, RegistrySnapshot};
use crate::search::{FindOptions, Finder};

/// Memoizing wrapper around another probe.
#[derive(Debug, Default)]
pub struct CachedProbe<P = DirectProbe> {
    inner: P,
    stats: RefCell<HashMap<PathBuf, Option<FileStatus>>>,
    entries: RefCell<HashMap<PathBuf, Vec<String>>>,
}

impl<P: FsProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            stats: RefCell::new(HashMap::new()),
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct paths observed so far (stats plus listings).
    pub fn observed(&self) -> usize {
        self.stats.borrow().len() + self.entries.borrow().len()
    }
}

impl<P: FsProbe> FsProbe for CachedProbe<P> {
    fn stat(&self, path: &Path) -> PathResult<Option<FileStatus>> {
        if let Some(status) = self.stats.borrow().get(path) {
            return Ok(*status);
        }

        tracing::trace!(path = %path.display(), "stat cache miss");
        let status = self.inner.stat(path)?;
        self.stats.borrow_mut().insert(path.to_path_buf(), status);
        Ok(status)
    }

    fn entries(&self, dir: &Path) -> PathResult<Vec<String>> {
        if let Some(names) = self.entries.borrow().get(dir) {
            return Ok(names.clone());
        }

        tracing::trace!(dir = %dir.display(), "entries cache miss");
        let names = self.inner.entries(dir)?;
        self.entries
            .borrow_mut()
            .insert(dir.to_path_buf(), names.clone());
        Ok(names)
    }
}

/// Read-only trail over a registry snapshot with memoized observations.
///
/// Obtained from [`crate::Trail::cached`]. Not `Sync`.
#[derive(Debug)]
pub struct CachedTrail<P = DirectProbe> {
    registry: Registry,
    patterns: PatternCache,
    probe: CachedProbe<P>,
}

impl<P: FsProbe> CachedTrail<P> {
    pub fn new(registry: Registry, probe: P) -> Self {
        Self {
            registry,
            patterns: PatternCache::new(),
            probe: CachedProbe::new(probe),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn root(&self) -> &Path {
        self.registry.root()
    }

    pub fn paths(&self) -> &[PathBuf] {
        self.registry.paths()
    }

    pub fn extensions(&self) -> &[String] {
        self.registry.extensions()
    }

    pub fn aliases_for(&self, extension: &str) -> &[String] {
        self.registry.aliases_for(extension)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    pub fn probe(&self) -> &CachedProbe<P> {
        &self.probe
    }

    pub fn stat(&self, path: impl AsRef<Path>) -> PathResult<Option<FileStatus>> {
        self.probe.stat(path.as_ref())
    }

    pub fn entries(&self, dir: impl AsRef<Path>) -> PathResult<Vec<String>> {
        self.probe.entries(dir.as_ref())
    }

    /// See [`crate::Trail::find`].
    pub fn find(&self, logical_path: &str) -> PathResult<Option<PathBuf>> {
        self.find_with(&[logical_path], &FindOptions::default(), |_| true)
    }

    /// See [`crate::Trail::find_first`].
    pub fn find_first<S: AsRef<str>>(&self, logical_paths: &[S]) -> PathResult<Option<PathBuf>> {
        self.find_with(logical_paths, &FindOptions::default(), |_| true)
    }

    /// See [`crate::Trail::find_with`].
    pub fn find_with<S, F>(
        &self,
        logical_paths: &[S],
        options: &FindOptions,
        accept: F,
    ) -> PathResult<Option<PathBuf>>
    where
        S: AsRef<str>,
        F: FnMut(&Path) -> bool,
    {
        let finder = Finder {
            registry: &self.registry,
            patterns: &self.patterns,
            probe: &self.probe,
        };
        finder.find(logical_paths, options, accept)
    }
}
