//! The public resolver.

use std::path::{Path, PathBuf};

use crate::cached::CachedTrail;
use crate::error::PathResult;
use crate::pattern::PatternCache;
use crate::probe::{DirectProbe, FileStatus, FsProbe};
use crate::registry::{Registry, RegistrySnapshot};
use crate::search::{FindOptions, Finder};

/// Resolves logical paths against an ordered set of lookup directories.
///
/// ```no_run
/// use trailmap_core::Trail;
///
/// let mut trail = Trail::new("/home/dash/site")?;
/// trail.append_extensions([".js", ".coffee"])?;
/// trail.append_paths(["assets/javascripts", "vendor/javascripts"])?;
///
/// // -> Some("/home/dash/site/assets/javascripts/application.coffee")
/// let found = trail.find("application")?;
/// # Ok::<(), trailmap_core::PathError>(())
/// ```
///
/// Every mutation clears the compiled-pattern cache. A `Trail` is not
/// `Sync`; share it across threads only behind external synchronization.
#[derive(Debug)]
pub struct Trail<P = DirectProbe> {
    registry: Registry,
    patterns: PatternCache,
    probe: P,
}

impl Trail {
    /// Create a trail rooted at `root`. Relative lookup paths added later are
    /// expanded against it.
    pub fn new(root: impl AsRef<Path>) -> PathResult<Self> {
        Ok(Self::from_registry(Registry::new(root)?))
    }

    pub fn from_registry(registry: Registry) -> Self {
        Self::with_probe(registry, DirectProbe)
    }

    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> PathResult<Self> {
        Ok(Self::from_registry(Registry::from_snapshot(snapshot)?))
    }
}

impl<P: FsProbe> Trail<P> {
    /// Create a trail that observes the filesystem through `probe`.
    pub fn with_probe(registry: Registry, probe: P) -> Self {
        Self {
            registry,
            patterns: PatternCache::new(),
            probe,
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

    pub fn prepend_paths<I, S>(&mut self, paths: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.patterns.invalidate();
        self.registry.prepend_paths(paths)
    }

    pub fn append_paths<I, S>(&mut self, paths: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.patterns.invalidate();
        self.registry.append_paths(paths)
    }

    /// See [`Registry::remove_paths`]; an empty list removes everything.
    pub fn remove_paths<I, S>(&mut self, paths: I) -> PathResult<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.patterns.invalidate();
        self.registry.remove_paths(paths)
    }

    pub fn prepend_extensions<I, S>(&mut self, extensions: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.invalidate();
        self.registry.prepend_extensions(extensions)
    }

    pub fn append_extensions<I, S>(&mut self, extensions: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.invalidate();
        self.registry.append_extensions(extensions)
    }

    /// See [`Registry::remove_extensions`]; an empty list removes everything.
    pub fn remove_extensions<I, S>(&mut self, extensions: I) -> PathResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.invalidate();
        self.registry.remove_extensions(extensions)
    }

    /// Register aliases for a base extension:
    ///
    /// ```
    /// # let mut trail = trailmap_core::Trail::new("/srv")?;
    /// trail.alias_extension(".css", [".styl", ".less"])?;
    /// assert_eq!(trail.aliases_for(".css"), [".styl", ".less"]);
    /// # Ok::<(), trailmap_core::PathError>(())
    /// ```
    pub fn alias_extension<I, S>(&mut self, extension: &str, aliases: I) -> PathResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.invalidate();
        self.registry.alias_extension(extension, aliases)
    }

    pub fn unalias_extension<I, S>(&mut self, aliases: I) -> PathResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.invalidate();
        self.registry.unalias_extension(aliases)
    }

    pub fn stat(&self, path: impl AsRef<Path>) -> PathResult<Option<FileStatus>> {
        self.probe.stat(path.as_ref())
    }

    pub fn entries(&self, dir: impl AsRef<Path>) -> PathResult<Vec<String>> {
        self.probe.entries(dir.as_ref())
    }

    /// Resolve one logical path to the best matching regular file.
    pub fn find(&self, logical_path: &str) -> PathResult<Option<PathBuf>> {
        self.find_with(&[logical_path], &FindOptions::default(), |_| true)
    }

    /// Resolve the first of several fallback logical paths that matches.
    /// `find_first(&["a", "b"])` behaves like `find("a")` then `find("b")`.
    pub fn find_first<S: AsRef<str>>(&self, logical_paths: &[S]) -> PathResult<Option<PathBuf>> {
        self.find_with(logical_paths, &FindOptions::default(), |_| true)
    }

    /// Resolve with explicit options and an acceptance callback.
    ///
    /// `accept` sees every candidate in ranked order, directory by directory
    /// and fallback by fallback, including candidates shadowed by earlier
    /// directories. The first candidate it returns `true` for is the result.
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
        self.finder().find(logical_paths, options, accept)
    }

    #[cfg(test)]
    pub(crate) fn pattern_cache_len(&self) -> usize {
        self.patterns.len()
    }

    fn finder(&self) -> Finder<'_, P> {
        Finder {
            registry: &self.registry,
            patterns: &self.patterns,
            probe: &self.probe,
        }
    }
}

impl<P: FsProbe + Clone> Trail<P> {
    /// A frozen view that memoizes every filesystem observation.
    ///
    /// The view copies the current registry; later mutations of this trail
    /// do not reach it. Use it only while the searched directories are known
    /// not to change.
    pub fn cached(&self) -> CachedTrail<P> {
        CachedTrail::new(self.registry.clone(), self.probe.clone())
    }
}
