//! The resolution walk shared by [`crate::Trail`] and [`crate::CachedTrail`].

use std::path::{Path, PathBuf};

use crate::error::PathResult;
use crate::normalize::resolve;
use crate::pattern::PatternCache;
use crate::probe::FsProbe;
use crate::ranker::sort_matches;
use crate::registry::Registry;

/// Options for a `find_with` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Directory that `./` and `../` logical paths are resolved against.
    /// Defaults to the trail root; a relative value is taken relative to it.
    pub base_path: Option<PathBuf>,
}

impl FindOptions {
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }
}

pub(crate) struct Finder<'a, P: ?Sized> {
    pub registry: &'a Registry,
    pub patterns: &'a PatternCache,
    pub probe: &'a P,
}

impl<P: FsProbe + ?Sized> Finder<'_, P> {
    /// Try each logical path in order; the first accepted candidate wins.
    pub fn find<S, F>(
        &self,
        logical_paths: &[S],
        options: &FindOptions,
        mut accept: F,
    ) -> PathResult<Option<PathBuf>>
    where
        S: AsRef<str>,
        F: FnMut(&Path) -> bool,
    {
        let base_path = options.base_path.as_ref().map_or_else(
            || self.registry.root().to_path_buf(),
            |base| resolve(self.registry.root(), base),
        );

        for logical_path in logical_paths {
            let logical_path = logical_path.as_ref();
            let logical_path = logical_path.strip_prefix('/').unwrap_or(logical_path);

            let found = if is_relative(logical_path) {
                self.find_in_base_path(logical_path, &base_path, &mut accept)?
            } else {
                self.find_in_paths(logical_path, &mut accept)?
            };

            if let Some(pathname) = found {
                tracing::debug!(
                    logical_path,
                    pathname = %pathname.display(),
                    "resolved logical path"
                );
                return Ok(Some(pathname));
            }
        }

        Ok(None)
    }

    fn find_in_base_path<F>(
        &self,
        logical_path: &str,
        base_path: &Path,
        accept: &mut F,
    ) -> PathResult<Option<PathBuf>>
    where
        F: FnMut(&Path) -> bool,
    {
        let candidate = resolve(base_path, logical_path);
        let (Some(dir), Some(basename)) = (
            candidate.parent(),
            candidate.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(None);
        };

        if !self.registry.contains_path(dir) {
            tracing::trace!(
                logical_path,
                dir = %dir.display(),
                "relative lookup outside registered paths"
            );
            return Ok(None);
        }

        self.match_in(dir, basename, accept)
    }

    fn find_in_paths<F>(&self, logical_path: &str, accept: &mut F) -> PathResult<Option<PathBuf>>
    where
        F: FnMut(&Path) -> bool,
    {
        let logical = Path::new(logical_path);
        let Some(basename) = logical.file_name().and_then(|n| n.to_str()) else {
            return Ok(None);
        };
        let dirname = logical.parent().unwrap_or_else(|| Path::new(""));

        for root in self.registry.paths() {
            let dir = resolve(root, dirname);
            if let Some(pathname) = self.match_in(&dir, basename, accept)? {
                return Ok(Some(pathname));
            }
        }

        Ok(None)
    }

    fn match_in<F>(&self, dir: &Path, basename: &str, accept: &mut F) -> PathResult<Option<PathBuf>>
    where
        F: FnMut(&Path) -> bool,
    {
        let pattern = self.patterns.pattern_for(basename, self.registry)?;
        let matches: Vec<String> = self
            .probe
            .entries(dir)?
            .into_iter()
            .filter(|name| pattern.is_match(name))
            .collect();

        for name in sort_matches(matches, basename, self.registry) {
            let pathname = dir.join(&name);
            let is_file = self
                .probe
                .stat(&pathname)?
                .is_some_and(|status| status.is_file);

            tracing::trace!(candidate = %pathname.display(), is_file, "examining candidate");
            if is_file && accept(&pathname) {
                return Ok(Some(pathname));
            }
        }

        Ok(None)
    }
}

fn is_relative(logical_path: &str) -> bool {
    logical_path.starts_with("./") || logical_path.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_prefixes() {
        assert!(is_relative("./foo"));
        assert!(is_relative("../foo"));
        assert!(!is_relative(".foo"));
        assert!(!is_relative("foo/./bar"));
        assert!(!is_relative("..."));
    }

    #[test]
    fn base_path_option() {
        assert_eq!(FindOptions::default().base_path, None);
        assert_eq!(
            FindOptions::with_base_path("/proj/lib").base_path,
            Some(PathBuf::from("/proj/lib"))
        );
    }
}
