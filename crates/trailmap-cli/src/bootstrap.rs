//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a [`TrailConfig`], then builds the trail (and
//! the cached view when requested) that command handlers query.

use std::path::{Path, PathBuf};

use trailmap_core::{CachedTrail, FileStatus, FindOptions, PathResult, RegistrySnapshot, Trail};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailConfig {
    pub root: PathBuf,
    pub paths: Vec<PathBuf>,
    pub extensions: Vec<String>,
    /// `(base extension, aliases)` in the order given.
    pub aliases: Vec<(String, Vec<String>)>,
    pub cached: bool,
}

impl TrailConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let aliases = cli
            .aliases
            .iter()
            .filter(|spec| !spec.trim().is_empty())
            .map(|spec| parse_alias(spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: cli.root.clone(),
            paths: cli.paths.clone(),
            extensions: cli.extensions.clone(),
            aliases,
            cached: cli.cached,
        })
    }
}

/// Parse `BASE=ALIAS[,ALIAS...]`, e.g. `.css=.styl,.less`.
pub fn parse_alias(spec: &str) -> Result<(String, Vec<String>), CliError> {
    let Some((base, aliases)) = spec.split_once('=') else {
        return Err(CliError::Config(format!(
            "alias {spec:?} must look like BASE=ALIAS[,ALIAS...]"
        )));
    };

    let base = base.trim();
    let aliases: Vec<String> = aliases
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(ToString::to_string)
        .collect();

    if base.is_empty() || aliases.is_empty() {
        return Err(CliError::Config(format!(
            "alias {spec:?} needs a base extension and at least one alias"
        )));
    }

    Ok((base.to_string(), aliases))
}

/// Composed context for command handlers.
#[derive(Debug)]
pub struct CliContext {
    pub trail: Trail,
    cached: Option<CachedTrail>,
}

/// Build the trail described by `config`.
pub fn bootstrap(config: &TrailConfig) -> Result<CliContext, CliError> {
    let mut trail = Trail::new(&config.root)?;
    trail.append_paths(&config.paths)?;
    trail.append_extensions(&config.extensions)?;
    for (base, aliases) in &config.aliases {
        trail.alias_extension(base, aliases)?;
    }

    tracing::debug!(
        root = %trail.root().display(),
        paths = trail.paths().len(),
        extensions = trail.extensions().len(),
        cached = config.cached,
        "trail ready"
    );

    let cached = config.cached.then(|| trail.cached());
    Ok(CliContext { trail, cached })
}

impl CliContext {
    pub const fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Resolve through the cached view when one was requested.
    pub fn find_with<F>(
        &self,
        logical_paths: &[String],
        options: &FindOptions,
        accept: F,
    ) -> PathResult<Option<PathBuf>>
    where
        F: FnMut(&Path) -> bool,
    {
        match &self.cached {
            Some(cached) => cached.find_with(logical_paths, options, accept),
            None => self.trail.find_with(logical_paths, options, accept),
        }
    }

    pub fn entries(&self, dir: &Path) -> PathResult<Vec<String>> {
        let dir = self.absolute(dir);
        match &self.cached {
            Some(cached) => cached.entries(dir),
            None => self.trail.entries(dir),
        }
    }

    pub fn stat(&self, path: &Path) -> PathResult<Option<FileStatus>> {
        let path = self.absolute(path);
        match &self.cached {
            Some(cached) => cached.stat(path),
            None => self.trail.stat(path),
        }
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.trail.snapshot()
    }

    /// Anchor a user-supplied path at the trail root.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        trailmap_core::normalize::resolve(self.trail.root(), path)
    }
}
