//! Per-basename file name patterns.
//!
//! For a requested basename the pattern accepts the basename itself followed
//! by any run of registered extensions:
//!
//! - `index.html` with extensions `.erb`, `.builder` and no aliases:
//!   `^index\.html(?:\.erb|\.builder)*$`
//! - `index.html` with `.htm` aliased to `.html`:
//!   `^index(?:\.html|\.htm)(?:\.erb|\.builder)*$`
//!
//! Patterns are memoized by requested basename in a [`PatternCache`], which
//! the owning trail clears on every registry mutation.

use std::cell::RefCell;
use std::collections::HashMap;

use regex::Regex;

use crate::error::{PathError, PathResult};
use crate::normalize::extname;
use crate::registry::Registry;

/// Compile the whole-name matcher for `basename`.
pub fn compile(basename: &str, extensions: &[String], aliases: &[String]) -> PathResult<Regex> {
    let mut pattern = String::from("^");

    let ext = extname(basename);
    if aliases.is_empty() || ext.is_empty() {
        pattern.push_str(&regex::escape(basename));
    } else {
        let stem = &basename[..basename.len() - ext.len()];
        pattern.push_str(&regex::escape(stem));
        let choices = std::iter::once(ext).chain(aliases.iter().map(String::as_str));
        pattern.push_str(&alternation(choices));
    }

    if !extensions.is_empty() {
        pattern.push_str(&alternation(extensions.iter().map(String::as_str)));
        pattern.push('*');
    }
    pattern.push('$');

    Regex::new(&pattern)
        .map_err(|e| PathError::invalid(format!("cannot build pattern for {basename:?}: {e}")))
}

fn alternation<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let escaped: Vec<String> = items.map(regex::escape).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Memo table of compiled patterns keyed by requested basename.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RefCell<HashMap<String, Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern for `basename` under the current registry state.
    pub fn pattern_for(&self, basename: &str, registry: &Registry) -> PathResult<Regex> {
        if let Some(regex) = self.patterns.borrow().get(basename) {
            return Ok(regex.clone());
        }

        let aliases = registry.aliases_for(extname(basename));
        let regex = compile(basename, registry.extensions(), aliases)?;
        tracing::trace!(basename, pattern = regex.as_str(), "compiled pattern");

        self.patterns
            .borrow_mut()
            .insert(basename.to_string(), regex.clone());
        Ok(regex)
    }

    /// Drop every memoized pattern.
    pub fn invalidate(&self) {
        self.patterns.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.patterns.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn plain_basename_with_any_run_of_extensions() {
        let re = compile("foo", &strings(&[".js", ".erb"]), &[]).unwrap();

        assert!(re.is_match("foo"));
        assert!(re.is_match("foo.js"));
        assert!(re.is_match("foo.js.js"));
        assert!(re.is_match("foo.erb.js"));
        assert!(!re.is_match("foo.css"));
        assert!(!re.is_match("foobar.js"));
        assert!(!re.is_match("xfoo.js"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let re = compile("a+b.(c)", &strings(&[".js"]), &[]).unwrap();
        assert!(re.is_match("a+b.(c).js"));
        assert!(!re.is_match("aab.(c).js"));

        let re = compile("app.css", &[], &[]).unwrap();
        assert!(!re.is_match("appxcss"));
    }

    #[test]
    fn aliases_require_exactly_one_extension() {
        let re = compile("app.css", &strings(&[".erb"]), &strings(&[".styl", ".less"])).unwrap();

        assert!(re.is_match("app.css"));
        assert!(re.is_match("app.styl"));
        assert!(re.is_match("app.less.erb"));
        assert!(!re.is_match("app"));
        assert!(!re.is_match("app.erb"));
        assert!(!re.is_match("app.styl.css"));
    }

    #[test]
    fn no_extensions_matches_exact_name_only() {
        let re = compile("README", &[], &[]).unwrap();
        assert!(re.is_match("README"));
        assert!(!re.is_match("README.md"));
    }

    #[test]
    fn cache_memoizes_and_invalidates() {
        let mut registry = Registry::new("/proj").unwrap();
        registry.append_extensions([".js"]).unwrap();
        registry.alias_extension(".css", [".styl"]).unwrap();

        let cache = PatternCache::new();
        let plain = cache.pattern_for("app", &registry).unwrap();
        let aliased = cache.pattern_for("app.css", &registry).unwrap();
        assert_eq!(cache.len(), 2);

        // Keyed by the requested basename, so "app" and "app.css" never collide.
        assert!(!plain.is_match("app.styl"));
        assert!(aliased.is_match("app.styl"));
        assert!(!cache.pattern_for("app", &registry).unwrap().is_match("app.styl"));

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
