//! Lexical path and extension normalization.
//!
//! Nothing in here touches the filesystem except `absolute_root`, which may
//! consult the current working directory once.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{PathError, PathResult};

/// Join `path` onto `base` and collapse `.` and `..` components without
/// following symlinks. An absolute `path` replaces `base` entirely.
pub fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let joined = base.join(path);
    let mut out = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, matching `/..` == `/`
                out.pop();
            }
        }
    }

    out
}

/// Make `root` absolute, anchoring relative roots at the current directory.
pub(crate) fn absolute_root(root: &Path) -> PathResult<PathBuf> {
    if root.is_absolute() {
        return Ok(resolve(Path::new(""), root));
    }

    env::current_dir()
        .map(|cwd| resolve(&cwd, root))
        .map_err(|e| PathError::CurrentDir(e.to_string()))
}

/// Normalize an extension to its dot-prefixed form: `js` and `.js` both
/// become `.js`.
pub fn normalize_extension(raw: &str) -> PathResult<String> {
    if raw.is_empty() || raw == "." {
        return Err(PathError::invalid("extension cannot be empty"));
    }
    if raw.contains(['/', '\\']) {
        return Err(PathError::invalid(format!(
            "extension {raw:?} cannot contain a path separator"
        )));
    }

    if raw.starts_with('.') {
        Ok(raw.to_string())
    } else {
        Ok(format!(".{raw}"))
    }
}

/// The extension of a file name, including its leading dot.
///
/// Leading dots do not start an extension, so `.profile` has none, while a
/// trailing dot is an extension of its own (`notes.` yields `.`).
pub fn extname(name: &str) -> &str {
    let skip = name.len() - name.trim_start_matches('.').len();
    match name[skip..].rfind('.') {
        Some(idx) => &name[skip + idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_collapses_dot_segments() {
        let base = Path::new("/proj/app");
        assert_eq!(resolve(base, "lib"), PathBuf::from("/proj/app/lib"));
        assert_eq!(resolve(base, "./lib/./x"), PathBuf::from("/proj/app/lib/x"));
        assert_eq!(resolve(base, "../vendor"), PathBuf::from("/proj/vendor"));
        assert_eq!(resolve(base, "/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(resolve(base, ""), PathBuf::from("/proj/app"));
    }

    #[test]
    fn resolve_does_not_climb_above_root() {
        assert_eq!(resolve(Path::new("/"), "../../etc"), PathBuf::from("/etc"));
    }

    #[test]
    fn absolute_root_anchors_relative_paths() {
        let root = absolute_root(Path::new("assets")).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("assets"));

        let root = absolute_root(Path::new("/srv/./site/../app")).unwrap();
        assert_eq!(root, PathBuf::from("/srv/app"));
    }

    #[test]
    fn extension_gets_dot_prefix() {
        assert_eq!(normalize_extension("js").unwrap(), ".js");
        assert_eq!(normalize_extension(".css").unwrap(), ".css");
        assert_eq!(normalize_extension("min.js").unwrap(), ".min.js");
    }

    #[test]
    fn malformed_extensions_are_rejected() {
        assert!(normalize_extension("").unwrap_err().is_invalid_argument());
        assert!(normalize_extension(".").unwrap_err().is_invalid_argument());
        assert!(normalize_extension("a/b").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn extname_follows_last_dot() {
        assert_eq!(extname("app.css"), ".css");
        assert_eq!(extname("app.css.erb"), ".erb");
        assert_eq!(extname("app"), "");
        assert_eq!(extname(".profile"), "");
        assert_eq!(extname(".config.json"), ".json");
        assert_eq!(extname("notes."), ".");
        assert_eq!(extname(""), "");
    }
}
