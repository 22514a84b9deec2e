//! Filesystem probe: absence-tolerant `stat` and directory listing.
//!
//! The probe is the only place that talks to the filesystem. Absence is
//! normalized here (a missing path is `None`, a missing directory lists as
//! empty) so nothing above it distinguishes "missing" from "empty". Every
//! other I/O failure propagates as [`PathError::Io`].
//!
//! # Design Notes
//!
//! - [`FsProbe`] is the seam: [`DirectProbe`] hits the disk on every call,
//!   the observation cache in [`crate::cached`] memoizes on top of it.
//! - Hidden entries, editor backups (`name~`) and lock files (`#name#`) are
//!   never listed.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};

/// The subset of file metadata the resolver cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    /// Whether the path (after following symlinks) is a regular file.
    pub is_file: bool,
    /// Whether the path (after following symlinks) is a directory.
    pub is_dir: bool,
    /// Size in bytes.
    pub len: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

impl FileStatus {
    /// Status for a regular file of the given length.
    pub const fn file(len: u64) -> Self {
        Self {
            is_file: true,
            is_dir: false,
            len,
            modified: None,
        }
    }
}

impl From<&Metadata> for FileStatus {
    fn from(meta: &Metadata) -> Self {
        Self {
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            len: meta.len(),
            modified: meta.modified().ok(),
        }
    }
}

/// Port for filesystem observations used during resolution.
#[cfg_attr(test, mockall::automock)]
pub trait FsProbe {
    /// Stat `path`, following symlinks. `Ok(None)` if it does not exist.
    fn stat(&self, path: &Path) -> PathResult<Option<FileStatus>>;

    /// Non-special entry names of `dir`, sorted ascending. A missing
    /// directory yields an empty list.
    fn entries(&self, dir: &Path) -> PathResult<Vec<String>>;
}

/// Uncached probe that performs a syscall on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectProbe;

impl FsProbe for DirectProbe {
    fn stat(&self, path: &Path) -> PathResult<Option<FileStatus>> {
        stat(path)
    }

    fn entries(&self, dir: &Path) -> PathResult<Vec<String>> {
        entries(dir)
    }
}

/// Stat `path`, treating a nonexistent path as `Ok(None)`.
pub fn stat(path: &Path) -> PathResult<Option<FileStatus>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(FileStatus::from(&meta))),
        Err(e) if is_absent(&e) => Ok(None),
        Err(e) => Err(PathError::io(path, e)),
    }
}

/// List `dir`, dropping special file names and sorting the rest.
pub fn entries(dir: &Path) -> PathResult<Vec<String>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if is_absent(&e) => return Ok(Vec::new()),
        Err(e) => return Err(PathError::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| PathError::io(dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) if !is_special_filename(&name) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                tracing::trace!(dir = %dir.display(), name = ?raw, "skipping non-UTF-8 entry");
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Names that never take part in resolution: dotfiles, `name~` backups and
/// `#name#` autosave files.
pub fn is_special_filename(name: &str) -> bool {
    name.starts_with('.')
        || name.ends_with('~')
        || (name.len() >= 2 && name.starts_with('#') && name.ends_with('#'))
}

// A path component that is a regular file ("lib/app.js/x") is as absent as a
// missing one.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn special_filenames() {
        assert!(is_special_filename(".hidden"));
        assert!(is_special_filename("."));
        assert!(is_special_filename("app.js~"));
        assert!(is_special_filename("#app.js#"));
        assert!(is_special_filename("##"));

        assert!(!is_special_filename("#"));
        assert!(!is_special_filename("#app.js"));
        assert!(!is_special_filename("app#.js"));
        assert!(!is_special_filename("app.js"));
    }

    #[test]
    fn stat_missing_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(stat(&dir.path().join("nope.js")).unwrap(), None);
    }

    #[test]
    fn stat_through_a_file_is_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "x").unwrap();
        assert_eq!(stat(&dir.path().join("app.js").join("inner")).unwrap(), None);
    }

    #[test]
    fn stat_reports_kind_and_len() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.js");
        fs::write(&file, "12345").unwrap();

        let status = stat(&file).unwrap().unwrap();
        assert!(status.is_file);
        assert!(!status.is_dir);
        assert_eq!(status.len, 5);

        let status = stat(dir.path()).unwrap().unwrap();
        assert!(status.is_dir);
        assert!(!status.is_file);
    }

    #[test]
    fn entries_of_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(entries(&dir.path().join("missing")).unwrap().is_empty());
    }

    #[test]
    fn entries_are_filtered_and_sorted() {
        let dir = tempdir().unwrap();
        for name in ["zeta.js", "alpha.js", ".git", "alpha.js~", "#alpha.js#", "Beta.js"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert_eq!(
            entries(dir.path()).unwrap(),
            vec!["Beta.js", "alpha.js", "sub", "zeta.js"]
        );
    }

    #[test]
    fn direct_probe_delegates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "").unwrap();

        let probe = DirectProbe;
        assert_eq!(probe.entries(dir.path()).unwrap(), vec!["a.css"]);
        assert!(probe.stat(&dir.path().join("a.css")).unwrap().unwrap().is_file);
    }
}
