//! Serializable view of a registry.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{AliasEntry, Registry};
use crate::error::PathResult;

/// Registry state captured by value, suitable for display or persistence by
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub root: PathBuf,
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
}

impl Registry {
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            root: self.root.clone(),
            paths: self.paths.clone(),
            extensions: self.extensions.clone(),
            aliases: self.aliases.iter().cloned().collect(),
        }
    }

    /// Rebuild a registry through the regular mutation API, so a snapshot
    /// with malformed entries is rejected the same way a direct call would be.
    pub fn from_snapshot(snapshot: &RegistrySnapshot) -> PathResult<Self> {
        let mut registry = Self::new(&snapshot.root)?;
        registry.append_paths(&snapshot.paths)?;
        registry.append_extensions(&snapshot.extensions)?;
        for entry in &snapshot.aliases {
            registry.alias_extension(&entry.extension, &entry.aliases)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut registry = Registry::new("/proj").unwrap();
        registry.append_paths(["lib", "vendor"]).unwrap();
        registry.append_extensions([".js", ".css"]).unwrap();
        registry.alias_extension(".css", [".styl", ".less"]).unwrap();

        let json = serde_json::to_string(&registry.snapshot()).unwrap();
        let parsed: RegistrySnapshot = serde_json::from_str(&json).unwrap();
        let rebuilt = Registry::from_snapshot(&parsed).unwrap();

        assert_eq!(rebuilt, registry);
    }

    #[test]
    fn snapshot_defaults_missing_lists() {
        let parsed: RegistrySnapshot = serde_json::from_str(r#"{"root":"/proj"}"#).unwrap();
        let registry = Registry::from_snapshot(&parsed).unwrap();

        assert!(registry.paths().is_empty());
        assert!(registry.extensions().is_empty());
        assert!(registry.aliases().is_empty());
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        let parsed: RegistrySnapshot =
            serde_json::from_str(r#"{"root":"/proj","aliases":[{"extension":".css","aliases":[]}]}"#)
                .unwrap();
        assert!(
            Registry::from_snapshot(&parsed)
                .unwrap_err()
                .is_invalid_argument()
        );
    }
}
