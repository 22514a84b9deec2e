//! Extension alias table.
//!
//! An ordered association from a canonical extension to the alternate
//! extensions accepted in its place. Each alias belongs to at most one
//! canonical extension; registering it elsewhere moves it.

use serde::{Deserialize, Serialize};

/// One canonical extension and its aliases, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub extension: String,
    pub aliases: Vec<String>,
}

/// Insertion-ordered alias table. Extensions passed in are expected to be
/// normalized already; see [`crate::normalize::normalize_extension`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aliases registered for `extension`, or an empty slice.
    pub fn get(&self, extension: &str) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.extension == extension)
            .map(|entry| entry.aliases.as_slice())
            .unwrap_or_default()
    }

    /// The canonical extension that currently owns `alias`.
    pub fn owner_of(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.aliases.iter().any(|a| a == alias))
            .map(|entry| entry.extension.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `aliases` under `extension`, first detaching each one from
    /// whichever extension owned it. Appends in order, skipping duplicates.
    pub fn alias(&mut self, extension: &str, aliases: &[String]) {
        self.unalias(aliases);

        let idx = match self.entries.iter().position(|e| e.extension == extension) {
            Some(idx) => idx,
            None => {
                self.entries.push(AliasEntry {
                    extension: extension.to_string(),
                    aliases: Vec::new(),
                });
                self.entries.len() - 1
            }
        };

        let list = &mut self.entries[idx].aliases;
        for alias in aliases {
            if !list.contains(alias) {
                list.push(alias.clone());
            }
        }
    }

    /// Detach each of `aliases` from its owner. Returns the aliases that
    /// were actually registered. Extensions left without aliases are dropped.
    pub fn unalias(&mut self, aliases: &[String]) -> Vec<String> {
        let mut removed = Vec::new();

        for entry in &mut self.entries {
            entry.aliases.retain(|alias| {
                if aliases.contains(alias) {
                    removed.push(alias.clone());
                    false
                } else {
                    true
                }
            });
        }
        self.entries.retain(|entry| !entry.aliases.is_empty());

        removed
    }
}

impl FromIterator<AliasEntry> for AliasTable {
    fn from_iter<T: IntoIterator<Item = AliasEntry>>(iter: T) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.alias(&entry.extension, &entry.aliases);
        }
        table
    }
}
