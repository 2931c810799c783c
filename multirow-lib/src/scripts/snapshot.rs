//! Point-in-time view of a script registry.

use std::collections::HashMap;

use log::trace;

use super::{ScriptEntry, ScriptPosition, ScriptRegistry};

/// The registry contents at one moment, used to find what a render added.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    entries: Vec<ScriptEntry>,
    index: HashMap<(ScriptPosition, String), usize>,
}

impl RegistrySnapshot {
    /// Captures every entry currently in `registry`.
    pub fn take(registry: &dyn ScriptRegistry) -> Self {
        let entries = registry.entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ((entry.position, entry.key.clone()), i))
            .collect();
        Self { entries, index }
    }

    /// Returns `true` if `(position, key)` existed when the snapshot was taken.
    pub fn contains(&self, position: ScriptPosition, key: &str) -> bool {
        self.index.contains_key(&(position, key.to_string()))
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries present in `registry` now but not in the snapshot, in
    /// registry order.
    pub fn diff(&self, registry: &dyn ScriptRegistry) -> Vec<ScriptEntry> {
        registry
            .entries()
            .into_iter()
            .filter(|entry| !self.contains(entry.position, &entry.key))
            .collect()
    }

    /// Rolls `registry` back to the snapshot.
    ///
    /// Added entries are removed, removed entries come back and overwritten
    /// bodies are put back, all in snapshot order. A registry that still
    /// matches the snapshot is left untouched.
    pub fn restore(&self, registry: &mut dyn ScriptRegistry) {
        let current = registry.entries();
        if current == self.entries {
            return;
        }

        trace!(
            "Rolling back {} scripts to {} from the snapshot",
            current.len(),
            self.entries.len()
        );
        for entry in &current {
            registry.remove(entry.position, &entry.key);
        }
        for entry in &self.entries {
            registry.register(entry.position, &entry.key, entry.script.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripts::PageScripts;

    #[test]
    fn test_diff_returns_new_entries_in_order() {
        let mut scripts = PageScripts::new();
        scripts.register(ScriptPosition::Head, "A", "x".into());
        let before = RegistrySnapshot::take(&scripts);

        scripts.register(ScriptPosition::Ready, "C", "z".into());
        scripts.register(ScriptPosition::Head, "B", "y".into());
        scripts.register(ScriptPosition::Head, "A", "x2".into());

        let keys: Vec<_> = before.diff(&scripts).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["B", "C"]);
    }

    #[test]
    fn test_restore() {
        let mut scripts = PageScripts::new();
        scripts.register(ScriptPosition::Head, "A", "x".into());
        scripts.register(ScriptPosition::Head, "D", "w".into());
        let before = RegistrySnapshot::take(&scripts);

        scripts.register(ScriptPosition::Head, "B", "y".into());
        scripts.register(ScriptPosition::Head, "A", "changed".into());
        before.restore(&mut scripts);

        assert_eq!(scripts.keys(ScriptPosition::Head), vec!["A", "D"]);
        assert_eq!(scripts.get(ScriptPosition::Head, "A"), Some("x"));
    }

    #[test]
    fn test_restore_brings_back_removed_entries_in_order() {
        let mut scripts = PageScripts::new();
        scripts.register(ScriptPosition::Head, "A", "x".into());
        scripts.register(ScriptPosition::Head, "D", "w".into());
        scripts.register(ScriptPosition::Ready, "R", "r".into());
        let before = RegistrySnapshot::take(&scripts);
        let expected = scripts.clone();

        scripts.remove(ScriptPosition::Head, "A");
        scripts.remove(ScriptPosition::Ready, "R");
        scripts.register(ScriptPosition::End, "N", "n".into());
        before.restore(&mut scripts);

        assert_eq!(scripts, expected);
        assert_eq!(scripts.keys(ScriptPosition::Head), vec!["A", "D"]);
    }
}
