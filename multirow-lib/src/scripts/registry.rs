//! Page-wide ordered script registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Position bucket a script is emitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPosition {
    /// Inside `<head>`.
    Head,
    /// At the start of `<body>`.
    Begin,
    /// At the end of `<body>`.
    End,
    /// Inside the document-ready handler.
    Ready,
    /// Inside the window-load handler.
    Load,
}

impl ScriptPosition {
    /// All positions in page execution order.
    pub const ALL: [Self; 5] = [Self::Head, Self::Begin, Self::End, Self::Ready, Self::Load];
}

/// One registered script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub position: ScriptPosition,
    pub key: String,
    pub script: String,
}

/// Derives a registry key from a script body.
///
/// Identical bodies map to the same key, so registering the same script
/// twice never duplicates it.
pub fn script_key(script: &str) -> String {
    format!("{:x}", Sha256::digest(script.as_bytes()))
}

/// The page-level script collection a widget renders into.
///
/// Implementations keep insertion order within each position and treat
/// `(position, key)` as unique: registering an existing key replaces the
/// body in place.
pub trait ScriptRegistry {
    /// All entries, grouped by position in page order, insertion order
    /// within a position.
    fn entries(&self) -> Vec<ScriptEntry>;

    /// Inserts or replaces a script.
    fn register(&mut self, position: ScriptPosition, key: &str, script: String);

    /// Removes a script, returning its body.
    fn remove(&mut self, position: ScriptPosition, key: &str) -> Option<String>;

    /// Returns `true` if `(position, key)` is registered.
    fn contains(&self, position: ScriptPosition, key: &str) -> bool {
        self.entries()
            .iter()
            .any(|entry| entry.position == position && entry.key == key)
    }

    /// Registers a script under its content-derived key and returns the key.
    fn append(&mut self, position: ScriptPosition, script: String) -> String {
        let key = script_key(&script);
        self.register(position, &key, script);
        key
    }
}

/// In-memory [`ScriptRegistry`] for one page render.
///
/// Serializes as `{"head": {"key": "script", ...}, "ready": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageScripts {
    buckets: IndexMap<ScriptPosition, IndexMap<String, String>>,
}

impl PageScripts {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts in one position, in insertion order.
    pub fn scripts(&self, position: ScriptPosition) -> Vec<&str> {
        self.buckets
            .get(&position)
            .map(|bucket| bucket.values().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Keys in one position, in insertion order.
    pub fn keys(&self, position: ScriptPosition) -> Vec<&str> {
        self.buckets
            .get(&position)
            .map(|bucket| bucket.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Looks up a script body.
    pub fn get(&self, position: ScriptPosition, key: &str) -> Option<&str> {
        self.buckets
            .get(&position)
            .and_then(|bucket| bucket.get(key))
            .map(String::as_str)
    }

    /// Total number of registered scripts.
    pub fn len(&self) -> usize {
        self.buckets.values().map(IndexMap::len).sum()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScriptRegistry for PageScripts {
    fn entries(&self) -> Vec<ScriptEntry> {
        let mut entries = Vec::with_capacity(self.len());
        for position in ScriptPosition::ALL {
            let Some(bucket) = self.buckets.get(&position) else {
                continue;
            };
            entries.extend(bucket.iter().map(|(key, script)| ScriptEntry {
                position,
                key: key.clone(),
                script: script.clone(),
            }));
        }
        entries
    }

    fn register(&mut self, position: ScriptPosition, key: &str, script: String) {
        self.buckets
            .entry(position)
            .or_default()
            .insert(key.to_string(), script);
    }

    fn remove(&mut self, position: ScriptPosition, key: &str) -> Option<String> {
        let bucket = self.buckets.get_mut(&position)?;
        let removed = bucket.shift_remove(key);
        if bucket.is_empty() {
            self.buckets.shift_remove(&position);
        }
        removed
    }

    fn contains(&self, position: ScriptPosition, key: &str) -> bool {
        self.buckets
            .get(&position)
            .is_some_and(|bucket| bucket.contains_key(key))
    }
}
