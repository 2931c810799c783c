//! Splitting scripts a render added into prelude and deferred sets.

use log::{debug, trace};

use super::{RegistrySnapshot, ScriptEntry, ScriptPosition, ScriptRegistry};

/// Bucket whose new entries are replayed by the client for every cloned row.
pub const DEFERRED_POSITION: ScriptPosition = ScriptPosition::Ready;

/// Scripts added to the registry while rendering the row template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedScripts {
    /// New scripts outside the deferred bucket. They stay registered and run
    /// once before the widget bootstrap.
    pub prelude: Vec<ScriptEntry>,
    /// New scripts in the deferred bucket. The widget payload owns them.
    pub deferred: Vec<ScriptEntry>,
}

impl CapturedScripts {
    /// Classifies everything added to `registry` since `before`.
    pub fn capture(before: &RegistrySnapshot, registry: &dyn ScriptRegistry) -> Self {
        let mut captured = Self::default();
        for entry in before.diff(registry) {
            trace!("New {:?} script {}", entry.position, entry.key);
            if entry.position == DEFERRED_POSITION {
                captured.deferred.push(entry);
            } else {
                captured.prelude.push(entry);
            }
        }
        debug!(
            "Captured {} prelude and {} deferred scripts",
            captured.prelude.len(),
            captured.deferred.len()
        );
        captured
    }

    /// Bodies of the prelude scripts, in registry order.
    pub fn prelude_scripts(&self) -> Vec<String> {
        self.prelude.iter().map(|e| e.script.clone()).collect()
    }

    /// Bodies of the deferred scripts, in registry order.
    pub fn deferred_scripts(&self) -> Vec<String> {
        self.deferred.iter().map(|e| e.script.clone()).collect()
    }

    /// Applies the capture to the registry.
    ///
    /// Deferred entries are removed, prelude entries are left where they
    /// are, and each bootstrap line is appended to the deferred bucket.
    /// Returns the keys of the appended lines.
    pub fn commit(&self, registry: &mut dyn ScriptRegistry, bootstrap: &[String]) -> Vec<String> {
        for entry in &self.deferred {
            registry.remove(entry.position, &entry.key);
        }
        bootstrap
            .iter()
            .map(|line| registry.append(DEFERRED_POSITION, line.clone()))
            .collect()
    }
}
