//! In-memory key-binding table.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Two actions bound to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingConflict {
    /// The contested key.
    pub key: String,
    /// All actions currently bound to it.
    pub actions: Vec<String>,
}

/// The binding table: action name -> key chord.
///
/// Read-mostly; `BTreeMap` keeps listings stable for the UI.
#[derive(Default)]
pub struct KeyBindingStore {
    bindings: RwLock<BTreeMap<String, String>>,
}

impl KeyBindingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the stock game bindings.
    #[must_use]
    pub fn with_defaults() -> Self {
        let store = Self::new();
        {
            let mut bindings = store.bindings.write();
            bindings.insert("open_catalog".to_string(), "F1".to_string());
            bindings.insert("toggle_build_mode".to_string(), "F2".to_string());
            bindings.insert("screenshot".to_string(), "F12".to_string());
        }
        store
    }

    /// Snapshot of the full table.
    #[must_use]
    pub fn all(&self) -> BTreeMap<String, String> {
        self.bindings.read().clone()
    }

    /// Bind `action` to `key`, returning the previous key if any.
    pub fn set(&self, action: impl Into<String>, key: impl Into<String>) -> Option<String> {
        self.bindings.write().insert(action.into(), key.into())
    }

    /// Find every key bound to more than one action.
    #[must_use]
    pub fn conflicts(&self) -> Vec<BindingConflict> {
        let bindings = self.bindings.read();
        let mut by_key: HashMap<&str, Vec<&str>> = HashMap::new();
        for (action, key) in bindings.iter() {
            by_key.entry(key.as_str()).or_default().push(action.as_str());
        }

        let mut conflicts: Vec<BindingConflict> = by_key
            .into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| BindingConflict {
                key: key.to_string(),
                actions: actions.into_iter().map(String::from).collect(),
            })
            .collect();
        conflicts.sort_by(|a, b| a.key.cmp(&b.key));
        conflicts
    }
}
