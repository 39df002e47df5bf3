//! Named-value store for persisted UI selections.
//!
//! The surrounding application remembers a handful of UI selections across
//! sessions (which item is open, panel width). This is a generic
//! "named value with default" store with no further semantics: values are
//! JSON, reads fall back to a caller-supplied default, and the whole map
//! round-trips through a JSON file.
//!
//! # Usage
//!
//! ```
//! use neurona::store::UiStore;
//!
//! let mut store = UiStore::new();
//! assert_eq!(store.get_or("panel_width", 240.0), 240.0);
//!
//! store.set("panel_width", 320.0).unwrap();
//! assert_eq!(store.get_or("panel_width", 240.0), 320.0);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// In-memory key-value store with JSON file persistence.
#[derive(Debug, Clone, Default)]
pub struct UiStore {
    values: HashMap<String, serde_json::Value>,
}

impl UiStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `NeuronaError::Io` if the file cannot be read and
    /// `NeuronaError::Serialization` if it is not a JSON object of values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let values = serde_json::from_str(&contents)?;
        Ok(Self { values })
    }

    /// Writes the store to a JSON file, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns `NeuronaError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Reads a named value, falling back to `default` when the key is
    /// missing or its stored value does not deserialize as `T`.
    #[must_use]
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or(default)
    }

    /// Stores a named value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `NeuronaError::Serialization` if the value cannot be
    /// represented as JSON.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Removes a named value, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
