//! User-defined component kinds.
//!
//! Custom kinds extend the palette with a name, display label and icon key.
//! The registry is independent of the diagram: deleting a kind leaves nodes
//! of that kind in place, and they render with the fallback icon.

use crate::catalog;
use crate::constants::DEFAULT_ICON;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from registry edits and persistence
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Kind names must be non-empty after trimming
    #[error("Component kind name is empty")]
    EmptyName,

    #[error("'{0}' is a built-in component kind")]
    Builtin(String),

    #[error("Custom component kind '{0}' already exists")]
    Duplicate(String),

    #[error("No data directory available on this platform")]
    NoDataDir,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomKind {
    pub name: String,
    pub label: String,
    pub icon_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomKindRegistry {
    kinds: Vec<CustomKind>,
}

impl CustomKindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind. Empty labels fall back to the name; unknown icon keys
    /// fall back to the default icon.
    pub fn add(&mut self, name: &str, label: &str, icon_name: &str) -> RegistryResult<&CustomKind> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if catalog::is_builtin(name) {
            return Err(RegistryError::Builtin(name.to_string()));
        }
        if self.get(name).is_some() {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        let label = match label.trim() {
            "" => name,
            l => l,
        };
        let icon_name = if catalog::is_known_icon(icon_name) {
            icon_name
        } else {
            DEFAULT_ICON
        };
        debug!(name, label, icon_name, "Custom kind added");
        self.kinds.push(CustomKind {
            name: name.to_string(),
            label: label.to_string(),
            icon_name: icon_name.to_string(),
        });
        Ok(&self.kinds[self.kinds.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Option<CustomKind> {
        let idx = self.kinds.iter().position(|k| k.name == name)?;
        debug!(name, "Custom kind removed");
        Some(self.kinds.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&CustomKind> {
        self.kinds.iter().find(|k| k.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// `<data dir>/archboard/custom_components.json`
    pub fn default_path() -> RegistryResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("archboard").join("custom_components.json"))
            .ok_or(RegistryError::NoDataDir)
    }

    /// Load a registry file. A missing file yields an empty registry.
    pub fn load_from(path: &Path) -> RegistryResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&json)?;
        info!(path = %path.display(), count = registry.len(), "Loaded custom kinds");
        Ok(registry)
    }

    pub fn save_to(&self, path: &Path) -> RegistryResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
