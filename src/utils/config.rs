//! Application configuration

use crate::catalog::PhraseCatalog;
use crate::shortcuts::{ShortcutBinding, ShortcutMap};
use crate::utils::ItcError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Shortest time a status message stays on screen
pub const MIN_STATUS_TIMEOUT_MS: u64 = 500;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Color scheme
    pub theme: ThemeChoice,

    /// Alt+key shortcuts while the window is focused
    pub shortcuts_enabled: bool,

    /// Per-phrase bindings, by catalog index
    pub shortcuts: Vec<ShortcutBinding>,

    /// How long "copied" messages stay visible
    pub status_timeout_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            shortcuts_enabled: true,
            shortcuts: ShortcutMap::defaults(&PhraseCatalog::builtin()).to_bindings(),
            status_timeout_ms: 3000,
        }
    }
}

/// Color scheme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    /// Get string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Dark => "Dark",
            ThemeChoice::Light => "Light",
        }
    }
}

impl AppSettings {
    /// Read settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ItcError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }

    /// Like [`AppSettings::load`], but a broken file is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ItcError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Drop bindings the catalog can't honor (first binding of a key wins) and clamp
    /// the timeout.
    pub fn validate(&mut self, catalog_len: usize) {
        let mut seen_keys = HashSet::new();
        let mut seen_indices = HashSet::new();
        self.shortcuts.retain(|binding| {
            let keep = binding.index < catalog_len
                && !seen_indices.contains(&binding.index)
                && !seen_keys.contains(&binding.key);
            if keep {
                seen_indices.insert(binding.index);
                seen_keys.insert(binding.key.clone());
            } else {
                warn!("Dropping shortcut {} for phrase #{}", binding.key, binding.index);
            }
            keep
        });

        if self.status_timeout_ms < MIN_STATUS_TIMEOUT_MS {
            self.status_timeout_ms = MIN_STATUS_TIMEOUT_MS;
        }
    }

    /// Shortcut map for a validated settings value.
    pub fn shortcut_map(&self, catalog_len: usize) -> Result<ShortcutMap, ItcError> {
        ShortcutMap::from_bindings(&self.shortcuts, catalog_len)
    }
}
