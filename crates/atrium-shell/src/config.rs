//! Shell configuration.
//!
//! A TOML-loadable surface for everything the desktop treats as static
//! configuration: desktop dimensions, the startup popup list and its
//! close delay, the toast duration, and the icon descriptor list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use atrium_types::error::Result;

use crate::icons::{IconDescriptor, IconRegistry};
use crate::theme;

/// Static configuration for one desktop instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub desktop_width: u32,
    pub desktop_height: u32,
    /// Window ids auto-opened at startup and closed after the delay.
    pub popup_windows: Vec<String>,
    pub popup_close_ms: u64,
    pub toast_duration_ms: u64,
    pub icons: Vec<IconDescriptor>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            desktop_width: theme::DESKTOP_W,
            desktop_height: theme::DESKTOP_H,
            popup_windows: Vec::new(),
            popup_close_ms: theme::POPUP_CLOSE_MS,
            toast_duration_ms: theme::TOAST_DURATION_MS,
            icons: IconRegistry::default_set(),
        }
    }
}

impl ShellConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }
}
