//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default acknowledgment shown after a successful submit
pub const DEFAULT_ACK_MESSAGE: &str = "Form submitted successfully!";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Mask the password field with `*` (default true)
    pub mask_password: Option<bool>,
    /// Show the static contact information panel (default true)
    pub show_contact_info: Option<bool>,
    /// Text of the submit acknowledgment dialog
    pub ack_message: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "company", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, logging and falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    pub fn show_contact_info(&self) -> bool {
        self.show_contact_info.unwrap_or(true)
    }

    pub fn ack_message(&self) -> &str {
        self.ack_message.as_deref().unwrap_or(DEFAULT_ACK_MESSAGE)
    }
}
