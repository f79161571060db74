use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::constants::{
    CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, ENRICHMENT_WORKERS, REQUEST_TIMEOUT_SECS,
};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_enrichment_workers() -> usize {
    ENRICHMENT_WORKERS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_enrichment_workers")]
    pub enrichment_workers: usize,
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            enrichment_workers: default_enrichment_workers(),
            show_progress: default_true(),
        }
    }
}

impl Settings {
    /// Loads settings from `settings_file`, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            debug!(
                "No settings file at '{}', using built-in defaults.",
                settings_file
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }
}
