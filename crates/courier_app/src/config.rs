//! Host configuration, read from `courier.ron` next to the binary.
//!
//! A missing file silently falls back to defaults; a malformed file is
//! reported and the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use client_logging::{client_error, client_warn};
use courier_client::ClientSettings;
use courier_core::{FormMode, MatchingParams, ReportKind};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "courier.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server_base_url: String,
    pub download_dir: PathBuf,
    pub mode: FormModeConfig,
    pub kinds: Vec<String>,
    pub defaults: ParamDefaults,
    pub log_destination: LogDestinationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormModeConfig {
    /// One fixed-kind form per enabled kind.
    PerKind,
    /// A single form with a kind selector.
    Unified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDefaults {
    pub max_shows: u8,
    pub fuzzy_cutoff: u8,
    pub token_overlap: u8,
    pub delete_unmatched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestinationConfig {
    File,
    Terminal,
    Both,
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = MatchingParams::default();
        Self {
            server_base_url: "http://127.0.0.1:8000".to_string(),
            download_dir: PathBuf::from("./downloads"),
            mode: FormModeConfig::Unified,
            kinds: ReportKind::ALL
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            defaults: ParamDefaults {
                max_shows: defaults.max_shows,
                fuzzy_cutoff: defaults.fuzzy_cutoff,
                token_overlap: defaults.token_overlap,
                delete_unmatched: defaults.delete_unmatched,
            },
            log_destination: LogDestinationConfig::Both,
        }
    }
}

pub fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            client_warn!("Failed to read config from {:?}: {}", path, err);
            eprintln!("Warning: could not read {}: {}", path.display(), err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            client_error!("Failed to parse config from {:?}: {}", path, err);
            eprintln!(
                "Warning: invalid config {}: {} (using defaults)",
                path.display(),
                err
            );
            AppConfig::default()
        }
    }
}

impl AppConfig {
    pub fn form_mode(&self) -> FormMode {
        match self.mode {
            FormModeConfig::Unified => FormMode::Unified,
            FormModeConfig::PerKind => FormMode::PerKind(self.enabled_kinds()),
        }
    }

    pub fn enabled_kinds(&self) -> Vec<ReportKind> {
        let kinds: Vec<ReportKind> = self
            .kinds
            .iter()
            .filter_map(|name| {
                let kind = ReportKind::from_str(name);
                if kind.is_none() {
                    client_warn!("Unknown report kind '{}' in config, skipping", name);
                }
                kind
            })
            .collect();
        if kinds.is_empty() {
            ReportKind::ALL.to_vec()
        } else {
            kinds
        }
    }

    pub fn matching_defaults(&self) -> MatchingParams {
        MatchingParams {
            max_shows: self.defaults.max_shows.clamp(1, 10),
            fuzzy_cutoff: self.defaults.fuzzy_cutoff.min(100),
            token_overlap: self.defaults.token_overlap.min(100),
            delete_unmatched: self.defaults.delete_unmatched,
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.server_base_url.clone(),
            download_dir: self.download_dir.clone(),
            ..ClientSettings::default()
        }
    }
}
