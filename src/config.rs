//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use chat_widget::app::HostPageOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PKG_DIR: &str = "widget/pkg";
pub const DEFAULT_TITLE: &str = "Hi there 👋";
pub const DEFAULT_SUBTITLE: &str = "We typically reply in a few minutes";

/// Error parsing host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding the wasm-bindgen output served under `/pkg`.
    pub pkg_dir: PathBuf,
    pub title: String,
    pub subtitle: String,
    pub restore_state: bool,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WIDGET_PKG_DIR`: default `widget/pkg`
    /// - `WIDGET_TITLE`, `WIDGET_SUBTITLE`: attributes of the demo tag
    /// - `WIDGET_RESTORE_STATE`: `true`/`1`/`yes` or `false`/`0`/`no`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let restore_state = match lookup("WIDGET_RESTORE_STATE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "WIDGET_RESTORE_STATE", value: raw })?,
            None => false,
        };

        Ok(Self {
            port,
            pkg_dir: lookup("WIDGET_PKG_DIR").map_or_else(|| PathBuf::from(DEFAULT_PKG_DIR), PathBuf::from),
            title: lookup("WIDGET_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            subtitle: lookup("WIDGET_SUBTITLE").unwrap_or_else(|| DEFAULT_SUBTITLE.to_owned()),
            restore_state,
        })
    }

    /// Options for the server-rendered demo page.
    pub fn page_options(&self) -> HostPageOptions {
        HostPageOptions {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            restore_state: self.restore_state,
            ..HostPageOptions::default()
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
