use super::Settings;
use crate::error::{Result, SiftError};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::Serialize;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-level config file stem, looked up in the working directory
const REPO_CONFIG_STEM: &str = "pathsift";

pub struct SiftConfig {
    figment: Figment,
}

impl SiftConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        Self::load_with_overrides(custom_config, None::<()>)
    }

    /// Load the layered configuration.
    ///
    /// Lowest to highest: embedded defaults, user config, repository config
    /// (or only the custom file when one is given), `PATHSIFT_` environment
    /// variables, then CLI overrides.
    pub fn load_with_overrides<T: Serialize>(
        custom_config: Option<&str>,
        cli_overrides: Option<T>,
    ) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            if !std::path::Path::new(custom_path).exists() {
                tracing::warn!("Config file {} not found, using defaults", custom_path);
            }
            let extension = std::path::Path::new(custom_path)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            figment = match extension.as_deref() {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            let user = Self::user_config_base_path();
            figment = figment
                .merge(Toml::file(format!("{user}.toml")))
                .merge(Json::file(format!("{user}.json")))
                .merge(Yaml::file(format!("{user}.yaml")))
                .merge(Yaml::file(format!("{user}.yml")))
                .merge(Toml::file(format!("{REPO_CONFIG_STEM}.toml")))
                .merge(Json::file(format!("{REPO_CONFIG_STEM}.json")))
                .merge(Yaml::file(format!("{REPO_CONFIG_STEM}.yaml")))
                .merge(Yaml::file(format!("{REPO_CONFIG_STEM}.yml")));
        }

        // Environment variables beat every file
        figment = figment.merge(Env::prefixed("PATHSIFT_").split("__"));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(figment::providers::Serialized::defaults(overrides));
        }

        Ok(SiftConfig { figment })
    }

    /// Typed view of the merged configuration
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| SiftError::Config(e.to_string()))
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        self.figment
            .extract_inner(path)
            .map_err(|e| SiftError::Config(e.to_string()))
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        self.figment
            .extract()
            .map_err(|e| SiftError::Config(e.to_string()))
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/pathsift/config", home),
            Err(_) => "~/.config/pathsift/config".to_string(),
        }
    }
}
