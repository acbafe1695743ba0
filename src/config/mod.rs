//! Configuration management for pathsift
//!
//! Settings are layered with figment (see [`SiftConfig`]) and extracted into
//! the typed [`Settings`] tree below.

pub mod core;

pub use core::SiftConfig;

use crate::matcher::Anchoring;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralConfig,
    pub index: IndexConfig,
    pub search: SearchConfig,
    pub sample: SampleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show progress bars
    pub progress: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Rebuild existing index files
    pub overwrite: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub case_sensitive: bool,
    pub anchoring: Anchoring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Maximum number of entries to sample
    pub count: usize,
    /// Plan copies without performing them
    pub dry_run: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            dry_run: true,
        }
    }
}
