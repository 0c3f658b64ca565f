use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runtime configuration. Scoring weights and validation limits are
/// tunable through the config file; everything else about the decomposition
/// (keyword tables, trigger lists) is fixed.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub limits: ValidationLimits,
}

/// Weights for the derived request scores. The contract is additivity and
/// non-negativity; the numbers themselves are tuning knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub complexity_per_entity: f32,
    pub complexity_per_keyword: f32,
    pub priority_base: i8,
    pub urgency_boost: i8,
    pub low_priority_drop: i8,
    pub work_base: u32,
    pub work_per_entity: u32,
    pub work_per_dependency: u32,
    pub work_per_indicator: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            complexity_per_entity: 0.5,
            complexity_per_keyword: 1.5,
            priority_base: 5,
            urgency_boost: 2,
            low_priority_drop: 2,
            work_base: 500,
            work_per_entity: 100,
            work_per_dependency: 200,
            work_per_indicator: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub min_request_len: usize,
    pub max_request_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_request_len: 10,
            max_request_len: 2000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    scoring: Option<ScoringConfig>,
    limits: Option<ValidationLimits>,
}

impl AppConfig {
    /// Load the global config file when present; defaults otherwise.
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let file: FileConfig = match toml::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                warn!("ignoring malformed config {}: {}", path.display(), e);
                FileConfig::default()
            }
        };
        info!("config loaded from {}", path.display());
        Ok(Self {
            scoring: file.scoring.unwrap_or_default(),
            limits: file.limits.unwrap_or_default(),
        })
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasksmith").join("config.toml"))
}
