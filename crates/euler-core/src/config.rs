use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "EULER_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerConfig {
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the random graph sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    #[serde(default = "default_vertices")]
    pub vertices: usize,
    /// The sweep generates one graph per bound in `1..=max_parallel`.
    #[serde(default = "default_max_parallel")]
    pub max_parallel: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            max_parallel: default_max_parallel(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

const fn default_vertices() -> usize {
    6
}

const fn default_max_parallel() -> u32 {
    5
}

fn default_format() -> String {
    "pretty".to_string()
}

/// Load configuration from `path`. A missing file yields defaults.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<EulerConfig> {
    if !path.exists() {
        return Ok(EulerConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<EulerConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Pick the config file: explicit path, then `EULER_CONFIG`, then
/// `<config dir>/euler/config.toml`.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("euler/config.toml"))
}

/// Resolve and load the effective configuration.
///
/// # Errors
///
/// Fails if the resolved file exists but is unreadable or malformed.
pub fn resolve_config(explicit: Option<&Path>) -> Result<EulerConfig> {
    match config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(EulerConfig::default()),
    }
}
