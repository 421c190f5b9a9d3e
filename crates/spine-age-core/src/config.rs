//! spine-age configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::estimator::SpineAgePolicy;

/// Which report documents to write when a report is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Html,
    All,
}

impl ReportFormat {
    pub fn includes_pdf(self) -> bool {
        matches!(self, ReportFormat::Pdf | ReportFormat::All)
    }

    pub fn includes_html(self) -> bool {
        matches!(self, ReportFormat::Html | ReportFormat::All)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::All => write!(f, "all"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "html" => Ok(ReportFormat::Html),
            "all" => Ok(ReportFormat::All),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Top-level spine-age configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpineAgeConfig {
    /// Decision table used for the estimate.
    #[serde(default)]
    pub policy: SpineAgePolicy,
    /// Directory holding the per-email progress logs.
    #[serde(default = "default_dir")]
    pub log_dir: PathBuf,
    /// Directory receiving report documents.
    #[serde(default = "default_dir")]
    pub output_dir: PathBuf,
    /// Report documents to write.
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SpineAgeConfig {
    fn default() -> Self {
        Self {
            policy: SpineAgePolicy::default(),
            log_dir: default_dir(),
            output_dir: default_dir(),
            format: ReportFormat::default(),
        }
    }
}

/// Config file name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "spine-age.toml";

/// Load config from an explicit path, or search the default locations.
///
/// Without an explicit path the search order is:
/// 1. `spine-age.toml` in the current directory
/// 2. `~/.config/spine-age/config.toml`
///
/// Environment variable overrides: `SPINE_AGE_LOG_DIR`, `SPINE_AGE_POLICY`.
pub fn load_config_from(path: Option<&Path>) -> Result<SpineAgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SpineAgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SpineAgeConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut SpineAgeConfig) -> Result<()> {
    if let Ok(dir) = std::env::var("SPINE_AGE_LOG_DIR") {
        if !dir.is_empty() {
            config.log_dir = PathBuf::from(dir);
        }
    }
    if let Ok(policy) = std::env::var("SPINE_AGE_POLICY") {
        if !policy.is_empty() {
            config.policy = policy
                .parse()
                .context("invalid SPINE_AGE_POLICY environment variable")?;
        }
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("spine-age"))
}
