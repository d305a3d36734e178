use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::filename::FileLayout;

/// Global configuration read from `~/.config/htd/config.toml`.
///
/// Every field is optional in the file; missing ones fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtdConfig {
    /// Portal root; endpoints live under `{base_url}/HallTicket/`.
    pub base_url: String,
    /// Identifier prefix (college code and batch year), e.g. `23071A`.
    pub prefix: String,
    /// Directory that receives downloaded tickets. Created on first run.
    pub output_dir: PathBuf,
    /// Pause before each list lookup, in seconds.
    pub delay_secs: f64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout.
    pub timeout_secs: u64,
    /// "flat" (default) or "batch-folder".
    pub layout: FileLayout,
}

impl Default for HtdConfig {
    fn default() -> Self {
        Self {
            base_url: "https://vnrvjietexams.net/EduPrime3Exam".to_string(),
            prefix: "23071A".to_string(),
            output_dir: PathBuf::from("hall_downloads"),
            delay_secs: 0.5,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            layout: FileLayout::Flat,
        }
    }
}

impl HtdConfig {
    /// Polite delay as a `Duration`; negative or non-finite values mean no delay.
    pub fn delay(&self) -> Duration {
        if self.delay_secs.is_finite() && self.delay_secs > 0.0 {
            Duration::from_secs_f64(self.delay_secs)
        } else {
            Duration::ZERO
        }
    }
}

/// Location of an existing config file, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("htd")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults if no file exists.
/// The file is only ever read.
pub fn load() -> Result<HtdConfig> {
    match config_path()? {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(HtdConfig::default())
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<HtdConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: HtdConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}
