//! Conductor configuration stored under `.conductor/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of the config inside `.conductor/`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Conductor configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConductorConfig {
    /// Pin the term generator's "today" (`YYYY-MM-DD`). Unset means the
    /// local date at invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,

    /// Directory under `.conductor/` holding one roadmap state file per project.
    pub projects_dir: String,
}

impl Default for ConductorConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            projects_dir: "projects".to_string(),
        }
    }
}

impl ConductorConfig {
    pub fn validate(&self) -> Result<()> {
        let dir = self.projects_dir.as_str();
        if dir.trim().is_empty() {
            return Err(anyhow!("projects_dir must not be empty"));
        }
        if dir.trim() != dir {
            return Err(anyhow!(
                "projects_dir must not have surrounding whitespace (got '{}')",
                dir
            ));
        }
        if dir == CONFIG_FILE_NAME {
            return Err(anyhow!("projects_dir must not be '{}'", CONFIG_FILE_NAME));
        }
        if dir.contains(['/', '\\']) || dir == "." || dir == ".." {
            return Err(anyhow!(
                "projects_dir must be a single directory name (got '{}')",
                self.projects_dir
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ConductorConfig::default()`.
pub fn load_config(path: &Path) -> Result<ConductorConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing; using defaults");
        let cfg = ConductorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ConductorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), reference_date = ?cfg.reference_date, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ConductorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
