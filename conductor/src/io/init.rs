//! Initialization helpers for `.conductor/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::config::{CONFIG_FILE_NAME, ConductorConfig, load_config, write_config};

/// Canonical paths within `.conductor/` for a workspace root.
#[derive(Debug, Clone)]
pub struct ConductorPaths {
    pub root: PathBuf,
    pub conductor_dir: PathBuf,
    pub config_path: PathBuf,
    pub projects_dir: PathBuf,
}

impl ConductorPaths {
    /// Paths using the default projects directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_projects_dir(root, &ConductorConfig::default().projects_dir)
    }

    pub fn with_projects_dir(root: impl Into<PathBuf>, projects_dir: &str) -> Self {
        let root = root.into();
        let conductor_dir = root.join(".conductor");
        Self {
            root,
            config_path: conductor_dir.join(CONFIG_FILE_NAME),
            projects_dir: conductor_dir.join(projects_dir),
            conductor_dir,
        }
    }

    /// Resolve paths for `root`, honoring the configured projects directory.
    pub fn load(root: &Path) -> Result<(Self, ConductorConfig)> {
        let config_path = Self::new(root).config_path;
        let config = load_config(&config_path).context("load config.toml")?;
        let paths = Self::with_projects_dir(root, &config.projects_dir);
        Ok((paths, config))
    }
}

/// Options for `init_conductor`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config with defaults.
    pub force: bool,
}

/// Create `.conductor/` scaffolding in `root`.
///
/// Fails if `.conductor/` already exists unless `options.force` is set.
/// Existing project state files are never removed.
pub fn init_conductor(root: &Path, options: &InitOptions) -> Result<ConductorPaths> {
    let paths = ConductorPaths::new(root);
    if paths.conductor_dir.exists() && !paths.conductor_dir.is_dir() {
        return Err(anyhow!(
            "conductor init: .conductor exists but is not a directory"
        ));
    }
    if paths.conductor_dir.exists() && !options.force {
        return Err(anyhow!(
            "conductor init: .conductor already exists (use --force to overwrite)"
        ));
    }

    create_dir(&paths.conductor_dir)?;
    create_dir(&paths.projects_dir)?;
    write_config(&paths.config_path, &ConductorConfig::default())?;

    Ok(paths)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Init creates the directory layout and a default config.
    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_conductor(temp.path(), &InitOptions { force: false }).expect("init");

        assert!(paths.conductor_dir.is_dir());
        assert!(paths.projects_dir.is_dir());
        assert!(paths.config_path.is_file());
        let cfg = load_config(&paths.config_path).expect("load");
        assert_eq!(cfg, ConductorConfig::default());
    }

    #[test]
    fn init_without_force_refuses_existing_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_conductor(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_conductor(temp.path(), &InitOptions { force: false })
            .expect_err("second init");
        assert!(err.to_string().contains("already exists"));
    }

    /// Forced init restores the default config.
    #[test]
    fn init_with_force_rewrites_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_conductor(temp.path(), &InitOptions { force: false }).expect("init");
        fs::write(&paths.config_path, "projects_dir = \"custom\"\n").expect("write custom");

        init_conductor(temp.path(), &InitOptions { force: true }).expect("re-init");
        let cfg = load_config(&paths.config_path).expect("load");
        assert_eq!(cfg.projects_dir, "projects");
    }

    #[test]
    fn load_uses_configured_projects_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_conductor(temp.path(), &InitOptions { force: false }).expect("init");
        fs::write(&paths.config_path, "projects_dir = \"roadmaps\"\n").expect("write");

        let (loaded, cfg) = ConductorPaths::load(temp.path()).expect("load");
        assert_eq!(cfg.projects_dir, "roadmaps");
        assert_eq!(loaded.projects_dir, temp.path().join(".conductor/roadmaps"));
    }
}
