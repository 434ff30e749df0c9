//! Per-project roadmap state storage (`.conductor/projects/<id>.json`).
//!
//! This is the local persistence collaborator for the roadmap state machine.
//! Writes are last-write-wins; there is no locking between processes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use super::init::ConductorPaths;
use crate::core::types::RoadmapState;

const ROADMAP_STATE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/roadmap_state/v1.schema.json"
));

/// Validate that a project id is safe to use as a file name.
pub fn validate_project_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(anyhow!("project id must not be empty"));
    }
    if id.starts_with('.') {
        return Err(anyhow!("project id must not start with '.' (got '{id}')"));
    }
    if id
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'))
    {
        return Err(anyhow!(
            "project id must be [A-Za-z0-9._-] only (got '{id}')"
        ));
    }
    Ok(())
}

/// Path of the state file for `project_id`.
pub fn project_state_path(paths: &ConductorPaths, project_id: &str) -> Result<PathBuf> {
    validate_project_id(project_id)?;
    Ok(paths.projects_dir.join(format!("{project_id}.json")))
}

/// Load roadmap state for a project.
///
/// A project without a state file starts from `RoadmapState::default()`.
pub fn load_roadmap_state(paths: &ConductorPaths, project_id: &str) -> Result<RoadmapState> {
    let path = project_state_path(paths, project_id)?;
    if !path.exists() {
        debug!(project_id, path = %path.display(), "no roadmap state; starting fresh");
        return Ok(RoadmapState::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("read roadmap state {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse roadmap state {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate {}", path.display()))?;
    let state: RoadmapState = serde_json::from_value(value)
        .with_context(|| format!("deserialize roadmap state {}", path.display()))?;
    debug!(
        project_id,
        requires_remix = %state.requires_remix,
        current_step = %state.current_step_key,
        "roadmap state loaded"
    );
    Ok(state)
}

/// Atomically write roadmap state (temp file + rename).
pub fn save_roadmap_state(
    paths: &ConductorPaths,
    project_id: &str,
    state: &RoadmapState,
) -> Result<()> {
    let path = project_state_path(paths, project_id)?;
    debug!(
        project_id,
        requires_remix = %state.requires_remix,
        current_step = %state.current_step_key,
        "writing roadmap state"
    );
    let mut buf = serde_json::to_string_pretty(state)?;
    buf.push('\n');
    write_atomic(&path, &buf)
}

fn validate_schema(state: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(ROADMAP_STATE_SCHEMA).context("parse roadmap state schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(state) {
        let messages = compiled
            .iter_errors(state)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "roadmap state schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("roadmap state path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp roadmap state {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace roadmap state {}", path.display()))?;
    Ok(())
}
