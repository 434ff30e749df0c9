//! Test-only helpers for building roadmap states and scratch workspaces.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::types::{RemixDecision, RoadmapState};
use crate::io::init::{ConductorPaths, InitOptions, init_conductor};
use crate::io::roadmap_store::{load_roadmap_state, save_roadmap_state};

/// Create a persisted-shape state (no open step).
pub fn roadmap_state(requires_remix: RemixDecision, current_step_key: &str) -> RoadmapState {
    RoadmapState {
        requires_remix,
        current_step_key: current_step_key.to_string(),
        open_step_key: None,
    }
}

/// Temporary workspace with `.conductor/` initialized.
pub struct TestProject {
    temp: TempDir,
    paths: ConductorPaths,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir()?;
        let paths = init_conductor(temp.path(), &InitOptions { force: false })?;
        Ok(Self { temp, paths })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn write_state(&self, project_id: &str, state: &RoadmapState) -> Result<()> {
        save_roadmap_state(&self.paths, project_id, state)
    }

    pub fn read_state(&self, project_id: &str) -> Result<RoadmapState> {
        load_roadmap_state(&self.paths, project_id)
    }
}
