//! Roadmap helpers for `conductor roadmap`.
//!
//! Each command follows the same sequence: load the project's state, apply a
//! pure transition, save the result. A rejected transition leaves the stored
//! state untouched.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::invariants::roadmap_conflicts;
use crate::core::roadmap::{
    VisibleStep, set_current_step, set_open_step, set_requires_remix, visible_steps,
};
use crate::core::roadmap_catalog::{RoadmapStepDefinition, find_step};
use crate::core::types::{RemixDecision, RoadmapState};
use crate::io::init::ConductorPaths;
use crate::io::roadmap_store::{load_roadmap_state, save_roadmap_state};

/// Everything needed to present a project's roadmap.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapView {
    pub project_id: String,
    pub requires_remix: RemixDecision,
    pub current_step_key: String,
    pub open_step: Option<&'static RoadmapStepDefinition>,
    pub steps: Vec<VisibleStep>,
    pub conflicts: Vec<String>,
}

/// Build the view for an in-memory state.
pub fn build_view(project_id: &str, state: &RoadmapState) -> RoadmapView {
    RoadmapView {
        project_id: project_id.to_string(),
        requires_remix: state.requires_remix,
        current_step_key: state.current_step_key.clone(),
        open_step: state.open_step_key.as_deref().and_then(find_step),
        steps: visible_steps(state),
        conflicts: roadmap_conflicts(state),
    }
}

/// Load a project's roadmap and build its view, optionally opening a step.
pub fn show_roadmap(root: &Path, project_id: &str, open: Option<&str>) -> Result<RoadmapView> {
    let (paths, _) = ConductorPaths::load(root)?;
    let mut state = load_roadmap_state(&paths, project_id)
        .with_context(|| format!("load roadmap for {project_id}"))?;
    if let Some(key) = open {
        state = set_open_step(&state, key)?;
    }
    Ok(build_view(project_id, &state))
}

/// Record the remix decision and persist it.
///
/// Returns the saved state and any conflicts the new decision created.
pub fn update_remix(
    root: &Path,
    project_id: &str,
    requires_remix: bool,
) -> Result<(RoadmapState, Vec<String>)> {
    let (paths, _) = ConductorPaths::load(root)?;
    let state = load_roadmap_state(&paths, project_id)
        .with_context(|| format!("load roadmap for {project_id}"))?;
    let next = set_requires_remix(&state, requires_remix);
    save_roadmap_state(&paths, project_id, &next)
        .with_context(|| format!("save roadmap for {project_id}"))?;

    let conflicts = roadmap_conflicts(&next);
    for conflict in &conflicts {
        warn!(project_id, "{conflict}");
    }
    info!(project_id, requires_remix = %next.requires_remix, "remix decision saved");
    Ok((next, conflicts))
}

/// Move the project's current step and persist it.
///
/// Fails with [`crate::core::roadmap::RoadmapError`] (reachable via
/// `anyhow::Error::downcast_ref`) when the step cannot be selected; nothing is
/// written in that case.
pub fn update_current_step(root: &Path, project_id: &str, key: &str) -> Result<RoadmapState> {
    let (paths, _) = ConductorPaths::load(root)?;
    let state = load_roadmap_state(&paths, project_id)
        .with_context(|| format!("load roadmap for {project_id}"))?;
    let next = set_current_step(&state, key)?;
    save_roadmap_state(&paths, project_id, &next)
        .with_context(|| format!("save roadmap for {project_id}"))?;
    info!(project_id, current_step = key, "current step saved");
    Ok(next)
}

/// Report conflicts in a project's stored roadmap.
pub fn check_roadmap(root: &Path, project_id: &str) -> Result<Vec<String>> {
    let (paths, _) = ConductorPaths::load(root)?;
    let state = load_roadmap_state(&paths, project_id)
        .with_context(|| format!("load roadmap for {project_id}"))?;
    Ok(roadmap_conflicts(&state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roadmap::{InvalidStepReason, RoadmapError};
    use crate::test_support::TestProject;

    #[test]
    fn show_roadmap_for_new_project_is_undecided() {
        let project = TestProject::new().expect("project");
        let view = show_roadmap(project.path(), "p1", None).expect("show");
        assert_eq!(view.requires_remix, RemixDecision::Unknown);
        assert_eq!(view.steps.len(), 15);
        assert!(view.open_step.is_none());
        assert!(view.conflicts.is_empty());
    }

    #[test]
    fn show_roadmap_opens_requested_step() {
        let project = TestProject::new().expect("project");
        let view = show_roadmap(project.path(), "p1", Some("5b")).expect("show");
        assert_eq!(view.open_step.map(|s| s.key), Some("5b"));
        let active: Vec<_> = view.steps.iter().filter(|s| s.is_active).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].is_disabled);
    }

    #[test]
    fn show_roadmap_rejects_unknown_open_step() {
        let project = TestProject::new().expect("project");
        let err = show_roadmap(project.path(), "p1", Some("42")).expect_err("unknown");
        assert!(err.downcast_ref::<RoadmapError>().is_some());
    }

    /// Decision then selection persists both values.
    #[test]
    fn remix_then_current_step_persists() {
        let project = TestProject::new().expect("project");
        update_remix(project.path(), "p1", true).expect("remix");
        update_current_step(project.path(), "p1", "5a").expect("current");

        let stored = project.read_state("p1").expect("read");
        assert_eq!(stored.requires_remix, RemixDecision::RequiresRemix);
        assert_eq!(stored.current_step_key, "5a");
    }

    /// A rejected step surfaces the domain error and does not touch disk.
    #[test]
    fn rejected_step_leaves_stored_state_unchanged() {
        let project = TestProject::new().expect("project");
        update_remix(project.path(), "p1", false).expect("remix");
        update_current_step(project.path(), "p1", "6").expect("current");

        let err = update_current_step(project.path(), "p1", "5a").expect_err("excluded");
        let domain = err.downcast_ref::<RoadmapError>().expect("roadmap error");
        assert_eq!(
            domain,
            &RoadmapError::InvalidStep {
                key: "5a".to_string(),
                reason: InvalidStepReason::Excluded,
            }
        );
        let stored = project.read_state("p1").expect("read");
        assert_eq!(stored.current_step_key, "6");
    }

    #[test]
    fn reversing_decision_reports_conflict() {
        let project = TestProject::new().expect("project");
        update_remix(project.path(), "p1", true).expect("remix");
        update_current_step(project.path(), "p1", "5b").expect("current");

        let (state, conflicts) = update_remix(project.path(), "p1", false).expect("reverse");
        assert_eq!(state.current_step_key, "5b");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(
            check_roadmap(project.path(), "p1").expect("check"),
            conflicts
        );
    }
}
