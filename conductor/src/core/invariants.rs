//! Roadmap state invariants that transitions deliberately do not enforce.
//!
//! Changing the remix decision never rewrites `current_step_key`, so a stored
//! state can point at a step the new decision excludes. These checks report
//! that conflict to the caller instead of repairing it.

use crate::core::roadmap::{Availability, availability};
use crate::core::roadmap_catalog::find_step;
use crate::core::types::RoadmapState;

/// Check that the current step is selectable under the remix decision:
/// - the key exists in the catalog
/// - the step is not disabled
/// - the step is not excluded
///
/// An empty current step is always valid. Returns stable messages (empty on
/// success).
pub fn roadmap_conflicts(state: &RoadmapState) -> Vec<String> {
    let mut errors = Vec::new();
    let key = state.current_step_key.as_str();
    if key.is_empty() {
        return errors;
    }

    let Some(step) = find_step(key) else {
        errors.push(format!("current step '{}' is not in the roadmap", key));
        return errors;
    };

    match availability(state.requires_remix, step) {
        Availability::Enabled => {}
        Availability::Disabled => errors.push(format!(
            "current step '{}' is disabled while requires_remix={}",
            key, state.requires_remix
        )),
        Availability::Excluded => errors.push(format!(
            "current step '{}' is excluded by requires_remix={}",
            key, state.requires_remix
        )),
    }

    errors
}
