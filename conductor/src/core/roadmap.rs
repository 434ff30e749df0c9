//! Construction roadmap state machine.
//!
//! Every transition takes a [`RoadmapState`] by reference and returns a new
//! value; nothing here mutates shared state or performs I/O. Persisting the
//! result is the caller's job.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::roadmap_catalog::{
    ConditionalGroup, ROADMAP_STEPS, RoadmapStepDefinition, find_step,
};
use crate::core::types::{RemixDecision, RoadmapState};

/// Why a step key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStepReason {
    /// The key is not part of the roadmap at all.
    NotInCatalog,
    /// The step is shown but cannot be selected until the remix decision is made.
    Disabled,
    /// The step belongs to the branch the remix decision ruled out.
    Excluded,
}

impl fmt::Display for InvalidStepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidStepReason::NotInCatalog => "not in the roadmap",
            InvalidStepReason::Disabled => "disabled until the remix decision is made",
            InvalidStepReason::Excluded => "excluded by the remix decision",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoadmapError {
    #[error("invalid step '{key}': {reason}")]
    InvalidStep {
        key: String,
        reason: InvalidStepReason,
    },
}

impl RoadmapError {
    fn invalid(key: &str, reason: InvalidStepReason) -> Self {
        RoadmapError::InvalidStep {
            key: key.to_string(),
            reason,
        }
    }
}

/// How a catalog step presents under a given remix decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Enabled,
    Disabled,
    Excluded,
}

/// Availability of `step` under `decision`.
pub fn availability(decision: RemixDecision, step: &RoadmapStepDefinition) -> Availability {
    match (decision, step.conditional_group) {
        (_, None) => Availability::Enabled,
        (RemixDecision::Unknown, Some(_)) => Availability::Disabled,
        (RemixDecision::RequiresRemix, Some(ConditionalGroup::RemixOnly))
        | (RemixDecision::NoRemixNeeded, Some(ConditionalGroup::NoRemixOnly)) => {
            Availability::Enabled
        }
        (RemixDecision::RequiresRemix, Some(ConditionalGroup::NoRemixOnly))
        | (RemixDecision::NoRemixNeeded, Some(ConditionalGroup::RemixOnly)) => {
            Availability::Excluded
        }
    }
}

/// A catalog step as presented for a particular state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleStep {
    #[serde(flatten)]
    pub step: &'static RoadmapStepDefinition,
    pub is_disabled: bool,
    pub is_active: bool,
}

/// Steps shown for `state`, in catalog order.
///
/// Excluded branches are filtered out. While the remix decision is unknown
/// both branches are listed but disabled. `is_active` marks the open step.
pub fn visible_steps(state: &RoadmapState) -> Vec<VisibleStep> {
    let open = state.open_step_key.as_deref();
    ROADMAP_STEPS
        .iter()
        .filter_map(|step| {
            let is_disabled = match availability(state.requires_remix, step) {
                Availability::Excluded => return None,
                Availability::Disabled => true,
                Availability::Enabled => false,
            };
            Some(VisibleStep {
                step,
                is_disabled,
                is_active: open == Some(step.key),
            })
        })
        .collect()
}

/// Record the remix decision.
///
/// The current and open steps are carried over unchanged, even when the new
/// decision excludes the current step; see [`crate::core::invariants`].
/// Reversing an earlier decision is allowed.
pub fn set_requires_remix(state: &RoadmapState, requires_remix: bool) -> RoadmapState {
    let decision = RemixDecision::from_bool(requires_remix);
    debug!(from = %state.requires_remix, to = %decision, "remix decision set");
    RoadmapState {
        requires_remix: decision,
        ..state.clone()
    }
}

/// Mark `key` as the project's current step.
///
/// Only steps that are visible and enabled under the present decision can
/// be selected. On error the caller keeps its original state.
pub fn set_current_step(state: &RoadmapState, key: &str) -> Result<RoadmapState, RoadmapError> {
    let step = find_step(key)
        .ok_or_else(|| RoadmapError::invalid(key, InvalidStepReason::NotInCatalog))?;
    match availability(state.requires_remix, step) {
        Availability::Enabled => {}
        Availability::Disabled => {
            return Err(RoadmapError::invalid(key, InvalidStepReason::Disabled));
        }
        Availability::Excluded => {
            return Err(RoadmapError::invalid(key, InvalidStepReason::Excluded));
        }
    }
    debug!(from = %state.current_step_key, to = key, "current step set");
    Ok(RoadmapState {
        current_step_key: key.to_string(),
        ..state.clone()
    })
}

/// Expand `key` in the detail view. Disabled steps may be opened.
pub fn set_open_step(state: &RoadmapState, key: &str) -> Result<RoadmapState, RoadmapError> {
    if find_step(key).is_none() {
        return Err(RoadmapError::invalid(key, InvalidStepReason::NotInCatalog));
    }
    Ok(RoadmapState {
        open_step_key: Some(key.to_string()),
        ..state.clone()
    })
}
