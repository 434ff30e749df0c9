//! Shared deterministic types for the planning core.
//!
//! These types define stable contracts between core components and the
//! persistence layer. They must not depend on external state or I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable academic term produced by the term generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOption {
    /// Definition key followed by the two-digit year (e.g. `fq24`).
    pub key: String,
    /// Display label, `"{text_prefix} {full_year}"`.
    pub text: String,
    /// Same as `key`.
    pub value: String,
}

impl TermOption {
    /// The "no selection" entry placed at the head of every option list.
    pub fn sentinel() -> Self {
        Self {
            key: String::new(),
            text: "Choose...".to_string(),
            value: String::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.key.is_empty()
    }
}

/// Whether a project needs to remix existing resources.
///
/// `Unknown` is only the initial value; once a decision is recorded it is
/// never explicitly re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemixDecision {
    #[default]
    Unknown,
    RequiresRemix,
    NoRemixNeeded,
}

impl RemixDecision {
    pub fn from_bool(requires_remix: bool) -> Self {
        if requires_remix {
            RemixDecision::RequiresRemix
        } else {
            RemixDecision::NoRemixNeeded
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RemixDecision::Unknown => "unknown",
            RemixDecision::RequiresRemix => "requires_remix",
            RemixDecision::NoRemixNeeded => "no_remix_needed",
        }
    }
}

impl fmt::Display for RemixDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roadmap progress for a single project.
///
/// `requires_remix` and `current_step_key` are persisted; `open_step_key` is
/// transient navigation state and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapState {
    pub requires_remix: RemixDecision,
    /// Empty when the project has not marked a current step.
    pub current_step_key: String,
    #[serde(skip)]
    pub open_step_key: Option<String>,
}
