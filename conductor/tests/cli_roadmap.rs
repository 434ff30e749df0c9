//! CLI tests for `conductor roadmap` commands.
//!
//! Spawns the conductor binary and verifies exit codes and persisted state
//! for accepted, rejected, and conflicting transitions.

use std::process::Command;

use conductor::core::types::{RemixDecision, RoadmapState};
use conductor::exit_codes;
use conductor::test_support::{TestProject, roadmap_state};

fn conductor(project: &TestProject, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_conductor"))
        .current_dir(project.path())
        .args(args)
        .output()
        .expect("run conductor")
}

#[test]
fn set_current_on_excluded_step_exits_with_invalid_step() {
    let project = TestProject::new().expect("project");
    project
        .write_state("p1", &roadmap_state(RemixDecision::NoRemixNeeded, "4"))
        .expect("write state");

    let output = conductor(&project, &["roadmap", "set-current", "p1", "5a"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID_STEP));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid step '5a'"));
    let stored = project.read_state("p1").expect("read state");
    assert_eq!(stored.current_step_key, "4");
}

#[test]
fn set_remix_then_current_persists() {
    let project = TestProject::new().expect("project");

    let output = conductor(&project, &["roadmap", "set-remix", "p1", "true"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let output = conductor(&project, &["roadmap", "set-current", "p1", "5c"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "current_step=5c\n");

    let stored = project.read_state("p1").expect("read state");
    assert_eq!(
        stored,
        RoadmapState {
            requires_remix: RemixDecision::RequiresRemix,
            current_step_key: "5c".to_string(),
            open_step_key: None,
        }
    );
}

/// Reversing the decision keeps the stale step and `check` reports it.
#[test]
fn check_reports_conflict_after_reversal() {
    let project = TestProject::new().expect("project");
    project
        .write_state("p1", &roadmap_state(RemixDecision::RequiresRemix, "5b"))
        .expect("write state");

    let output = conductor(&project, &["roadmap", "set-remix", "p1", "false"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning: current step '5b'"));

    let output = conductor(&project, &["roadmap", "check", "p1"]);
    assert_eq!(output.status.code(), Some(exit_codes::CONFLICT));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "current step '5b' is excluded by requires_remix=no_remix_needed\n"
    );
}

#[test]
fn show_json_lists_visible_steps() {
    let project = TestProject::new().expect("project");
    project
        .write_state("p1", &roadmap_state(RemixDecision::RequiresRemix, "2"))
        .expect("write state");

    let output = conductor(&project, &["roadmap", "show", "p1", "--json", "--open", "5a"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json view");
    let steps = view["steps"].as_array().expect("steps");
    assert_eq!(steps.len(), 14);
    assert!(steps.iter().all(|s| s["key"] != "6"));
    assert_eq!(view["open_step"]["key"], "5a");
    assert_eq!(view["requires_remix"], "requires_remix");
}

#[test]
fn invalid_project_id_exits_with_invalid() {
    let project = TestProject::new().expect("project");
    let output = conductor(&project, &["roadmap", "show", "../escape"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

/// Opening a step outside the roadmap is a rejected step key, not bad input.
#[test]
fn show_open_unknown_step_exits_with_invalid_step() {
    let project = TestProject::new().expect("project");
    let output = conductor(&project, &["roadmap", "show", "p1", "--open", "13"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID_STEP));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid step '13'"));
}
