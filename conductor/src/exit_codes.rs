//! Stable exit codes for conductor CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, config, state file, or other errors.
pub const INVALID: i32 = 1;
/// A step key was rejected: `roadmap set-current` refused the transition (stored
/// state is unchanged) or `roadmap show --open` named a step not in the roadmap.
pub const INVALID_STEP: i32 = 2;
/// `conductor roadmap check` found a current step the remix decision no longer allows.
pub const CONFLICT: i32 = 3;
