//! Planning core for Conductor textbook projects.
//!
//! Two independent pieces of logic back the project timeline views:
//! instructional term options for adoption reporting, and the construction
//! roadmap that walks authors from account setup to publishing. The crate
//! keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (term generation, roadmap
//!   transitions, invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, per-project state files,
//!   text rendering).
//!
//! Orchestration modules ([`terms`], [`roadmap`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod roadmap;
pub mod terms;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
