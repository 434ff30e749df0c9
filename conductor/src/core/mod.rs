//! Deterministic, pure logic for term options and the construction roadmap.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod invariants;
pub mod roadmap;
pub mod roadmap_catalog;
pub mod term_catalog;
pub mod terms;
pub mod types;
