//! I/O helpers for conductor commands.

pub mod config;
pub mod init;
pub mod render;
pub mod roadmap_store;
