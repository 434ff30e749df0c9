//! Term helpers for `conductor terms` and `conductor term-text`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::core::terms::term_options_for;
use crate::core::types::TermOption;
use crate::io::config::ConductorConfig;
use crate::io::init::ConductorPaths;

/// Pick the reference date: explicit override, then config, then today.
pub fn resolve_reference_date(
    date_override: Option<NaiveDate>,
    config: &ConductorConfig,
    today: NaiveDate,
) -> NaiveDate {
    date_override.or(config.reference_date).unwrap_or(today)
}

/// Load config for `root` and generate term options around the resolved date.
pub fn list_terms(root: &Path, date_override: Option<NaiveDate>) -> Result<Vec<TermOption>> {
    let (_, config) = ConductorPaths::load(root)?;
    let today = Local::now().date_naive();
    let reference = resolve_reference_date(date_override, &config, today);
    debug!(%reference, "resolved term reference date");
    term_options_for(reference).with_context(|| format!("generate terms around {reference}"))
}
