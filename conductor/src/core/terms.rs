//! Instructional term option generation and lookup.
//!
//! The generator works at calendar-month granularity over a window that
//! reaches two years back and six months forward from a reference date.
//! [`TermWindow::around`] is the only fallible step; once a window exists,
//! generation is total.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, trace};

use crate::core::term_catalog::{
    INSTRUCTIONAL_TERMS, InstructionalTermDefinition, find_term_definition,
};
use crate::core::types::TermOption;

/// Fallback returned by [`term_display_text`] for any key it cannot resolve.
pub const UNKNOWN_TERM: &str = "Unknown Term";

const HISTORY_MONTHS: u32 = 24;
const LOOKAHEAD_MONTHS: u32 = 6;

/// Keys at or beyond this length are outside the supported `{key}{yy}` shape.
const MAX_DISPLAY_KEY_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermError {
    #[error("reference date {reference} puts the term window outside the supported calendar")]
    WindowOutOfRange { reference: NaiveDate },
}

/// Validated date window for term generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermWindow {
    pub reference: NaiveDate,
    pub historical_bound: NaiveDate,
    pub future_bound: NaiveDate,
}

impl TermWindow {
    /// Build the window around `reference` using calendar-month arithmetic.
    ///
    /// Days past the end of the target month clamp to its last day
    /// (2024-02-29 minus two years is 2022-02-28).
    pub fn around(reference: NaiveDate) -> Result<Self, TermError> {
        let out_of_range = || TermError::WindowOutOfRange { reference };
        let historical_bound = reference
            .checked_sub_months(Months::new(HISTORY_MONTHS))
            .ok_or_else(out_of_range)?;
        let future_bound = reference
            .checked_add_months(Months::new(LOOKAHEAD_MONTHS))
            .ok_or_else(out_of_range)?;
        Ok(Self {
            reference,
            historical_bound,
            future_bound,
        })
    }

    /// Distinct calendar months touched by the window, ascending.
    ///
    /// The historical and future halves share the reference month; collecting
    /// into a set keyed by `(year, month)` keeps it once.
    pub fn months(&self) -> BTreeSet<YearMonth> {
        let mut months: BTreeSet<YearMonth> =
            months_between(self.historical_bound, self.reference).collect();
        months.extend(months_between(self.reference, self.future_bound));
        months
    }
}

/// A calendar month identified by value, not by date instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

fn months_between(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = YearMonth> {
    let end = YearMonth::of(to);
    std::iter::successors(Some(YearMonth::of(from)), |ym| Some(ym.next()))
        .take_while(move |ym| *ym <= end)
}

/// Last two digits of a four-digit year, zero padded.
///
/// Years outside `0..=9999` are not four-digit years; they yield an empty
/// suffix instead of an error.
pub fn year_suffix(year: i32) -> String {
    if !(0..=9999).contains(&year) {
        return String::new();
    }
    format!("{:02}", year % 100)
}

struct Emitted {
    year: i32,
    first_month: u32,
    position: usize,
    option: TermOption,
}

/// Generate the ordered term options for `window`, sentinel first.
///
/// Options are unique by key and sorted by `(year, first month of the
/// definition)`, with catalog position breaking ties. A term is keyed by the
/// year of the month that matched it.
pub fn generate_term_options(window: &TermWindow) -> Vec<TermOption> {
    generate_term_options_from(window, INSTRUCTIONAL_TERMS)
}

/// [`generate_term_options`] over an arbitrary term catalog.
pub fn generate_term_options_from(
    window: &TermWindow,
    catalog: &[InstructionalTermDefinition],
) -> Vec<TermOption> {
    let mut seen = HashSet::new();
    let mut emitted = Vec::new();

    for ym in window.months() {
        for (position, term) in catalog.iter().enumerate() {
            if !term.covers(ym.month) {
                continue;
            }
            let key = format!("{}{}", term.key, year_suffix(ym.year));
            if !seen.insert(key.clone()) {
                continue;
            }
            trace!(key = %key, year = ym.year, month = ym.month, "term option emitted");
            emitted.push(Emitted {
                year: ym.year,
                first_month: term.first_month(),
                position,
                option: TermOption {
                    text: format!("{} {}", term.text_prefix, ym.year),
                    value: key.clone(),
                    key,
                },
            });
        }
    }

    emitted.sort_by_key(|e| (e.year, e.first_month, e.position));

    let mut options = Vec::with_capacity(emitted.len() + 1);
    options.push(TermOption::sentinel());
    options.extend(emitted.into_iter().map(|e| e.option));
    debug!(
        reference = %window.reference,
        count = options.len() - 1,
        "generated term options"
    );
    options
}

/// Validate `reference` and generate its term options.
pub fn term_options_for(reference: NaiveDate) -> Result<Vec<TermOption>, TermError> {
    let window = TermWindow::around(reference)?;
    Ok(generate_term_options(&window))
}

/// Display label for a stored term key such as `fq24`.
///
/// The last two characters are the year suffix and the rest is the
/// definition key. Only keys shorter than six characters are supported and
/// the century is always `20`, so years past 2099 cannot round-trip. Any key
/// that cannot be resolved, including a missing one, yields [`UNKNOWN_TERM`].
pub fn term_display_text(key: Option<&str>) -> String {
    let Some(key) = key else {
        return UNKNOWN_TERM.to_string();
    };
    if key.is_empty() || key.chars().count() >= MAX_DISPLAY_KEY_LEN {
        return UNKNOWN_TERM.to_string();
    }
    let Some((split, _)) = key.char_indices().rev().nth(1) else {
        return UNKNOWN_TERM.to_string();
    };
    let (definition_key, suffix) = key.split_at(split);
    match find_term_definition(definition_key) {
        Some(term) => format!("{} 20{}", term.text_prefix, suffix),
        None => UNKNOWN_TERM.to_string(),
    }
}
