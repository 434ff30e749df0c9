//! Static catalog of instructional terms.

/// One academic teaching period and the calendar months it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionalTermDefinition {
    pub key: &'static str,
    pub text_prefix: &'static str,
    /// Calendar months (1-12) during which the term counts as active.
    pub months: &'static [u32],
}

impl InstructionalTermDefinition {
    /// Lowest month number in `months`; used as the in-year sort key.
    pub fn first_month(&self) -> u32 {
        self.months.iter().copied().min().unwrap_or(u32::MAX)
    }

    pub fn covers(&self, month: u32) -> bool {
        self.months.contains(&month)
    }
}

/// Fixed term catalog, in display order.
pub static INSTRUCTIONAL_TERMS: &[InstructionalTermDefinition] = &[
    InstructionalTermDefinition {
        key: "fq",
        text_prefix: "Fall Quarter",
        months: &[9, 10, 11, 12],
    },
    InstructionalTermDefinition {
        key: "wq",
        text_prefix: "Winter Quarter",
        months: &[1, 2, 3, 4],
    },
    InstructionalTermDefinition {
        key: "sq",
        text_prefix: "Spring Quarter",
        months: &[3, 4, 5, 6],
    },
    InstructionalTermDefinition {
        key: "ss",
        text_prefix: "Spring Semester",
        months: &[1, 2, 3, 4, 5],
    },
    InstructionalTermDefinition {
        key: "sum",
        text_prefix: "Summer",
        months: &[6, 7, 8],
    },
    InstructionalTermDefinition {
        key: "fs",
        text_prefix: "Fall Semester",
        months: &[8, 9, 10, 11, 12],
    },
];

/// Look up a term definition by key.
pub fn find_term_definition(key: &str) -> Option<&'static InstructionalTermDefinition> {
    INSTRUCTIONAL_TERMS.iter().find(|term| term.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let mut seen = HashSet::new();
        for term in INSTRUCTIONAL_TERMS {
            assert!(seen.insert(term.key), "duplicate key {}", term.key);
        }
    }

    /// Every month list is non-empty and within 1..=12.
    #[test]
    fn catalog_months_are_calendar_months() {
        for term in INSTRUCTIONAL_TERMS {
            assert!(!term.months.is_empty(), "{} has no months", term.key);
            assert!(term.months.iter().all(|m| (1..=12).contains(m)));
        }
    }

    #[test]
    fn first_month_is_lowest_month() {
        let fall = find_term_definition("fs").expect("fs");
        assert_eq!(fall.first_month(), 8);
        assert_eq!(find_term_definition("wq").expect("wq").first_month(), 1);
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert!(find_term_definition("zzzzz").is_none());
        assert!(find_term_definition("").is_none());
    }
}
