//! Static catalog of construction roadmap steps.
//!
//! The order of [`ROADMAP_STEPS`] is the display order. Steps tagged with a
//! [`ConditionalGroup`] only exist under one branch of the remix decision
//! made at step `4`.

use serde::Serialize;

/// Branch of the remix decision a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalGroup {
    RemixOnly,
    NoRemixOnly,
}

/// One stage of the construction checklist shown to project owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapStepDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub name: &'static str,
    /// Rich content rendered by the caller; opaque here.
    pub description: &'static str,
    pub has_extra: bool,
    pub link_href: Option<&'static str>,
    pub link_title: Option<&'static str>,
    pub optional: bool,
    pub conditional_group: Option<ConditionalGroup>,
}

const fn step(
    key: &'static str,
    title: &'static str,
    name: &'static str,
    description: &'static str,
) -> RoadmapStepDefinition {
    RoadmapStepDefinition {
        key,
        title,
        name,
        description,
        has_extra: false,
        link_href: None,
        link_title: None,
        optional: false,
        conditional_group: None,
    }
}

const fn with_link(
    mut def: RoadmapStepDefinition,
    href: &'static str,
    title: &'static str,
) -> RoadmapStepDefinition {
    def.has_extra = true;
    def.link_href = Some(href);
    def.link_title = Some(title);
    def
}

const fn optional(mut def: RoadmapStepDefinition) -> RoadmapStepDefinition {
    def.optional = true;
    def
}

const fn only(mut def: RoadmapStepDefinition, group: ConditionalGroup) -> RoadmapStepDefinition {
    def.conditional_group = Some(group);
    def
}

/// Key of the step where the remix decision is made.
pub const REMIX_DECISION_STEP: &str = "4";

const GUIDE: &str = "https://commons.libretexts.org/insight/construction-guide";

/// Full ordered construction roadmap.
pub static ROADMAP_STEPS: &[RoadmapStepDefinition] = &[
    step(
        "1",
        "Request an Instructor Account",
        "Account",
        "Instructor accounts unlock editing on the library platform. Requests are reviewed by the support team.",
    ),
    with_link(
        step(
            "2",
            "Choose a Library",
            "Library",
            "Pick the subject library that will host the textbook. Each library has its own bookshelves and conventions.",
        ),
        GUIDE,
        "Library overview",
    ),
    step(
        "3",
        "Plan the Textbook",
        "Plan",
        "Outline chapters and learning objectives. A clear outline makes the remix decision easier.",
    ),
    with_link(
        step(
            "4",
            "Decide Whether to Remix",
            "Remix Decision",
            "Remixing adapts existing open resources into a new text. Record whether this project will remix before continuing.",
        ),
        GUIDE,
        "Remixing basics",
    ),
    step(
        "5",
        "Create a Workbench",
        "Workbench",
        "A workbench is a private area where the textbook is assembled before it moves to a bookshelf.",
    ),
    only(
        with_link(
            step(
                "5a",
                "Find Existing Content",
                "Find Content",
                "Search the libraries and the commons catalog for resources that match the outline.",
            ),
            GUIDE,
            "Finding content",
        ),
        ConditionalGroup::RemixOnly,
    ),
    only(
        step(
            "5b",
            "Import with the Remixer",
            "Remixer",
            "Use the Remixer to copy or fork the selected pages into the workbench.",
        ),
        ConditionalGroup::RemixOnly,
    ),
    only(
        step(
            "5c",
            "Reorganize Remixed Content",
            "Reorganize",
            "Reorder, rename, and trim the imported pages so they follow the outline.",
        ),
        ConditionalGroup::RemixOnly,
    ),
    only(
        step(
            "6",
            "Build from Scratch",
            "Build",
            "Create each chapter and page directly in the workbench using the outline as a guide.",
        ),
        ConditionalGroup::NoRemixOnly,
    ),
    step(
        "7",
        "Edit and Format Pages",
        "Edit",
        "Apply the page templates, fix headings, and make sure figures and equations render.",
    ),
    with_link(
        step(
            "8",
            "Review Licensing",
            "Licensing",
            "Confirm every page carries a compatible open license and correct attribution.",
        ),
        GUIDE,
        "Licensing guide",
    ),
    optional(step(
        "9",
        "Check Accessibility",
        "Accessibility",
        "Add alternative text, check color contrast, and confirm tables have headers.",
    )),
    optional(step(
        "10",
        "Invite Peer Review",
        "Peer Review",
        "Collect feedback from colleagues or students before the text goes public.",
    )),
    step(
        "11",
        "Request Publishing",
        "Publishing",
        "Ask the library team to move the finished text from the workbench to a public bookshelf.",
    ),
    step(
        "12",
        "Adopt and Share",
        "Adoption",
        "Use the text in a course and share it so other instructors can adopt it.",
    ),
];

/// Look up a step by key in the full catalog.
pub fn find_step(key: &str) -> Option<&'static RoadmapStepDefinition> {
    ROADMAP_STEPS.iter().find(|step| step.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fifteen_unique_steps() {
        assert_eq!(ROADMAP_STEPS.len(), 15);
        let keys: HashSet<_> = ROADMAP_STEPS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), 15);
    }

    /// Three remix-only steps, one no-remix-only step, everything else always.
    #[test]
    fn conditional_groups_match_remix_branches() {
        let remix: Vec<_> = ROADMAP_STEPS
            .iter()
            .filter(|s| s.conditional_group == Some(ConditionalGroup::RemixOnly))
            .map(|s| s.key)
            .collect();
        let no_remix: Vec<_> = ROADMAP_STEPS
            .iter()
            .filter(|s| s.conditional_group == Some(ConditionalGroup::NoRemixOnly))
            .map(|s| s.key)
            .collect();
        assert_eq!(remix, vec!["5a", "5b", "5c"]);
        assert_eq!(no_remix, vec!["6"]);
        assert_eq!(
            find_step(REMIX_DECISION_STEP).expect("decision step").conditional_group,
            None
        );
    }

    #[test]
    fn extra_links_are_consistent() {
        for step in ROADMAP_STEPS {
            assert_eq!(step.has_extra, step.link_href.is_some(), "{}", step.key);
            assert_eq!(step.link_href.is_some(), step.link_title.is_some());
        }
    }
}
