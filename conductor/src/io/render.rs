//! Plain-text rendering of a roadmap view.

use anyhow::Result;
use minijinja::Environment;

use crate::roadmap::RoadmapView;

const ROADMAP_TEMPLATE: &str = include_str!("templates/roadmap.txt");

/// Template engine wrapper around minijinja.
struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_template("roadmap", ROADMAP_TEMPLATE)
            .expect("roadmap template should be valid");
        Self { env }
    }

    fn render_roadmap(&self, view: &RoadmapView) -> Result<String> {
        let template = self.env.get_template("roadmap")?;
        Ok(template.render(view)?)
    }
}

/// Render the step list, open step detail, and conflict warnings.
///
/// Rows are prefixed with `*` for the current step and `>` for the open step.
pub fn render_roadmap(view: &RoadmapView) -> Result<String> {
    ViewEngine::new().render_roadmap(view)
}
