use std::future::Future;

use serde::Deserialize;

use crate::view::{Selector, View};

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// A section counts as current this many pixels before its top reaches the viewport top.
pub const SECTION_LOOKAHEAD: f64 = 200.0;
/// Share of the skills section that must be visible to start the bar animation.
pub const SKILLS_VISIBLE_RATIO: f64 = 0.5;
pub const SKILL_REVEAL_DELAY_MS: u32 = 200;

// Observers report ratios at the threshold crossing with float noise.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// What the page reports on scroll, resize and load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollSample {
    pub y: f64,
    #[serde(default)]
    pub sections: Vec<SectionOffset>,
}

/// One intersection observer entry for the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Intersection {
    pub intersecting: bool,
    pub ratio: f64,
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// The last section, in document order, whose lookahead line has been scrolled past.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SECTION_LOOKAHEAD {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Mark exactly the nav link pointing at `current` as active.
pub fn highlight_nav(view: &mut impl View, current: Option<&str>) {
    let target = current.map(|id| format!("#{id}"));
    for link in view.query_all(Selector::Class("nav-link")) {
        let on = target.is_some() && view.attr(link, "href") == target.as_deref();
        view.set_class(link, "active", on);
    }
}

pub fn update_back_to_top(view: &mut impl View, scroll_y: f64) {
    if let Some(button) = view.query(Selector::Id("back-to-top")) {
        view.set_class(button, "show", back_to_top_visible(scroll_y));
    }
}

/// Scroll-driven state: back-to-top visibility and the active nav link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    latest: ScrollSample,
}

impl Viewport {
    pub fn on_scroll(&mut self, view: &mut impl View, sample: ScrollSample) {
        update_back_to_top(view, sample.y);
        highlight_nav(view, active_section(&sample.sections, sample.y));
        self.latest = sample;
    }

    /// Top offset of a section from the most recent sample.
    pub fn section_top(&self, id: &str) -> Option<f64> {
        self.latest
            .sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.top)
    }
}

/// The skill bars' width animation.
///
/// Every qualifying intersection schedules a reveal; revealing again writes the
/// same widths, so a second pass is invisible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillReveal {
    triggers: u32,
}

impl SkillReveal {
    /// Returns true when a reveal should be scheduled.
    pub fn observe(&mut self, entry: Intersection) -> bool {
        if !entry.intersecting || entry.ratio + RATIO_TOLERANCE < SKILLS_VISIBLE_RATIO {
            return false;
        }
        if !self.has_fired() {
            tracing::debug!("viewport.skills: first reveal (ratio={:.2})", entry.ratio);
        }
        self.triggers += 1;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.triggers > 0
    }

    pub fn reveal(&self, view: &mut impl View) {
        for bar in view.query_all(Selector::Class("skill-progress")) {
            let Some(width) = view.attr(bar, "data-width").map(str::to_string) else {
                continue;
            };
            view.set_style(bar, "width", &width);
        }
    }
}

/// Wait out the reveal delay with `sleep`, then run `reveal`.
pub async fn reveal_after<S, Fut>(sleep: S, reveal: impl FnOnce())
where
    S: FnOnce(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(SKILL_REVEAL_DELAY_MS).await;
    reveal();
}
