//! Work detail page state.
//!
//! A detail page is a vertical stack of sections with a sticky tab bar on
//! top. The renderer measures the sections and hands them over through
//! [`DetailState::apply_layout`]; scrolling and tab activation go through the
//! [`SectionScrollSpy`].

use crate::data::WorkItem;
use crate::state::scroll_spy::{SectionBounds, SectionScrollSpy};

pub const TAB_CORE: &str = "core";
pub const TAB_BRAND: &str = "brand-identity";
pub const TAB_DESIGN: &str = "web-design";
pub const TAB_DEVELOPMENT: &str = "web-development";
pub const TAB_MEDIA: &str = "media";

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTab {
    pub id: &'static str,
    pub name: &'static str,
    pub has_data: bool,
}

/// Builds the tab bar for a work item. Tabs without data stay visible but
/// cannot be activated.
pub fn tabs_for(work: &WorkItem) -> Vec<DetailTab> {
    let tab = |id, name, has_data| DetailTab { id, name, has_data };
    vec![
        tab(
            TAB_CORE,
            "Core",
            work.core.as_ref().is_some_and(|c| c.has_data()),
        ),
        tab(
            TAB_BRAND,
            "Brand",
            work.brand_development
                .as_ref()
                .is_some_and(|b| b.has_data()),
        ),
        tab(TAB_DESIGN, "Design", !work.web_design.is_empty()),
        tab(
            TAB_DEVELOPMENT,
            "Development",
            work.web_development
                .as_ref()
                .is_some_and(|d| !d.features.is_empty()),
        ),
        tab(TAB_MEDIA, "Media", !work.media_content.is_empty()),
    ]
}

/// Measured page geometry, in rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailLayout {
    pub sections: Vec<SectionBounds>,
    pub content_height: i64,
    pub viewport_height: i64,
    pub navbar_height: i64,
}

#[derive(Debug, Clone)]
pub struct DetailState {
    slug: String,
    tabs: Vec<DetailTab>,
    spy: SectionScrollSpy,
    scroll: i64,
    content_height: i64,
    viewport_height: i64,
}

impl DetailState {
    pub fn new(work: &WorkItem, spy: SectionScrollSpy) -> Self {
        Self {
            slug: work.id.clone(),
            tabs: tabs_for(work),
            spy,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn tabs(&self) -> &[DetailTab] {
        &self.tabs
    }

    pub fn scroll(&self) -> i64 {
        self.scroll
    }

    pub fn viewport_height(&self) -> i64 {
        self.viewport_height
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.spy.active()
    }

    fn max_scroll(&self) -> i64 {
        (self.content_height - self.viewport_height).max(0)
    }

    /// Registers freshly measured geometry and re-resolves the active tab.
    pub fn apply_layout(&mut self, layout: DetailLayout) {
        self.content_height = layout.content_height;
        self.viewport_height = layout.viewport_height;
        self.spy.set_navbar_height(layout.navbar_height);
        self.spy.register_sections(layout.sections);
        self.scroll = self.scroll.clamp(0, self.max_scroll());
        if self.spy.active().is_none() {
            self.spy.on_scroll(self.scroll);
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_to(self.scroll + delta);
    }

    pub fn scroll_to(&mut self, y: i64) {
        self.scroll = y.clamp(0, self.max_scroll());
        self.spy.on_scroll(self.scroll);
    }

    /// Jumps to the tab's section. Returns `false` for tabs without data or
    /// sections that have not been laid out.
    pub fn activate_tab(&mut self, id: &str) -> bool {
        if !self.tabs.iter().any(|t| t.id == id && t.has_data) {
            return false;
        }
        match self.spy.jump_to_section(id) {
            Some(target) => {
                self.scroll = target.clamp(0, self.max_scroll());
                true
            }
            None => false,
        }
    }

    /// Activates the next tab with data after the active one.
    pub fn next_tab(&mut self) -> bool {
        self.step_tab(1)
    }

    pub fn prev_tab(&mut self) -> bool {
        self.step_tab(-1)
    }

    fn step_tab(&mut self, step: isize) -> bool {
        let enabled: Vec<&'static str> = self
            .tabs
            .iter()
            .filter(|t| t.has_data)
            .map(|t| t.id)
            .collect();
        if enabled.is_empty() {
            return false;
        }
        let current = self
            .active_tab()
            .and_then(|id| enabled.iter().position(|t| *t == id));
        let next = match current {
            None => 0,
            Some(i) => (i as isize + step).clamp(0, enabled.len() as isize - 1) as usize,
        };
        self.activate_tab(enabled[next])
    }
}
