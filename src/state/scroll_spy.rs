//! Scroll spy for sectioned pages.
//!
//! Maps a vertical scroll offset onto the section currently under the sticky
//! tab bar, and computes where to scroll when a tab is activated.

/// Distance below the tab bar at which a section becomes active, so the tab
/// switches slightly before the section reaches the top.
pub const DEFAULT_LOOKAHEAD: i64 = 100;

/// Gap left above a section after jumping to it.
pub const DEFAULT_BREATHING_ROOM: i64 = 20;

/// Vertical extent of one named section, measured by the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: String,
    pub top: i64,
    pub height: i64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open span `[top, top + height)`.
    pub fn contains(&self, y: i64) -> bool {
        y >= self.top && y < self.top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone)]
pub struct SectionScrollSpy {
    sections: Vec<SectionBounds>,
    active: Option<String>,
    navbar_height: i64,
    lookahead: i64,
    breathing_room: i64,
}

impl SectionScrollSpy {
    pub fn new(navbar_height: i64) -> Self {
        Self::with_offsets(navbar_height, DEFAULT_LOOKAHEAD, DEFAULT_BREATHING_ROOM)
    }

    pub fn with_offsets(navbar_height: i64, lookahead: i64, breathing_room: i64) -> Self {
        Self {
            sections: Vec::new(),
            active: None,
            navbar_height,
            lookahead,
            breathing_room,
        }
    }

    /// Replaces the tracked sections. The active id is kept even if it no
    /// longer names a section; the next scroll resolves it.
    pub fn register_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn set_navbar_height(&mut self, height: i64) {
        self.navbar_height = height;
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    /// `None` until a scroll or jump has resolved a section.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn probe(&self, scroll_y: i64) -> i64 {
        scroll_y
            .saturating_add(self.navbar_height)
            .saturating_add(self.lookahead)
    }

    /// Resolves the active section for `scroll_y`.
    ///
    /// The first section in document order containing the probe point wins.
    /// When none does, the previous active id is kept.
    pub fn on_scroll(&mut self, scroll_y: i64) -> Option<&str> {
        let probe = self.probe(scroll_y);
        if let Some(section) = self.sections.iter().find(|s| s.contains(probe)) {
            if self.active.as_deref() != Some(section.id.as_str()) {
                tracing::trace!(section = %section.id, probe, "active section changed");
                self.active = Some(section.id.clone());
            }
        }
        self.active.as_deref()
    }

    /// Returns the scroll offset that brings `id` under the tab bar and marks
    /// it active right away. Unknown ids are ignored.
    pub fn jump_to_section(&mut self, id: &str) -> Option<i64> {
        let section = self.sections.iter().find(|s| s.id == id)?;
        let target = section
            .top
            .saturating_sub(self.navbar_height)
            .saturating_sub(self.breathing_room);
        self.active = Some(section.id.clone());
        Some(target)
    }
}
