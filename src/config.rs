//! User settings, read from an optional JSON file.
//!
//! Every field has a default, so a partial file (or none at all) is fine.
//! The pixel-style constants used by the controllers are expressed in
//! terminal units here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::state::work_list::{DEFAULT_VISIBLE_CARDS, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    HighContrast,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Default => Theme::HighContrast,
            Theme::HighContrast => Theme::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::HighContrast => "High Contrast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Cards side by side in the work carousel.
    pub visible_cards: usize,
    /// Drag distance that counts as a swipe, in pixels.
    pub swipe_threshold_px: f64,
    /// Approximate pixel width of one terminal column, used to scale drags.
    pub cell_width_px: f64,
    /// Scroll-spy lookahead below the tab bar, in rows.
    pub spy_lookahead_rows: i64,
    /// Rows left above a section after jumping to it.
    pub spy_breathing_rows: i64,
    /// Rows moved per scroll step on the detail page.
    pub scroll_step: i64,
    /// Dim the work cards briefly after the filter changes.
    pub animations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            visible_cards: DEFAULT_VISIBLE_CARDS,
            swipe_threshold_px: SWIPE_THRESHOLD,
            cell_width_px: 10.0,
            spy_lookahead_rows: 4,
            spy_breathing_rows: 1,
            scroll_step: 3,
            animations: true,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|source| FolioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(settings.sanitized())
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| FolioError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| FolioError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pulls out-of-range values back to something usable.
    fn sanitized(mut self) -> Self {
        self.visible_cards = self.visible_cards.clamp(1, 6);
        self.cell_width_px = if self.cell_width_px > 0.0 {
            self.cell_width_px
        } else {
            Self::default().cell_width_px
        };
        self.swipe_threshold_px = self.swipe_threshold_px.max(0.0);
        self.scroll_step = self.scroll_step.max(1);
        self
    }

    /// Cycles the carousel width through 1..=4 cards.
    pub fn cycle_visible_cards(&mut self) {
        self.visible_cards = self.visible_cards % 4 + 1;
    }
}
