use throbber_widgets_tui::ThrobberState;

use crate::config::Settings;
use crate::data::WorkItem;
use crate::pages::detail::DetailDocument;
use crate::state::{BlogState, DetailState, WorkListController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Work,
    Detail,
    Blog,
    Settings,
}

impl AppMode {
    /// Modes reachable from the menu, in menu order.
    pub const MENU: [AppMode; 3] = [AppMode::Work, AppMode::Blog, AppMode::Settings];

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Work | AppMode::Detail => "Work",
            AppMode::Blog => "Blog",
            AppMode::Settings => "Settings",
        }
    }

    /// Cycles the menu modes; a detail view counts as Work.
    pub fn next(self) -> Self {
        match self {
            AppMode::Work | AppMode::Detail => AppMode::Blog,
            AppMode::Blog => AppMode::Settings,
            AppMode::Settings => AppMode::Work,
        }
    }

    pub fn menu_index(self) -> usize {
        match self {
            AppMode::Work | AppMode::Detail => 0,
            AppMode::Blog => 1,
            AppMode::Settings => 2,
        }
    }

    pub fn from_menu_index(index: usize) -> Self {
        Self::MENU.get(index).copied().unwrap_or(AppMode::Work)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    View,
}

/// An open work with its laid-out document.
pub struct DetailView<'a> {
    pub work: &'a WorkItem,
    pub state: &'a DetailState,
    pub document: &'a DetailDocument,
}

/// Everything a frame needs, borrowed from the app for the duration of a draw.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub focus: Focus,
    pub show_help: bool,
    pub settings: &'a Settings,
    pub status: &'a str,
    pub menu_selected_index: usize,

    // Catalog views; `work_list` is `None` until the catalog arrives.
    pub work_list: Option<&'a WorkListController>,
    pub focused_card: usize,
    pub fading: bool,
    pub detail: Option<DetailView<'a>>,
    pub blog: &'a BlogState,
    pub selected_setting: usize,

    pub throbber: &'a ThrobberState,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        mode: AppMode,
        focus: Focus,
        settings: &'a Settings,
        blog: &'a BlogState,
        throbber: &'a ThrobberState,
        status: &'a str,
    ) -> Self {
        Self {
            mode,
            focus,
            show_help: false,
            settings,
            status,
            menu_selected_index: mode.menu_index(),
            work_list: None,
            focused_card: 0,
            fading: false,
            detail: None,
            blog,
            selected_setting: 0,
            throbber,
        }
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_menu_selected_index(mut self, index: usize) -> Self {
        self.menu_selected_index = index;
        self
    }

    pub fn with_work_list(
        mut self,
        list: Option<&'a WorkListController>,
        focused_card: usize,
        fading: bool,
    ) -> Self {
        self.work_list = list;
        self.focused_card = focused_card;
        self.fading = fading;
        self
    }

    pub fn with_detail(mut self, detail: Option<DetailView<'a>>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_selected_setting(mut self, index: usize) -> Self {
        self.selected_setting = index;
        self
    }
}
