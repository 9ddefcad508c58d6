use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::pages::blog::BlogPage;
use crate::pages::detail::DetailPage;
use crate::pages::help::HelpPage;
use crate::pages::main_menu::MainMenu;
use crate::pages::settings::SettingsPage;
use crate::pages::work::WorkPage;
use crate::render_context::{AppMode, Focus, RenderContext};

const MENU_WIDTH: u16 = 20;

#[derive(Debug, Default)]
pub struct Screen {
    main_menu: MainMenu,
    work: WorkPage,
    detail: DetailPage,
    blog: BlogPage,
    settings: SettingsPage,
    help: HelpPage,
}

/// Splits the terminal into the menu, the page and the status bar.
fn split(area: Rect) -> (Rect, Rect, Rect) {
    let inner_area = Block::bordered().inner(area);

    // Split into main content and bottom status bar
    let vlayout = Layout::new(
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(1)],
    )
    .split(inner_area);

    // Inside main content, split into menu and page area
    let layout = Layout::new(
        Direction::Horizontal,
        [Constraint::Length(MENU_WIDTH), Constraint::Min(0)],
    )
    .split(vlayout[0]);

    (layout[0], layout[1], vlayout[1])
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page area for a terminal of size `area`; the detail document is laid
    /// out against this before drawing.
    pub fn content_area(area: Rect) -> Rect {
        split(area).1
    }

    pub fn render(&self, frame: &mut Frame, ctx: &RenderContext) {
        let area = frame.area();
        let title = Line::from("Folio - Portfolio & Journal")
            .bold()
            .blue()
            .left_aligned();
        frame.render_widget(Block::bordered().title(title), area);

        let (menu_area, page_area, status_area) = split(area);
        self.main_menu
            .render(frame, menu_area, ctx.menu_selected_index, ctx.focus);

        let view_focused = ctx.focus == Focus::View;
        let theme = ctx.settings.theme;
        match (ctx.mode, ctx.work_list) {
            (AppMode::Settings, _) => self.settings.render(
                frame,
                page_area,
                ctx.settings,
                ctx.selected_setting,
                view_focused,
            ),
            (AppMode::Blog, Some(_)) => {
                self.blog
                    .render(frame, page_area, ctx.blog, view_focused, theme)
            }
            (AppMode::Detail, Some(_)) if ctx.detail.is_some() => {
                if let Some(view) = &ctx.detail {
                    self.detail
                        .render(frame, page_area, view.work, view.state, view.document, theme);
                }
            }
            // Work, or a detail view whose work disappeared
            (_, Some(list)) => {
                self.work
                    .render(frame, page_area, list, ctx.focused_card, ctx.fading, theme)
            }
            (_, None) => {
                let throbber = Throbber::default()
                    .label("Loading catalog...")
                    .throbber_set(BRAILLE_SIX);
                let centered = Layout::vertical([Constraint::Length(1)])
                    .flex(ratatui::layout::Flex::Center)
                    .split(page_area)[0];
                let mut state = ctx.throbber.clone();
                frame.render_stateful_widget(throbber, centered, &mut state);
            }
        }

        if ctx.show_help {
            let overlay = page_area.inner(ratatui::layout::Margin::new(2, 1));
            frame.render_widget(Clear, overlay);
            self.help.render(frame, overlay);
        }

        // Render the status bar on bottom
        let status_line = Line::from(format!(
            "{}  |  Tab: Switch View  Enter: Open  ?: Help  q: Quit",
            ctx.status
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::Catalog;
    use crate::state::{BlogState, WorkListController};
    use ratatui::{backend::TestBackend, Terminal};
    use throbber_widgets_tui::ThrobberState;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_content_area_sits_right_of_menu() {
        let area = Rect::new(0, 0, 100, 30);
        let content = Screen::content_area(area);
        assert_eq!(content.x, 1 + MENU_WIDTH);
        assert_eq!(content.width, 100 - 2 - MENU_WIDTH);
        assert_eq!(content.height, 30 - 2 - 1);
    }

    #[test]
    fn test_loading_screen_shows_throbber_label() {
        let settings = Settings::default();
        let blog = BlogState::new(&[]);
        let throbber = ThrobberState::default();
        let ctx = RenderContext::new(
            AppMode::Work,
            Focus::View,
            &settings,
            &blog,
            &throbber,
            "Loading",
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| Screen::new().render(frame, &ctx))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Loading catalog"));
    }

    #[test]
    fn test_work_view_lists_filters() {
        let catalog = Catalog::seed();
        let list = WorkListController::from_catalog(&catalog, 3);
        let settings = Settings::default();
        let blog = BlogState::new(&catalog.posts);
        let throbber = ThrobberState::default();
        let ctx = RenderContext::new(
            AppMode::Work,
            Focus::View,
            &settings,
            &blog,
            &throbber,
            "Ready",
        )
        .with_work_list(Some(&list), 0, false);
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| Screen::new().render(frame, &ctx))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("All"));
        assert!(text.contains("Our Work"));
    }
}
