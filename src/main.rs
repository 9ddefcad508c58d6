use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::{layout::Rect, DefaultTerminal, Frame};
use throbber_widgets_tui::ThrobberState;

use folio::config::Settings;
use folio::data::Catalog;
use folio::key_handler::{KeyAction, KeyHandler};
use folio::loader::{CatalogLoader, CatalogSource};
use folio::logging;
use folio::pages::detail::{body_area, DetailDocument, TAB_BAR_HEIGHT};
use folio::pages::settings::settings_options;
use folio::render_context::{AppMode, DetailView, Focus, RenderContext};
use folio::screen::Screen;
use folio::state::{
    related_work, BlogState, DetailState, SectionScrollSpy, SwipeTracker, WorkListController,
};
use folio::ui_utils::auto_scroll;

// UI constants
const TICK: Duration = Duration::from_millis(100);
const FADE: Duration = Duration::from_millis(300);
const WINDOW_SIZE: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Browse a studio portfolio in the terminal")]
struct Args {
    /// Catalog JSON export; the built-in seed catalog is used when omitted
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Settings file, written back when a setting changes
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let log_path = logging::init();

    let settings = match &args.config {
        Some(path) => Settings::load_or_default(path)
            .wrap_err_with(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let source = args
        .catalog
        .clone()
        .map_or(CatalogSource::Seed, CatalogSource::File);
    tracing::info!(log = ?log_path, source = %source.describe(), "starting folio");

    let terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        tracing::warn!(error = %e, "mouse capture unavailable");
    }
    let result = App::new(CatalogLoader::spawn(source), settings, args.config).run(terminal);
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// An open work: its state plus the document laid out for `built_for` columns.
struct OpenDetail {
    state: DetailState,
    document: DetailDocument,
    built_for: Option<u16>,
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    loader: CatalogLoader,
    throbber: ThrobberState,
    current_view: AppMode,
    focus: Focus,
    menu_selected_index: usize,
    status_message: String,
    show_help: bool,
    settings: Settings,
    config_path: Option<PathBuf>,
    selected_setting_index: usize,
    work_list: Option<WorkListController>,
    focused_card: usize,
    swipe: SwipeTracker,
    seen_revision: u64,
    fade_until: Option<Instant>,
    detail: Option<OpenDetail>,
    blog: BlogState,
}

impl App {
    pub fn new(loader: CatalogLoader, settings: Settings, config_path: Option<PathBuf>) -> Self {
        let status_message = format!("Loading {}...", loader.source().describe());
        Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            loader,
            throbber: ThrobberState::default(),
            current_view: AppMode::Work,
            focus: Focus::View,
            menu_selected_index: 0,
            status_message,
            show_help: false,
            settings,
            config_path,
            selected_setting_index: 0,
            work_list: None,
            focused_card: 0,
            swipe: SwipeTracker::default(),
            seen_revision: 0,
            fade_until: None,
            detail: None,
            blog: BlogState::new(&[]),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.poll_loader();
            terminal.draw(|frame| self.render(frame))?;
            let action = self.key_handler.handle_crossterm_events(TICK)?;
            if self.handle_action(action) {
                self.quit();
            }
        }
        Ok(())
    }

    fn quit(&mut self) {
        self.running = false;
    }

    fn poll_loader(&mut self) {
        let Some(result) = self.loader.try_recv() else {
            return;
        };
        let catalog = match result {
            Ok(catalog) => {
                self.status_message = format!(
                    "Loaded {} works from {} | Press ? for help",
                    catalog.works.len(),
                    self.loader.source().describe()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %e, "using the built-in catalog instead");
                self.status_message = format!("✗ {e} | showing the built-in catalog");
                Catalog::seed()
            }
        };
        self.install_catalog(&catalog);
    }

    fn install_catalog(&mut self, catalog: &Catalog) {
        let list = WorkListController::from_catalog(catalog, self.settings.visible_cards);
        self.seen_revision = list.revision();
        self.work_list = Some(list);
        self.blog = BlogState::new(&catalog.posts);
        self.focused_card = 0;
    }

    fn render(&mut self, frame: &mut Frame) {
        self.layout_detail(Screen::content_area(frame.area()));
        let fading = self.fade_until.is_some_and(|t| Instant::now() < t);
        let ctx = RenderContext::new(
            self.current_view,
            self.focus,
            &self.settings,
            &self.blog,
            &self.throbber,
            &self.status_message,
        )
        .with_help(self.show_help)
        .with_menu_selected_index(self.menu_selected_index)
        .with_work_list(self.work_list.as_ref(), self.focused_card, fading)
        .with_detail(self.detail_view())
        .with_selected_setting(self.selected_setting_index);
        self.screen.render(frame, &ctx);
    }

    fn detail_view(&self) -> Option<DetailView<'_>> {
        let open = self.detail.as_ref()?;
        let work = self.work_list.as_ref()?.work(open.state.slug())?;
        Some(DetailView {
            work,
            state: &open.state,
            document: &open.document,
        })
    }

    /// Rebuilds the open document when the page width changed and feeds the
    /// measured sections to the scroll spy.
    fn layout_detail(&mut self, area: Rect) {
        let (Some(open), Some(list)) = (self.detail.as_mut(), self.work_list.as_ref()) else {
            return;
        };
        let body = body_area(area);
        if open.built_for != Some(body.width) {
            let Some(work) = list.work(open.state.slug()) else {
                return;
            };
            let derived = list.derived_list();
            let related = related_work(&derived, open.state.slug());
            open.document = DetailDocument::build(work, related, body.width, self.settings.theme);
            open.built_for = Some(body.width);
        }
        open.state.apply_layout(open.document.layout(body.height));
    }

    fn update_status_message(&mut self) {
        self.status_message = match self.current_view {
            AppMode::Work => match &self.work_list {
                Some(list) => format!(
                    "Work: {} ({} shown, 0-9 Filter, ←→ Slide, ↵ Open)",
                    list.selected_category()
                        .and_then(|slug| list.categories().iter().find(|c| c.slug == slug))
                        .map_or("All", |c| c.title.as_str()),
                    list.len()
                ),
                None => "Loading catalog...".to_string(),
            },
            AppMode::Detail => format!(
                "Work: {} (↑↓ Scroll, ←→ Tabs, Esc Back)",
                self.detail_view().map_or("N/A", |v| v.work.title.as_str())
            ),
            AppMode::Blog => format!(
                "Blog: {} (↑↓ Select)",
                self.blog.selected().map_or("N/A", |p| p.title.as_str())
            ),
            AppMode::Settings => {
                let opts = settings_options(&self.settings);
                let label = opts
                    .get(self.selected_setting_index)
                    .map(|s| s.as_str())
                    .unwrap_or("N/A");
                format!("Settings: {} (↑↓ Select, ↵ Toggle)", label)
            }
        };
    }

    /// Applies one input action. Returns `true` when the app should quit.
    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Tick => {
                self.on_tick();
                return false;
            }
            KeyAction::Help => {
                self.show_help = !self.show_help;
                return false;
            }
            KeyAction::None => return false,
            _ => {}
        }

        if self.show_help {
            if action == KeyAction::Back {
                self.show_help = false;
            }
            return false;
        }

        match action {
            KeyAction::NextView => self.switch_view(self.current_view.next()),
            KeyAction::Back => return self.back(),
            _ if self.focus == Focus::Menu => self.handle_menu(action),
            _ => match self.current_view {
                AppMode::Work => self.handle_work(action),
                AppMode::Detail => self.handle_detail(action),
                AppMode::Blog => self.handle_blog(action),
                AppMode::Settings => self.handle_settings(action),
            },
        }
        self.track_revision();
        false
    }

    fn on_tick(&mut self) {
        if self.loader.is_pending() {
            self.throbber.calc_next();
        }
        if self.fade_until.is_some_and(|t| Instant::now() >= t) {
            self.fade_until = None;
        }
    }

    /// Starts the card fade when the filter produced a new list.
    fn track_revision(&mut self) {
        let Some(list) = &self.work_list else {
            return;
        };
        if list.revision() != self.seen_revision {
            self.seen_revision = list.revision();
            self.focused_card = 0;
            if self.settings.animations {
                self.fade_until = Some(Instant::now() + FADE);
            }
            self.update_status_message();
        }
    }

    fn switch_view(&mut self, mode: AppMode) {
        if mode != AppMode::Detail {
            self.detail = None;
        }
        self.current_view = mode;
        self.menu_selected_index = mode.menu_index();
        self.update_status_message();
    }

    fn back(&mut self) -> bool {
        match (self.focus, self.current_view) {
            (Focus::View, AppMode::Detail) => self.switch_view(AppMode::Work),
            (Focus::View, _) => {
                self.focus = Focus::Menu;
                self.status_message = "Menu (↑↓ Select, ↵ Open, Esc Quit)".to_string();
            }
            (Focus::Menu, _) => return true,
        }
        false
    }

    fn handle_menu(&mut self, action: KeyAction) {
        let last = AppMode::MENU.len() - 1;
        match action {
            KeyAction::NavigateUp => {
                self.menu_selected_index = self.menu_selected_index.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                self.menu_selected_index = (self.menu_selected_index + 1).min(last);
            }
            KeyAction::Select | KeyAction::NavigateRight => {
                self.switch_view(AppMode::from_menu_index(self.menu_selected_index));
                self.focus = Focus::View;
            }
            _ => {}
        }
    }

    fn handle_work(&mut self, action: KeyAction) {
        let Some(list) = self.work_list.as_mut() else {
            return;
        };
        let mut open = None;
        match action {
            KeyAction::Category(0) => list.set_category(None),
            KeyAction::Category(n) => {
                match list.categories().get(n as usize - 1).map(|c| c.slug.clone()) {
                    Some(slug) => list.set_category(Some(&slug)),
                    None => self.status_message = format!("No category {n}"),
                }
            }
            KeyAction::NextCategory => list.select_next_category(),
            KeyAction::PrevCategory => list.select_prev_category(),
            KeyAction::NavigateLeft => {
                if self.focused_card > 0 {
                    self.focused_card -= 1;
                } else {
                    list.prev_slide();
                }
            }
            KeyAction::NavigateRight => {
                if self.focused_card + 1 < list.visible().len() {
                    self.focused_card += 1;
                } else {
                    list.next_slide();
                }
            }
            KeyAction::ScrollPageUp => {
                list.go_to_slide(list.current_slide() as i64 - list.visible_count() as i64);
            }
            KeyAction::ScrollPageDown => {
                list.go_to_slide((list.current_slide() + list.visible_count()) as i64);
            }
            KeyAction::PointerDown(column) => {
                self.swipe.press(f64::from(column) * self.settings.cell_width_px);
            }
            KeyAction::PointerUp(column) => {
                let swipe = self.swipe.release(
                    f64::from(column) * self.settings.cell_width_px,
                    self.settings.swipe_threshold_px,
                );
                if list.apply_swipe(swipe) {
                    tracing::debug!(?swipe, slide = list.current_slide(), "carousel swiped");
                }
            }
            KeyAction::Select => {
                open = list.visible().get(self.focused_card).map(|w| w.id.clone());
            }
            _ => {}
        }
        self.focused_card = self
            .focused_card
            .min(list.visible().len().saturating_sub(1));

        if let Some(slug) = open {
            self.open_detail(&slug);
        }
    }

    fn open_detail(&mut self, slug: &str) {
        let Some(work) = self.work_list.as_ref().and_then(|l| l.work(slug)) else {
            return;
        };
        let spy = SectionScrollSpy::with_offsets(
            TAB_BAR_HEIGHT as i64,
            self.settings.spy_lookahead_rows,
            self.settings.spy_breathing_rows,
        );
        tracing::info!(work = slug, "opened work");
        self.detail = Some(OpenDetail {
            state: DetailState::new(work, spy),
            document: DetailDocument::default(),
            built_for: None,
        });
        self.switch_view(AppMode::Detail);
    }

    fn handle_detail(&mut self, action: KeyAction) {
        let Some(open) = self.detail.as_mut() else {
            return;
        };
        let step = self.settings.scroll_step;
        let page = (open.state.viewport_height() - TAB_BAR_HEIGHT as i64).max(1);
        match action {
            KeyAction::NavigateUp | KeyAction::WheelUp => open.state.scroll_by(-step),
            KeyAction::NavigateDown | KeyAction::WheelDown => open.state.scroll_by(step),
            KeyAction::ScrollPageUp => open.state.scroll_by(-page),
            KeyAction::ScrollPageDown => open.state.scroll_by(page),
            KeyAction::NavigateLeft => {
                open.state.prev_tab();
            }
            KeyAction::NavigateRight => {
                open.state.next_tab();
            }
            KeyAction::Category(n) if n > 0 => {
                let tab = open.state.tabs().get(n as usize - 1).map(|t| (t.id, t.name));
                if let Some((id, name)) = tab {
                    if !open.state.activate_tab(id) {
                        self.status_message = format!("{name} has no content for this work");
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_blog(&mut self, action: KeyAction) {
        let moved = match action {
            KeyAction::NavigateUp | KeyAction::WheelUp => self.blog.navigate_up(),
            KeyAction::NavigateDown | KeyAction::WheelDown => self.blog.navigate_down(),
            _ => false,
        };
        if moved {
            auto_scroll(self.blog.selected_index, &mut self.blog.scroll, WINDOW_SIZE);
            self.update_status_message();
        }
    }

    fn handle_settings(&mut self, action: KeyAction) {
        let last = settings_options(&self.settings).len() - 1;
        match action {
            KeyAction::NavigateUp => {
                self.selected_setting_index = self.selected_setting_index.saturating_sub(1);
                self.update_status_message();
            }
            KeyAction::NavigateDown => {
                self.selected_setting_index = (self.selected_setting_index + 1).min(last);
                self.update_status_message();
            }
            KeyAction::Select => self.toggle_setting(),
            _ => {}
        }
    }

    fn toggle_setting(&mut self) {
        match self.selected_setting_index {
            0 => {
                self.settings.theme = self.settings.theme.toggled();
                if let Some(open) = &mut self.detail {
                    open.built_for = None;
                }
                self.status_message = format!("⚙ Theme set to {}", self.settings.theme.label());
            }
            1 => {
                self.settings.animations = !self.settings.animations;
                if !self.settings.animations {
                    self.fade_until = None;
                }
                self.status_message = format!(
                    "⚙ Animations: {}",
                    if self.settings.animations { "On" } else { "Off" }
                );
            }
            2 => {
                self.settings.cycle_visible_cards();
                if let Some(list) = &mut self.work_list {
                    list.set_visible_count(self.settings.visible_cards);
                }
                self.focused_card = 0;
                self.status_message =
                    format!("⚙ Cards per slide: {}", self.settings.visible_cards);
            }
            _ => return,
        }
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.settings.save(path) {
            tracing::warn!(error = %e, "could not save settings");
            self.status_message = format!("✗ {e}");
        }
    }
}
