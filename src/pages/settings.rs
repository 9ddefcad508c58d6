use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::{List, ListItem},
    Frame,
};

use crate::config::Settings;
use crate::ui_utils::{create_list_state, focused_block};

/// Rows of the settings list, rendered from the live values.
pub fn settings_options(settings: &Settings) -> Vec<String> {
    vec![
        format!("Theme: {}", settings.theme.label()),
        format!(
            "Animations: {}",
            if settings.animations { "On" } else { "Off" }
        ),
        format!("Cards per slide: {}", settings.visible_cards),
    ]
}

#[derive(Debug, Default)]
pub struct SettingsPage;

impl SettingsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        settings: &Settings,
        selected_index: usize,
        focused: bool,
    ) {
        let options = settings_options(settings);
        let mut state = create_list_state(selected_index, 0, options.len());
        let items: Vec<ListItem> = options.into_iter().map(ListItem::new).collect();
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Settings", focused))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> ")
                .repeat_highlight_symbol(true),
            area,
            &mut state,
        );
    }
}
