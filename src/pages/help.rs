use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct HelpPage;

fn key_line(key: &str, key_style: Style, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<12}"), key_style),
        Span::raw(text.to_string()),
    ])
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(area);

        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

        let key = Style::new().bold().cyan();
        let nav_help = vec![
            key_line("↑↓ / k j", key, "Navigate items, scroll a work"),
            key_line("← → / h l", key, "Slide the carousel, switch tabs"),
            key_line("Tab", key, "Move focus between menu and view"),
            key_line("Enter", key, "Open the focused work"),
            key_line("Esc", key, "Back to the list"),
            key_line("q / Ctrl-C", key, "Quit"),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let work = Style::new().bold().yellow();
        let work_help = vec![
            key_line("0-9", work, "Filter by category, 0 shows all"),
            key_line("[ ]", work, "Previous or next category"),
            key_line("drag", work, "Swipe cards with the mouse"),
            key_line("PgUp PgDn", work, "Scroll a work by a page"),
            key_line("wheel", work, "Scroll a work"),
            key_line("Enter", work, "Toggle an option in Settings"),
        ];
        frame.render_widget(
            Paragraph::new(work_help).block(Block::bordered().title("Work")),
            sections[1],
        );

        let tips = vec![
            Line::from("The tab bar follows the section under it while you scroll"),
            Line::from("Greyed-out tabs have no content for this work"),
            Line::from("Settings persist when started with --config"),
            Line::from("Set FOLIO_LOG=debug to trace filtering and scrolling"),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}
