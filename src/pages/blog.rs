use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::data::BlogPost;
use crate::palette;
use crate::state::blog::format_date;
use crate::state::BlogState;
use crate::ui_utils::{create_list_state, focused_block};

#[derive(Debug, Default)]
pub struct BlogPage;

impl BlogPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &BlogState,
        focused: bool,
        theme: Theme,
    ) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = state
            .posts()
            .iter()
            .map(|p| {
                let date = p
                    .published_at
                    .as_ref()
                    .map(format_date)
                    .unwrap_or_else(|| "Unpublished".into());
                ListItem::new(vec![
                    Line::from(p.title.clone()),
                    Line::from(Span::styled(date, palette::muted(theme))),
                ])
            })
            .collect();
        let mut list_state = create_list_state(state.selected_index, state.scroll, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Blog", focused))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            cols[0],
            &mut list_state,
        );

        let body = match state.selected() {
            Some(post) => preview_lines(post, theme),
            None => vec![Line::from(Span::styled("No posts yet.", palette::muted(theme)))],
        };
        frame.render_widget(
            Paragraph::new(body)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title("Post")),
            cols[1],
        );
    }
}

fn preview_lines(post: &BlogPost, theme: Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        post.title.clone(),
        Style::new().bold(),
    ))];
    if let Some(date) = &post.published_at {
        lines.push(Line::from(Span::styled(
            format_date(date),
            palette::muted(theme),
        )));
    }
    if let Some(updated) = &post.updated_date {
        lines.push(Line::from(Span::styled(
            format!("Last updated on {}", format_date(updated)),
            palette::muted(theme),
        )));
    }
    lines.push(Line::default());

    if let Some(description) = &post.description {
        lines.push(Line::from(Span::styled(description.clone(), Style::new().italic())));
        lines.push(Line::default());
    }
    if let Some(content) = post.content.as_deref().filter(|c| !c.is_empty()) {
        lines.extend(content.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::default());
    }

    let tags: Vec<String> = post.categories.iter().map(|c| c.title.clone()).collect();
    if !tags.is_empty() {
        lines.push(Line::from(Span::styled(tags.join(" · "), palette::accent(theme))));
    }
    lines.push(Line::from(Span::styled(
        format!("/blog/{}", post.slug),
        palette::muted(theme),
    )));
    lines
}
