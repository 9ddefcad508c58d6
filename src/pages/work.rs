use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::data::WorkItem;
use crate::palette;
use crate::state::WorkListController;
use crate::ui_utils::wrap_text;

#[derive(Debug, Default)]
pub struct WorkPage;

impl WorkPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        list: &WorkListController,
        focused_card: usize,
        fading: bool,
        theme: Theme,
    ) {
        let block = Block::bordered().title("Our Work").blue();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(inner);

        frame.render_widget(Paragraph::new(filter_bar(list, theme)), rows[0]);

        if list.is_empty() {
            frame.render_widget(
                Paragraph::new("No work in this category yet.")
                    .style(palette::muted(theme))
                    .centered(),
                rows[1],
            );
        } else {
            let visible = list.visible();
            let cols = Layout::new(
                Direction::Horizontal,
                (0..list.visible_count())
                    .map(|_| Constraint::Ratio(1, list.visible_count() as u32)),
            )
            .spacing(2)
            .split(rows[1]);

            for (offset, work) in visible.iter().enumerate() {
                let position = list.current_slide() + offset;
                render_card(
                    frame,
                    cols[offset],
                    work,
                    position,
                    offset == focused_card,
                    fading,
                    theme,
                );
            }
        }

        frame.render_widget(Paragraph::new(slide_indicator(list, theme)), rows[2]);
    }
}

fn filter_bar(list: &WorkListController, theme: Theme) -> Vec<Line<'static>> {
    let selected = list.selected_category();
    let mut spans = vec![filter_button(0, "All", selected.is_none(), Color::White, theme)];
    for (i, category) in list.categories().iter().enumerate() {
        let active = selected == Some(category.slug.as_str());
        spans.push(Span::raw("  "));
        spans.push(filter_button(
            i + 1,
            &category.title,
            active,
            palette::rotation_color(i),
            theme,
        ));
    }
    vec![
        Line::from(spans),
        Line::from(Span::styled(
            "[ ] cycle filters  ← → slide  drag to swipe",
            palette::muted(theme),
        )),
    ]
}

fn filter_button(
    key: usize,
    label: &str,
    active: bool,
    dot: Color,
    theme: Theme,
) -> Span<'static> {
    if active {
        Span::styled(
            format!("● {key} {label}"),
            Style::new()
                .fg(palette::themed(dot, theme))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("  {key} {label}"), palette::muted(theme))
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    work: &WorkItem,
    position: usize,
    focused: bool,
    fading: bool,
    theme: Theme,
) {
    let border_color = palette::themed(palette::rotation_color(position), theme);
    let mut block = Block::bordered()
        .border_style(Style::new().fg(border_color))
        .title(format!(" {:02} ", position + 1));
    if focused {
        block = block.border_type(BorderType::Thick);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(1) as usize;
    let mut lines = vec![Line::from(Span::styled(
        work.title.clone(),
        Style::new().bold(),
    ))];

    let dots: Vec<Span> = work
        .categories
        .iter()
        .map(|c| {
            Span::styled(
                "● ",
                Style::new().fg(palette::themed(palette::category_color(&c.slug), theme)),
            )
        })
        .collect();
    lines.push(Line::from(dots));
    lines.push(Line::default());

    lines.extend(
        wrap_text(&work.description, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::new().gray()))),
    );

    if let Some(label) = work.work_type_label() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("#{label}"),
            palette::accent(theme),
        )));
    }
    if let Some(image) = &work.cover_image {
        lines.push(Line::from(Span::styled(
            format!("▣ {}", image.asset.reference),
            palette::muted(theme),
        )));
    }

    let mut paragraph = Paragraph::new(lines);
    if fading {
        paragraph = paragraph.style(Style::new().add_modifier(Modifier::DIM));
    }
    frame.render_widget(paragraph, inner);
}

fn slide_indicator(list: &WorkListController, theme: Theme) -> Line<'static> {
    let pages = list.max_slide() + 1;
    let mut spans: Vec<Span> = (0..pages)
        .map(|i| {
            if i == list.current_slide() {
                Span::styled("━━ ", palette::accent(theme))
            } else {
                Span::styled("── ", palette::muted(theme))
            }
        })
        .collect();
    spans.push(Span::raw(format!(" {} projects", list.len())));
    Line::from(spans)
}
