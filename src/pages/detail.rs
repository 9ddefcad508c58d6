//! Work detail page: a scrolled document of sections under a sticky tab bar.
//!
//! The document is laid out once per frame for the current width. Its section
//! offsets feed the scroll spy through [`DetailDocument::layout`].

use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::data::{TitledEntry, WorkItem};
use crate::palette;
use crate::state::detail::{
    tabs_for, DetailLayout, TAB_BRAND, TAB_CORE, TAB_DESIGN, TAB_DEVELOPMENT, TAB_MEDIA,
};
use crate::state::related::RelatedWork;
use crate::state::scroll_spy::SectionBounds;
use crate::state::DetailState;
use crate::ui_utils::wrap_text;

/// Rows covered by the sticky tab bar at the top of the body.
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Body rectangle inside the page border; the tab bar overlays its top rows.
pub fn body_area(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

#[derive(Debug, Clone, Default)]
pub struct DetailDocument {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionBounds>,
}

struct Builder {
    lines: Vec<Line<'static>>,
    width: usize,
    theme: Theme,
}

impl Builder {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn text(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for row in wrap_text(text, self.width.saturating_sub(indent)) {
            self.lines
                .push(Line::from(Span::styled(format!("{pad}{row}"), style)));
        }
    }

    fn field(&mut self, label: &str, value: Option<&str>) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        self.lines.push(Line::from(Span::styled(
            label.to_string(),
            palette::muted(self.theme),
        )));
        self.text(value, Style::new(), 2);
    }

    fn entry(&mut self, entry: &TitledEntry, indent: usize) {
        self.text(&format!("▸ {}", entry.title), Style::new().bold(), indent);
        if !entry.description.is_empty() {
            self.text(&entry.description, Style::new().gray(), indent + 2);
        }
        if let Some(link) = &entry.link {
            self.text(link, Style::new().underlined(), indent + 2);
        }
    }

    fn heading(&mut self, tab_id: &str, title: &str) {
        let color = palette::themed(palette::tab_color(tab_id), self.theme);
        self.lines.push(Line::from(vec![
            Span::styled("● ", Style::new().fg(color)),
            Span::styled(title.to_string(), Style::new().bold()),
        ]));
        self.blank();
    }
}

impl DetailDocument {
    /// Lays out `work` for a body `width` columns wide.
    pub fn build(work: &WorkItem, related: RelatedWork<'_>, width: u16, theme: Theme) -> Self {
        let mut b = Builder {
            lines: Vec::new(),
            width: width.max(1) as usize,
            theme,
        };

        // Space under the sticky tab bar.
        for _ in 0..TAB_BAR_HEIGHT {
            b.blank();
        }

        b.text(&work.title, Style::new().bold().add_modifier(Modifier::UNDERLINED), 0);
        b.text(&work.description, Style::new().gray(), 0);
        let categories: Vec<Span<'static>> = work
            .categories
            .iter()
            .map(|c| {
                Span::styled(
                    format!("● {}  ", c.title),
                    Style::new().fg(palette::themed(palette::category_color(&c.slug), theme)),
                )
            })
            .collect();
        b.lines.push(Line::from(categories));
        if let Some(date) = work.completion_date {
            b.text(&format!("Completed {}", date.format("%B %Y")), palette::muted(theme), 0);
        }
        if !work.technologies.is_empty() {
            b.text(&work.technologies.join(" · "), palette::muted(theme), 0);
        }
        if let Some(url) = &work.project_url {
            b.text(url, Style::new().underlined(), 0);
        }
        b.blank();

        let mut sections = Vec::new();
        for tab in tabs_for(work).into_iter().filter(|t| t.has_data) {
            let top = b.lines.len();
            b.heading(tab.id, tab.name);
            match tab.id {
                TAB_CORE => core_section(&mut b, work),
                TAB_BRAND => brand_section(&mut b, work),
                TAB_DESIGN => work.web_design.iter().for_each(|e| b.entry(e, 0)),
                TAB_DEVELOPMENT => development_section(&mut b, work),
                TAB_MEDIA => work.media_content.iter().for_each(|e| b.entry(e, 0)),
                _ => {}
            }
            b.blank();
            sections.push(SectionBounds::new(
                tab.id,
                top as i64,
                (b.lines.len() - top) as i64,
            ));
        }

        related_section(&mut b, related);

        Self {
            lines: b.lines,
            sections,
        }
    }

    /// Geometry for a viewport `viewport_height` rows tall.
    pub fn layout(&self, viewport_height: u16) -> DetailLayout {
        DetailLayout {
            sections: self.sections.clone(),
            content_height: self.lines.len() as i64,
            viewport_height: viewport_height as i64,
            navbar_height: TAB_BAR_HEIGHT as i64,
        }
    }
}

fn core_section(b: &mut Builder, work: &WorkItem) {
    let Some(core) = &work.core else { return };
    b.field("Producer", core.producer_name.as_deref());
    b.field("Client", core.client_name.as_deref());
    b.field("Project Title", core.project_title.as_deref());
    b.field("Category", core.project_category.as_deref());
    b.field("Challenge", core.project_challenge.as_deref());
    if !core.project_tech_stack.is_empty() {
        b.field("Tech Stack", Some(core.project_tech_stack.join(" · ").as_str()));
    }
}

fn brand_section(b: &mut Builder, work: &WorkItem) {
    let Some(brand) = &work.brand_development else {
        return;
    };
    for (label, entry) in [("Purpose", &brand.purpose), ("Audience", &brand.audience)] {
        if let Some(entry) = entry {
            b.field(label, Some(entry.title.as_str()));
            if !entry.description.is_empty() {
                b.text(&entry.description, Style::new().gray(), 2);
            }
        }
    }
    for (label, entries) in [
        ("Archetypes", &brand.archetypes),
        ("Associations", &brand.associations),
        ("Mood", &brand.mood),
    ] {
        if entries.is_empty() {
            continue;
        }
        b.lines.push(Line::from(Span::styled(
            label.to_string(),
            palette::muted(b.theme),
        )));
        entries.iter().for_each(|e| b.entry(e, 2));
    }
}

fn development_section(b: &mut Builder, work: &WorkItem) {
    let Some(dev) = &work.web_development else {
        return;
    };
    for feature in &dev.features {
        b.entry(
            &TitledEntry {
                title: feature.title.clone(),
                description: feature.description.clone(),
                link: feature.link.clone(),
            },
            0,
        );
        feature.micro_features.iter().for_each(|m| b.entry(m, 4));
    }
}

fn related_section(b: &mut Builder, related: RelatedWork<'_>) {
    b.lines.push(Line::from(Span::styled(
        "Related Work",
        Style::new().bold(),
    )));
    for (direction, work) in [("Previous", related.prev), ("Next", related.next)] {
        let line = match work {
            Some(w) => format!("{direction}: {}", w.title),
            None => format!("No {} work available", direction.to_lowercase()),
        };
        b.text(&line, palette::muted(b.theme), 2);
    }
}

#[derive(Debug, Default)]
pub struct DetailPage;

impl DetailPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        work: &WorkItem,
        state: &DetailState,
        document: &DetailDocument,
        theme: Theme,
    ) {
        let accent = work
            .primary_category()
            .map(palette::category_color)
            .unwrap_or(Color::White);
        let block = Block::bordered()
            .title(work.title.clone())
            .border_style(Style::new().fg(palette::themed(accent, theme)));
        frame.render_widget(block, area);

        let body = body_area(area);
        let scroll = u16::try_from(state.scroll()).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(document.lines.clone()).scroll((scroll, 0)),
            body,
        );

        let bar = Rect {
            height: TAB_BAR_HEIGHT.min(body.height),
            ..body
        };
        frame.render_widget(Clear, bar);
        frame.render_widget(
            Paragraph::new(tab_line(state, theme))
                .centered()
                .block(Block::bordered().border_style(palette::muted(theme))),
            bar,
        );
    }
}

fn tab_line(state: &DetailState, theme: Theme) -> Line<'static> {
    let active = state.active_tab();
    let spans = state.tabs().iter().flat_map(|tab| {
        let style = if !tab.has_data {
            Style::new().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else if active == Some(tab.id) {
            Style::new()
                .fg(palette::themed(palette::tab_color(tab.id), theme))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::new().gray()
        };
        [Span::styled(format!(" {} ", tab.name), style), Span::raw(" ")]
    });
    Line::from(spans.collect::<Vec<_>>())
}
