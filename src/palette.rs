//! Brand colours and their mapping onto categories and tabs.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

pub const PRIMARY: Color = Color::Rgb(0x4a, 0xde, 0x80); // green
pub const SECONDARY: Color = Color::Rgb(0xfb, 0x92, 0x3c); // orange
pub const TERTIARY: Color = Color::Rgb(0xa7, 0x8b, 0xfa); // purple
pub const QUATERNARY: Color = Color::Rgb(0xf4, 0x72, 0xb6); // pink
pub const HIGHLIGHT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const CTA: Color = Color::Rgb(0x38, 0xbd, 0xf8);

const ROTATION: [Color; 5] = [PRIMARY, SECONDARY, TERTIARY, HIGHLIGHT, CTA];

/// Fixed colour for the well-known category slugs, white otherwise.
pub fn category_color(slug: &str) -> Color {
    match slug {
        "brand-identity" => SECONDARY,
        "web-design" => TERTIARY,
        "web-development" => QUATERNARY,
        "media" => PRIMARY,
        _ => Color::White,
    }
}

/// Colour by position, for filter buttons and card borders.
pub fn rotation_color(index: usize) -> Color {
    ROTATION[index % ROTATION.len()]
}

/// Tab ids share the category slugs; `core` is always white.
pub fn tab_color(tab_id: &str) -> Color {
    if tab_id == "core" {
        Color::White
    } else {
        category_color(tab_id)
    }
}

/// High contrast collapses the palette to terminal yellow.
pub fn themed(color: Color, theme: Theme) -> Color {
    match theme {
        Theme::Default => color,
        Theme::HighContrast if color == Color::White => Color::White,
        Theme::HighContrast => Color::Yellow,
    }
}

pub fn muted(theme: Theme) -> Style {
    match theme {
        Theme::Default => Style::new().fg(Color::DarkGray),
        Theme::HighContrast => Style::new().fg(Color::Gray),
    }
}

pub fn accent(theme: Theme) -> Style {
    Style::new()
        .fg(themed(PRIMARY, theme))
        .add_modifier(Modifier::BOLD)
}
