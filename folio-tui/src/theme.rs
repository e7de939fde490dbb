//! Blue theme tokens for the Folio TUI
//!
//! # Color Palette
//! - **Primary**: Royal blue (headings, accents, focus)
//! - **Deep**: Navy (hero banner, shaded navigation bar)
//! - **Light**: Pale blue (headline, hovered chips)
//! - **Chip**: Blue on midnight (skill and technology chips)
//! - **Muted**: Cool gray (secondary text, idle icons)
//! - **Warning / Negative**: Amber / red (status bar)

use ratatui::style::{Color, Modifier, Style};

use folio_core::{ContactKind, Icon};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Royal blue (accent, focus, section headings)
    pub primary: Color,
    /// Navy (hero background, shaded nav bar)
    pub deep: Color,
    /// Pale blue (headline, secondary accent)
    pub light: Color,
    /// Chip foreground
    pub chip_fg: Color,
    /// Chip background
    pub chip_bg: Color,
    /// Cool gray (muted text, idle icons)
    pub muted: Color,
    /// Amber (warnings)
    pub warning: Color,
    /// Red (errors)
    pub negative: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (body text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::blue()
    }
}

impl Theme {
    pub const fn blue() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235),
            deep: Color::Rgb(30, 64, 175),
            light: Color::Rgb(191, 219, 254),
            chip_fg: Color::Rgb(147, 197, 253),
            chip_bg: Color::Rgb(30, 58, 138),
            muted: Color::Rgb(156, 163, 175),
            warning: Color::Rgb(245, 158, 11),
            negative: Color::Rgb(239, 68, 68),
            text_primary: Color::White,
            text_secondary: Color::Rgb(209, 213, 219),
        }
    }

    /// Icon colour: accent while hovered, gray otherwise.
    pub fn icon_color(&self, hovered: bool) -> Color {
        if hovered {
            self.primary
        } else {
            self.muted
        }
    }
}

const THEME: Theme = Theme::blue();

pub fn theme() -> Theme {
    THEME
}

pub fn accent() -> Style {
    Style::default().fg(THEME.primary)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn light() -> Style {
    Style::default().fg(THEME.light)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn body() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn title() -> Style {
    Style::default()
        .fg(THEME.text_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn chip() -> Style {
    Style::default().fg(THEME.chip_fg).bg(THEME.chip_bg)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn hero() -> Style {
    Style::default().fg(THEME.text_primary).bg(THEME.deep)
}

pub fn focused(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

/// Navigation bar: transparent at the top of the page, shaded once scrolled.
pub fn nav_bar(scrolled: bool) -> Style {
    if scrolled {
        Style::default().bg(THEME.deep)
    } else {
        Style::default()
    }
}

pub fn icon(icon: Icon, hovered: bool) -> (&'static str, Style) {
    (icon_glyph(icon), Style::default().fg(THEME.icon_color(hovered)))
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Users => "☺",
        Icon::Building => "▥",
        Icon::Award => "★",
        Icon::LineChart => "↗",
        Icon::Code => "λ",
        Icon::Cloud => "☁",
        Icon::Server => "≡",
        Icon::Shield => "◈",
    }
}

pub fn contact_glyph(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Mail => "✉",
        ContactKind::Phone => "☎",
        ContactKind::LinkedIn => "in",
    }
}
