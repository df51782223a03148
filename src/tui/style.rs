//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::BackgroundClass;

/// Terminal palette. "Label" and "system background" follow the terminal's
/// light-on-dark convention: label is white, background is the default.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const ZONE_BG: Color = Color::DarkGray;
    pub const SIDEBAR_BG: Color = Color::Black;
    pub const ACCOMPANIED_BG: Color = Color::DarkGray;
    pub const HEADER_BG: Color = Color::Blue;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::Gray;
    pub const HEADER_FG: Color = Color::White;
    pub const LABEL: Color = Color::White;
    pub const INVERTED_LABEL: Color = Color::Black;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Background band for a cell's structural zone.
    pub fn background(class: BackgroundClass) -> Style {
        match class {
            BackgroundClass::PlainCell => Style::default().fg(Theme::FG).bg(Theme::BG),
            BackgroundClass::PlainHeaderFooter => {
                Style::default().fg(Theme::FG).bg(Theme::ZONE_BG)
            }
            BackgroundClass::GroupedHeaderFooter => {
                Style::default().fg(Theme::FG_DIM).bg(Theme::BG)
            }
            BackgroundClass::SidebarCell => Style::default().fg(Theme::FG).bg(Theme::SIDEBAR_BG),
            BackgroundClass::AccompaniedSidebarCell => {
                Style::default().fg(Theme::FG).bg(Theme::ACCOMPANIED_BG)
            }
            BackgroundClass::SidebarHeader => {
                Style::default().fg(Theme::FG_DIM).bg(Theme::SIDEBAR_BG)
            }
        }
    }

    /// Caption pill: inverted label and background colors.
    pub fn caption_pill() -> Style {
        Style::default().fg(Theme::INVERTED_LABEL).bg(Theme::LABEL)
    }

    /// Secondary text within a background band.
    pub fn secondary(band: Style) -> Style {
        band.fg(Theme::FG_DIM)
    }

    /// Header bar style.
    pub fn header_bar() -> Style {
        Style::default().fg(Theme::HEADER_FG).bg(Theme::HEADER_BG)
    }

    /// Active screen tab.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive screen tab.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE).bg(Theme::HEADER_BG)
    }
}
