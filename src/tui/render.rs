//! Rendering of the appearance screens.
//!
//! Maps the UI-agnostic rendered cells to ratatui lines. The appearance
//! decides the list geometry (edge-to-edge, inset, sidebar column); the
//! cell's background class and content layout decide line composition.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::AppState;
use super::style::Styles;
use crate::model::Appearance;
use crate::screen::Screen;
use crate::view::{ContentLayout, Prominence, RenderedCell};

/// Main render function.
pub(super) fn render(frame: &mut Frame, state: &mut AppState, screens: &[Screen; 4]) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(1),    // List body
    ])
    .split(frame.area());

    render_header(frame, chunks[0], state, screens);

    let screen = &screens[state.current.index()];
    render_list(frame, chunks[1], state.scroll_mut(), screen);
}

/// Renders the header bar: screen tabs plus the current title and key hints.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, screens: &[Screen; 4]) {
    let mut spans: Vec<Span> = Vec::new();
    for appearance in Appearance::ALL {
        let label = format!(
            " {}:{} ",
            appearance.index() + 1,
            appearance.title().trim_start_matches("Appearance.")
        );
        let style = if appearance == state.current {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(label, style));
    }

    let title = screens[state.current.index()].title();
    let trailing = format!("{}  [q] quit ", title);
    let used: usize = spans.iter().map(Span::width).sum();
    let pad = (area.width as usize).saturating_sub(used + trailing.len());
    spans.push(Span::styled(" ".repeat(pad), Styles::header_bar()));
    spans.push(Span::styled(trailing, Styles::header_bar()));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::header_bar());
    frame.render_widget(paragraph, area);
}

/// Renders the current screen's cells with scroll support.
fn render_list(frame: &mut Frame, area: Rect, scroll: &mut usize, screen: &Screen) {
    let area = appearance_inset(screen.appearance(), area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for cell in screen.cells() {
        lines.extend(cell_lines(cell, width));
    }

    // Clamp scroll to valid range
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines).scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// List geometry per appearance: plain is edge-to-edge, grouped keeps a small
/// margin, inset-grouped indents both edges, sidebar narrows to a column.
fn appearance_inset(appearance: Appearance, area: Rect) -> Rect {
    match appearance {
        Appearance::Plain => area,
        Appearance::Grouped => inset_h(area, 1),
        Appearance::InsetGrouped => inset_h(area, 3),
        Appearance::Sidebar => Rect {
            width: area.width.min(36),
            ..area
        },
    }
}

fn inset_h(area: Rect, inset: u16) -> Rect {
    let inset = inset.min(area.width / 2);
    Rect {
        x: area.x + inset,
        width: area.width - inset * 2,
        ..area
    }
}

/// Lays out one cell as terminal lines, padded to the content width so the
/// background zone reads as a full band.
fn cell_lines(cell: &RenderedCell, width: usize) -> Vec<Line<'static>> {
    let band = Styles::background(cell.background);
    let content = &cell.content;
    let glyph = content
        .image
        .map(|g| format!("{} ", g))
        .unwrap_or_default();
    let secondary = content.secondary_text.clone().unwrap_or_default();

    match content.layout {
        ContentLayout::Inline => {
            vec![pad_line(
                vec![
                    Span::styled(format!("{}{}", glyph, content.text), band),
                    Span::styled(format!("  {}", secondary), Styles::secondary(band)),
                ],
                width,
                band,
            )]
        }
        ContentLayout::Subtitle => {
            vec![
                pad_line(
                    vec![Span::styled(format!("{}{}", glyph, content.text), band)],
                    width,
                    band,
                ),
                pad_line(
                    vec![Span::styled(
                        format!("   {}", secondary),
                        Styles::secondary(band),
                    )],
                    width,
                    band,
                ),
            ]
        }
        ContentLayout::Value => {
            let left = Span::styled(format!("{}{}", glyph, content.text), band);
            // Trailing text gets the room left after a one-cell gap, truncated
            // so the line never exceeds the band.
            let avail = width.saturating_sub(left.width());
            let mut secondary = secondary;
            if avail > 1 {
                let room = avail - 1;
                if secondary.chars().count() > room {
                    secondary = secondary.chars().take(room).collect();
                }
            } else {
                secondary.clear();
            }
            let right = Span::styled(secondary, Styles::secondary(band));
            let pad = width.saturating_sub(left.width() + right.width());
            vec![Line::from(vec![
                left,
                Span::styled(" ".repeat(pad), band),
                right,
            ])]
        }
        ContentLayout::Header(prominence) => {
            let (text, modifier) = match prominence {
                Prominence::Regular => (content.text.clone(), Modifier::BOLD),
                Prominence::Prominent => {
                    (content.text.clone(), Modifier::BOLD | Modifier::UNDERLINED)
                }
                Prominence::ExtraProminent => (
                    content.text.to_uppercase(),
                    Modifier::BOLD | Modifier::UNDERLINED,
                ),
            };
            vec![pad_line(
                vec![
                    Span::styled(format!("{}{}", glyph, text), band.add_modifier(modifier)),
                    Span::styled(format!("  {}", secondary), Styles::secondary(band)),
                ],
                width,
                band,
            )]
        }
        ContentLayout::Footer => {
            let dim = Styles::secondary(band);
            vec![pad_line(
                vec![Span::styled(
                    format!("{}{}  {}", glyph, content.text, secondary),
                    dim,
                )],
                width,
                band,
            )]
        }
        ContentLayout::Caption => {
            // Pill plus its bottom padding line
            vec![
                pad_line(
                    vec![
                        Span::styled(" ".to_string(), band),
                        Span::styled(format!(" {} ", content.text), Styles::caption_pill()),
                    ],
                    width,
                    band,
                ),
                pad_line(Vec::new(), width, band),
            ]
        }
    }
}

fn pad_line(mut spans: Vec<Span<'static>>, width: usize, band: Style) -> Line<'static> {
    let used: usize = spans.iter().map(Span::width).sum();
    let pad = width.saturating_sub(used);
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), band));
    }
    Line::from(spans)
}
