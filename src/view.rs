//! UI-agnostic rendered-cell model.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering framework. The TUI maps them to ratatui styles and
//! line layouts; a different frontend would map them to its own widgets.

/// How a cell lays out its text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    /// Primary and secondary text side by side on one line.
    Inline,
    /// Secondary text on its own subtitle line below the primary text.
    Subtitle,
    /// Secondary text trailing at the right edge of the line.
    Value,
    /// Single emphasized header line.
    Header(Prominence),
    /// Single de-emphasized footer line.
    Footer,
    /// Small caption pill with inverted foreground/background.
    Caption,
}

/// Emphasis level for header layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prominence {
    Regular,
    Prominent,
    ExtraProminent,
}

/// Structural zone of the list a cell's background belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundClass {
    PlainCell,
    PlainHeaderFooter,
    GroupedHeaderFooter,
    SidebarCell,
    AccompaniedSidebarCell,
    SidebarHeader,
}

/// Content configuration of a single cell: populated text fields plus the
/// layout the preset prescribes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub text: String,
    pub secondary_text: Option<String>,
    pub image: Option<char>,
    pub layout: ContentLayout,
}

/// A fully materialized cell: content plus background zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub content: CellContent,
    pub background: BackgroundClass,
}

/// Shared caption renderer, identical on all four screens: the literal
/// preset name in a pill on a plain-cell background.
pub fn description_cell(label: &str) -> RenderedCell {
    RenderedCell {
        content: CellContent {
            text: label.to_string(),
            secondary_text: None,
            image: None,
            layout: ContentLayout::Caption,
        },
        background: BackgroundClass::PlainCell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_cell_carries_the_literal_label() {
        let cell = description_cell(".groupedHeader");
        assert_eq!(cell.content.text, ".groupedHeader");
        assert_eq!(cell.content.layout, ContentLayout::Caption);
        assert_eq!(cell.background, BackgroundClass::PlainCell);
        assert_eq!(cell.content.secondary_text, None);
        assert_eq!(cell.content.image, None);
    }
}
