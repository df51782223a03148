//! Presets available under the plain appearance.

use super::{PresetKind, contact_content};
use crate::model::{Appearance, Contact};
use crate::view::{BackgroundClass, CellContent, ContentLayout, Prominence};

/// Cell presets of the plain appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlainPreset {
    Cell,
    SubtitleCell,
    ValueCell,
    PlainHeader,
    PlainFooter,
}

impl PresetKind for PlainPreset {
    const APPEARANCE: Appearance = Appearance::Plain;

    fn all() -> &'static [Self] {
        &[
            Self::Cell,
            Self::SubtitleCell,
            Self::ValueCell,
            Self::PlainHeader,
            Self::PlainFooter,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cell => ".cell",
            Self::SubtitleCell => ".subtitleCell",
            Self::ValueCell => ".valueCell",
            Self::PlainHeader => ".plainHeader",
            Self::PlainFooter => ".plainFooter",
        }
    }

    fn content(self, contact: &Contact) -> CellContent {
        let layout = match self {
            Self::Cell => ContentLayout::Inline,
            Self::SubtitleCell => ContentLayout::Subtitle,
            Self::ValueCell => ContentLayout::Value,
            Self::PlainHeader => ContentLayout::Header(Prominence::Regular),
            Self::PlainFooter => ContentLayout::Footer,
        };
        contact_content(contact, layout)
    }

    fn background(self) -> BackgroundClass {
        match self {
            Self::Cell | Self::SubtitleCell | Self::ValueCell => BackgroundClass::PlainCell,
            Self::PlainHeader | Self::PlainFooter => BackgroundClass::PlainHeaderFooter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_and_footers_use_the_plain_header_footer_zone() {
        assert_eq!(PlainPreset::Cell.background(), BackgroundClass::PlainCell);
        assert_eq!(
            PlainPreset::PlainHeader.background(),
            BackgroundClass::PlainHeaderFooter
        );
        assert_eq!(
            PlainPreset::PlainFooter.background(),
            BackgroundClass::PlainHeaderFooter
        );
    }

    #[test]
    fn value_cell_trails_its_secondary_text() {
        let contact = Contact::sample(
            crate::model::RecordId(0),
            crate::asset::SymbolImage::named("person").unwrap(),
        );
        let content = PlainPreset::ValueCell.content(&contact);
        assert_eq!(content.layout, ContentLayout::Value);
    }
}
