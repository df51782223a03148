//! Presets available under the grouped appearance.

use super::{PresetKind, contact_content};
use crate::model::{Appearance, Contact};
use crate::view::{BackgroundClass, CellContent, ContentLayout, Prominence};

/// Cell presets of the grouped appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupedPreset {
    GroupedHeader,
    GroupedFooter,
}

impl PresetKind for GroupedPreset {
    const APPEARANCE: Appearance = Appearance::Grouped;

    fn all() -> &'static [Self] {
        &[Self::GroupedHeader, Self::GroupedFooter]
    }

    fn label(self) -> &'static str {
        match self {
            Self::GroupedHeader => ".groupedHeader",
            Self::GroupedFooter => ".groupedFooter",
        }
    }

    fn content(self, contact: &Contact) -> CellContent {
        let layout = match self {
            Self::GroupedHeader => ContentLayout::Header(Prominence::Regular),
            Self::GroupedFooter => ContentLayout::Footer,
        };
        contact_content(contact, layout)
    }

    fn background(self) -> BackgroundClass {
        match self {
            Self::GroupedHeader | Self::GroupedFooter => BackgroundClass::GroupedHeaderFooter,
        }
    }
}
