//! Presets available under the inset-grouped appearance.

use super::{PresetKind, contact_content};
use crate::model::{Appearance, Contact};
use crate::view::{BackgroundClass, CellContent, ContentLayout, Prominence};

/// Cell presets of the inset-grouped appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsetGroupedPreset {
    ProminentInsetGroupedHeader,
    ExtraProminentInsetGroupedHeader,
}

impl PresetKind for InsetGroupedPreset {
    const APPEARANCE: Appearance = Appearance::InsetGrouped;

    fn all() -> &'static [Self] {
        &[
            Self::ProminentInsetGroupedHeader,
            Self::ExtraProminentInsetGroupedHeader,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::ProminentInsetGroupedHeader => ".prominentInsetGroupedHeader",
            Self::ExtraProminentInsetGroupedHeader => ".extraProminentInsetGroupedHeader",
        }
    }

    fn content(self, contact: &Contact) -> CellContent {
        let layout = match self {
            Self::ProminentInsetGroupedHeader => ContentLayout::Header(Prominence::Prominent),
            Self::ExtraProminentInsetGroupedHeader => {
                ContentLayout::Header(Prominence::ExtraProminent)
            }
        };
        contact_content(contact, layout)
    }

    fn background(self) -> BackgroundClass {
        match self {
            Self::ProminentInsetGroupedHeader | Self::ExtraProminentInsetGroupedHeader => {
                BackgroundClass::GroupedHeaderFooter
            }
        }
    }
}
