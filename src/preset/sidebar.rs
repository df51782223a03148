//! Presets available under the sidebar appearance.

use super::{PresetKind, contact_content};
use crate::model::{Appearance, Contact};
use crate::view::{BackgroundClass, CellContent, ContentLayout, Prominence};

/// Cell presets of the sidebar appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarPreset {
    SidebarCell,
    SidebarSubtitleCell,
    AccompaniedSidebarCell,
    AccompaniedSidebarSubtitleCell,
    SidebarHeader,
}

impl PresetKind for SidebarPreset {
    const APPEARANCE: Appearance = Appearance::Sidebar;

    fn all() -> &'static [Self] {
        &[
            Self::SidebarCell,
            Self::SidebarSubtitleCell,
            Self::AccompaniedSidebarCell,
            Self::AccompaniedSidebarSubtitleCell,
            Self::SidebarHeader,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::SidebarCell => ".sidebarCell",
            Self::SidebarSubtitleCell => ".sidebarSubtitleCell",
            Self::AccompaniedSidebarCell => ".accompaniedSidebarCell",
            Self::AccompaniedSidebarSubtitleCell => ".accompaniedSidebarSubtitleCell",
            Self::SidebarHeader => ".sidebarHeader",
        }
    }

    fn content(self, contact: &Contact) -> CellContent {
        let layout = match self {
            Self::SidebarCell | Self::AccompaniedSidebarCell => ContentLayout::Inline,
            Self::SidebarSubtitleCell | Self::AccompaniedSidebarSubtitleCell => {
                ContentLayout::Subtitle
            }
            Self::SidebarHeader => ContentLayout::Header(Prominence::Regular),
        };
        contact_content(contact, layout)
    }

    fn background(self) -> BackgroundClass {
        match self {
            Self::SidebarCell | Self::SidebarSubtitleCell | Self::AccompaniedSidebarCell => {
                BackgroundClass::SidebarCell
            }
            Self::AccompaniedSidebarSubtitleCell => BackgroundClass::AccompaniedSidebarCell,
            Self::SidebarHeader => BackgroundClass::SidebarHeader,
        }
    }
}
