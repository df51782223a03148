//! Content-configuration presets, one closed set per appearance.
//!
//! Each screen enumerates the presets its appearance offers. A preset maps an
//! example contact to a content configuration and names the structural zone
//! its background belongs to. The mappings are exhaustive matches, so a
//! preset without a renderer cannot compile.

mod grouped;
mod inset_grouped;
mod plain;
mod sidebar;

pub use grouped::GroupedPreset;
pub use inset_grouped::InsetGroupedPreset;
pub use plain::PlainPreset;
pub use sidebar::SidebarPreset;

use std::fmt::Debug;
use std::hash::Hash;

use crate::model::{Appearance, Contact};
use crate::view::{BackgroundClass, CellContent, ContentLayout};

/// A closed set of cell presets belonging to one appearance.
pub trait PresetKind: Copy + Eq + Hash + Debug + 'static {
    /// The appearance this preset set belongs to.
    const APPEARANCE: Appearance;

    /// Every preset in declaration order.
    fn all() -> &'static [Self];

    /// The literal preset name shown in caption rows, e.g. ".subtitleCell".
    fn label(self) -> &'static str;

    /// Content configuration for an example row carrying `contact`.
    fn content(self, contact: &Contact) -> CellContent;

    /// Background zone for this preset's cells.
    fn background(self) -> BackgroundClass;
}

/// Populates a content configuration from the contact's fields.
pub(crate) fn contact_content(contact: &Contact, layout: ContentLayout) -> CellContent {
    CellContent {
        text: contact.name.to_string(),
        secondary_text: Some(contact.surname.to_string()),
        image: Some(contact.image.glyph()),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::SymbolImage;
    use crate::model::RecordId;

    fn contact() -> Contact {
        Contact::sample(RecordId(0), SymbolImage::named(Contact::IMAGE_SYMBOL).unwrap())
    }

    fn assert_registry_complete<P: PresetKind>() {
        let contact = contact();
        for &preset in P::all() {
            let content = preset.content(&contact);
            assert_eq!(content.text, "Arthur");
            assert_eq!(content.secondary_text.as_deref(), Some("Dent"));
            assert_eq!(content.image, Some(contact.image.glyph()));
            assert!(preset.label().starts_with('.'));
            // background() is total by construction; exercise it anyway
            let _ = preset.background();
        }
    }

    #[test]
    fn every_preset_has_a_renderer() {
        assert_registry_complete::<PlainPreset>();
        assert_registry_complete::<GroupedPreset>();
        assert_registry_complete::<InsetGroupedPreset>();
        assert_registry_complete::<SidebarPreset>();
    }

    #[test]
    fn preset_sets_declare_their_appearance() {
        assert_eq!(PlainPreset::APPEARANCE, Appearance::Plain);
        assert_eq!(GroupedPreset::APPEARANCE, Appearance::Grouped);
        assert_eq!(InsetGroupedPreset::APPEARANCE, Appearance::InsetGrouped);
        assert_eq!(SidebarPreset::APPEARANCE, Appearance::Sidebar);
    }
}
