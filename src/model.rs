//! Data model for the appearance gallery.
//!
//! Each screen shows a fixed, ordered sequence of rows: one example cell per
//! content-configuration preset, each followed by a caption row naming the
//! preset. The row model is built once at screen construction and never
//! mutated afterwards.

use crate::asset::SymbolImage;
use crate::preset::PresetKind;

/// The four list layout appearances, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Plain,
    Grouped,
    InsetGrouped,
    Sidebar,
}

impl Appearance {
    /// All appearances in screen order.
    pub const ALL: [Appearance; 4] = [
        Appearance::Plain,
        Appearance::Grouped,
        Appearance::InsetGrouped,
        Appearance::Sidebar,
    ];

    /// Human-readable screen title.
    pub fn title(self) -> &'static str {
        match self {
            Appearance::Plain => "Appearance.plain",
            Appearance::Grouped => "Appearance.grouped",
            Appearance::InsetGrouped => "Appearance.insetGrouped",
            Appearance::Sidebar => "Appearance.sidebar",
        }
    }

    /// Screen index, used for per-screen TUI state.
    pub fn index(self) -> usize {
        match self {
            Appearance::Plain => 0,
            Appearance::Grouped => 1,
            Appearance::InsetGrouped => 2,
            Appearance::Sidebar => 3,
        }
    }
}

/// Section identity for the list snapshot. The lists here are single-section;
/// the variant exists because the snapshot model requires one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Main,
}

/// Stable identity of an example record within one screen's row model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub u32);

/// The example record rendered into every example row.
///
/// Identity participates in equality, so two contacts minted for different
/// rows never compare equal even though their display fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contact {
    pub id: RecordId,
    pub name: &'static str,
    pub surname: &'static str,
    pub image: SymbolImage,
}

impl Contact {
    /// Symbol name the sample contact's image resolves from.
    pub const IMAGE_SYMBOL: &'static str = "person";

    /// Creates the sample contact with the given identity.
    pub fn sample(id: RecordId, image: SymbolImage) -> Self {
        Self {
            id,
            name: "Arthur",
            surname: "Dent",
            image,
        }
    }
}

/// One unit of list content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Row<P> {
    /// An example cell styled by the given preset.
    Example(P, Contact),
    /// A caption naming the preset above it.
    Description(String),
}

/// Builds the row model for a screen: every preset of `P` in declaration
/// order, each followed by a caption row carrying its literal name.
///
/// Deterministic and infallible; the image is resolved by the caller before
/// the model is built.
pub fn row_model<P: PresetKind>(image: SymbolImage) -> Vec<Row<P>> {
    let mut rows = Vec::with_capacity(P::all().len() * 2);
    for (i, &preset) in P::all().iter().enumerate() {
        let contact = Contact::sample(RecordId(i as u32), image);
        rows.push(Row::Example(preset, contact));
        rows.push(Row::Description(preset.label().to_string()));
    }
    rows
}
