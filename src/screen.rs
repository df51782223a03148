//! Snapshot-driven static list rendering.
//!
//! A screen owns one list renderer. At construction it builds its row model,
//! binds the cell-provider dispatch, and applies the model as a full-reload
//! snapshot exactly once. Nothing changes afterwards; the screen is torn down
//! with the application.

use tracing::debug;

use crate::asset::{AssetError, SymbolImage};
use crate::model::{Appearance, Contact, Row, Section, row_model};
use crate::preset::{GroupedPreset, InsetGroupedPreset, PlainPreset, PresetKind, SidebarPreset};
use crate::view::{RenderedCell, description_cell};

/// Diffable-snapshot-style content model: sections plus items appended to
/// them, iterated in section order then insertion order.
#[derive(Debug)]
pub struct ListSnapshot<S, R> {
    sections: Vec<S>,
    items: Vec<(S, R)>,
}

impl<S: Copy + PartialEq, R> ListSnapshot<S, R> {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Appends section identities in order.
    ///
    /// # Panics
    ///
    /// Panics on a section already present in the snapshot; items would
    /// otherwise be yielded once per occurrence.
    pub fn append_sections(&mut self, sections: &[S]) {
        for &section in sections {
            assert!(
                !self.sections.contains(&section),
                "append_sections called with a duplicate section"
            );
            self.sections.push(section);
        }
    }

    /// Appends items to an existing section.
    ///
    /// # Panics
    ///
    /// Panics if the section has not been appended first; that is a
    /// programming defect, mirroring the host-framework assertion.
    pub fn append_items(&mut self, items: impl IntoIterator<Item = R>, section: S) {
        assert!(
            self.sections.iter().any(|s| *s == section),
            "append_items called with a section missing from the snapshot"
        );
        self.items.extend(items.into_iter().map(|item| (section, item)));
    }

    /// All items, grouped by section order then insertion order.
    pub fn items(&self) -> impl Iterator<Item = &R> + '_ {
        self.sections.iter().flat_map(|section| {
            self.items
                .iter()
                .filter(move |(s, _)| s == section)
                .map(|(_, item)| item)
        })
    }

    /// Total item count across all sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no items have been appended.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Copy + PartialEq, R> Default for ListSnapshot<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell-provider dispatch installed into a list renderer.
pub type CellProvider<P> = Box<dyn Fn(&Row<P>) -> RenderedCell>;

/// Builds the standard provider for a preset set: example rows dispatch by
/// preset to its registry entry, caption rows use the shared renderer.
pub fn registry_provider<P: PresetKind>() -> CellProvider<P> {
    Box::new(|row| match row {
        Row::Example(preset, contact) => RenderedCell {
            content: preset.content(contact),
            background: preset.background(),
        },
        Row::Description(label) => description_cell(label),
    })
}

/// Owns the list content of one screen.
///
/// Two states: unbound at construction, bound once a provider is installed
/// and a snapshot applied. There is no transition back.
pub struct ListRenderer<P: PresetKind> {
    appearance: Appearance,
    provider: Option<CellProvider<P>>,
    cells: Vec<RenderedCell>,
}

impl<P: PresetKind> ListRenderer<P> {
    /// Constructs an unbound renderer for the given appearance.
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            provider: None,
            cells: Vec::new(),
        }
    }

    /// The layout appearance this renderer was constructed with.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// True once a cell provider has been installed.
    pub fn is_bound(&self) -> bool {
        self.provider.is_some()
    }

    /// Installs the cell-provider dispatch. Must happen before `apply`.
    pub fn bind(&mut self, provider: CellProvider<P>) {
        self.provider = Some(provider);
    }

    /// Commits the snapshot as the complete list content in one step,
    /// replacing whatever was rendered before. No incremental diffing.
    ///
    /// # Panics
    ///
    /// Panics if called before [`bind`](Self::bind); the provider must exist
    /// before content is committed.
    pub fn apply(&mut self, snapshot: &ListSnapshot<Section, Row<P>>) {
        let provider = self
            .provider
            .as_ref()
            .expect("apply called before bind: no cell provider installed");
        self.cells = snapshot.items().map(provider).collect();
        debug!(
            appearance = self.appearance.title(),
            cells = self.cells.len(),
            "snapshot applied"
        );
    }

    /// The materialized cells, in row-model order.
    pub fn cells(&self) -> &[RenderedCell] {
        &self.cells
    }

    /// Consumes the renderer, keeping only its rendered content.
    pub fn into_cells(self) -> Vec<RenderedCell> {
        self.cells
    }
}

/// One loaded appearance screen: title plus its rendered cells.
#[derive(Debug)]
pub struct Screen {
    appearance: Appearance,
    cells: Vec<RenderedCell>,
}

impl Screen {
    /// Loads the screen for preset set `P`: resolve the image asset, build
    /// the row model, bind the registry dispatch, apply the snapshot.
    ///
    /// Fails only when the contact's symbol image cannot be resolved.
    pub fn load<P: PresetKind>() -> Result<Self, AssetError> {
        Self::load_with_symbol::<P>(Contact::IMAGE_SYMBOL)
    }

    /// Screen loader with an explicit symbol name for the contact image.
    pub(crate) fn load_with_symbol<P: PresetKind>(symbol: &'static str) -> Result<Self, AssetError> {
        let image = SymbolImage::named(symbol)?;
        let rows = row_model::<P>(image);

        let mut snapshot = ListSnapshot::new();
        snapshot.append_sections(&[Section::Main]);
        snapshot.append_items(rows, Section::Main);

        let mut renderer = ListRenderer::<P>::new(P::APPEARANCE);
        renderer.bind(registry_provider::<P>());
        renderer.apply(&snapshot);

        debug!(
            screen = P::APPEARANCE.title(),
            rows = snapshot.len(),
            "screen loaded"
        );
        Ok(Self {
            appearance: P::APPEARANCE,
            cells: renderer.into_cells(),
        })
    }

    /// Loads all four appearance screens in screen order.
    pub fn load_all() -> Result<[Self; 4], AssetError> {
        Ok([
            Self::load::<PlainPreset>()?,
            Self::load::<GroupedPreset>()?,
            Self::load::<InsetGroupedPreset>()?,
            Self::load::<SidebarPreset>()?,
        ])
    }

    /// The appearance this screen renders.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Human-readable screen title.
    pub fn title(&self) -> &'static str {
        self.appearance.title()
    }

    /// The screen's rendered cells, in row-model order.
    pub fn cells(&self) -> &[RenderedCell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{BackgroundClass, ContentLayout};

    fn plain_snapshot() -> ListSnapshot<Section, Row<PlainPreset>> {
        let image = SymbolImage::named(Contact::IMAGE_SYMBOL).unwrap();
        let mut snapshot = ListSnapshot::new();
        snapshot.append_sections(&[Section::Main]);
        snapshot.append_items(row_model::<PlainPreset>(image), Section::Main);
        snapshot
    }

    #[test]
    fn snapshot_keeps_insertion_order() {
        let snapshot = plain_snapshot();
        assert_eq!(snapshot.len(), 10);
        let rows: Vec<&Row<PlainPreset>> = snapshot.items().collect();
        assert!(matches!(rows[0], Row::Example(PlainPreset::Cell, _)));
        assert!(matches!(rows[9], Row::Description(_)));
    }

    #[test]
    #[should_panic(expected = "duplicate section")]
    fn appending_a_duplicate_section_panics() {
        let mut snapshot: ListSnapshot<Section, Row<PlainPreset>> = ListSnapshot::new();
        snapshot.append_sections(&[Section::Main]);
        snapshot.append_sections(&[Section::Main]);
    }

    #[test]
    #[should_panic(expected = "section missing from the snapshot")]
    fn appending_items_to_a_missing_section_panics() {
        let mut snapshot: ListSnapshot<Section, Row<PlainPreset>> = ListSnapshot::new();
        snapshot.append_items(Vec::new(), Section::Main);
    }

    #[test]
    fn bind_then_apply_materializes_every_row() {
        let snapshot = plain_snapshot();
        let mut renderer = ListRenderer::<PlainPreset>::new(Appearance::Plain);
        assert!(!renderer.is_bound());

        renderer.bind(registry_provider::<PlainPreset>());
        assert!(renderer.is_bound());

        renderer.apply(&snapshot);
        assert_eq!(renderer.cells().len(), 10);
    }

    #[test]
    #[should_panic(expected = "apply called before bind")]
    fn apply_before_bind_panics() {
        let snapshot = plain_snapshot();
        let mut renderer = ListRenderer::<PlainPreset>::new(Appearance::Plain);
        renderer.apply(&snapshot);
    }

    #[test]
    fn apply_is_idempotent() {
        let snapshot = plain_snapshot();
        let mut renderer = ListRenderer::<PlainPreset>::new(Appearance::Plain);
        renderer.bind(registry_provider::<PlainPreset>());

        renderer.apply(&snapshot);
        let first = renderer.cells().to_vec();
        renderer.apply(&snapshot);
        assert_eq!(renderer.cells(), first.as_slice());
    }

    #[test]
    fn screen_load_renders_examples_and_captions() {
        let screen = Screen::load::<PlainPreset>().unwrap();
        assert_eq!(screen.title(), "Appearance.plain");
        assert_eq!(screen.cells().len(), 10);

        let example = &screen.cells()[0];
        assert_eq!(example.content.text, "Arthur");
        assert_eq!(example.content.secondary_text.as_deref(), Some("Dent"));
        assert_eq!(example.background, BackgroundClass::PlainCell);

        let caption = &screen.cells()[1];
        assert_eq!(caption.content.text, ".cell");
        assert_eq!(caption.content.layout, ContentLayout::Caption);
    }

    #[test]
    fn screen_load_fails_on_unknown_symbol() {
        let err = Screen::load_with_symbol::<PlainPreset>("person.fill.badge").unwrap_err();
        assert!(matches!(err, AssetError::UnknownSymbol(_)));
    }

    #[test]
    fn load_all_yields_the_four_screens_in_order() {
        let screens = Screen::load_all().unwrap();
        let titles: Vec<&str> = screens.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Appearance.plain",
                "Appearance.grouped",
                "Appearance.insetGrouped",
                "Appearance.sidebar",
            ]
        );
        assert_eq!(screens[1].cells().len(), 4);
        assert_eq!(screens[2].cells().len(), 4);
        assert_eq!(screens[3].cells().len(), 10);
    }
}
