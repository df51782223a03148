//! Symbol image resolution.
//!
//! Example records reference images by symbol name (the same names the
//! original design assets use). In a terminal the image is a single glyph,
//! looked up in a fixed table. An unknown name is a configuration mistake
//! and must fail screen construction instead of rendering a blank cell.

/// Symbol name to terminal glyph table.
const SYMBOLS: &[(&str, char)] = &[
    ("person", '\u{1F464}'),
    ("person.2", '\u{1F465}'),
    ("folder", '\u{1F4C1}'),
    ("doc", '\u{1F4C4}'),
];

/// Error types for asset resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The symbol name has no entry in the glyph table.
    UnknownSymbol(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::UnknownSymbol(name) => {
                write!(f, "unknown symbol image: {:?}", name)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// A resolved symbol image: the name it was requested under plus the glyph
/// the terminal renders for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolImage {
    name: &'static str,
    glyph: char,
}

impl SymbolImage {
    /// Resolves a symbol by name against the glyph table.
    pub fn named(name: &'static str) -> Result<Self, AssetError> {
        SYMBOLS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(name, glyph)| Self { name, glyph })
            .ok_or_else(|| AssetError::UnknownSymbol(name.to_string()))
    }

    /// The symbol name this image was resolved from.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// The terminal glyph for this image.
    pub fn glyph(self) -> char {
        self.glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbol_resolves() {
        let image = SymbolImage::named("person").unwrap();
        assert_eq!(image.name(), "person");
        assert_eq!(image.glyph(), '\u{1F464}');
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let err = SymbolImage::named("person.questionmark").unwrap_err();
        assert_eq!(
            err,
            AssetError::UnknownSymbol("person.questionmark".to_string())
        );
        assert!(err.to_string().contains("person.questionmark"));
    }
}
