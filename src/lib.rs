//! listcells - Terminal gallery of the built-in list-cell content configurations.
//!
//! Four screens, one per list appearance (plain, grouped, insetGrouped,
//! sidebar). Each screen builds a fixed row model of example cells and
//! caption rows, binds a per-preset cell provider, and applies the model as
//! a full-reload snapshot exactly once.

pub mod asset;
pub mod model;
pub mod preset;
pub mod screen;
pub mod tui;
pub mod view;
