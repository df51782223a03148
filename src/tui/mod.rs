//! Terminal user interface for the appearance gallery.
//!
//! Hosts the four appearance screens, switching between them on key input.
//! Screen content is static; the loop only redraws and navigates.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::AppState;
