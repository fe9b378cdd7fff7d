//! znote - notebook-style document editor core
//!
//! Module structure:
//! - input: key events, notebook Enter-key dispatch, listener registry
//! - models: notebook document model (cells, ordering, focus)
//! - state: headless application core (entities, store, selectors)
//! - views: framework-free projections (editor slot, decorators, status bar)
//! - runtime: async kernel session bridge
//! - ui: terminal runtime (feature "tui")

pub mod input;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod state;
#[cfg(feature = "tui")]
pub mod ui;
pub mod views;
