//! View layer: framework-free projections of store state.
//!
//! - editor_slot: per-cell editor selection and derived session state
//! - decorators: the ordered cell decoration pipeline
//! - notebook: composition root (cells + status bar)
//! - render: terminal painting (feature "tui")

pub mod decorators;
pub mod editor_slot;
pub mod notebook;
#[cfg(feature = "tui")]
pub mod render;
pub mod status_bar;

pub use decorators::{
    decorate, read_only_pipeline, standard_pipeline, CellDecorator, CellFrame, DecorateCtx,
    HitZone, ZoneKind,
};
pub use editor_slot::{
    resolve_editor, EditorElement, EditorKind, EditorNode, EditorSession, ResolvedEditor,
    EDITOR_CLASS,
};
pub use notebook::{NotebookMode, NotebookView};
pub use status_bar::StatusBarView;
