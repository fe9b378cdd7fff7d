//! Data models: the notebook document (cells, ordering, focus).

pub mod notebook;

pub use notebook::{Cell, CellId, CellType, DeletedCell, NotebookModel};
