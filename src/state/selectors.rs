//! Read-only derived state. Absent models and absent cells resolve to `None`
//! rather than errors; callers substitute their own defaults.

use rustc_hash::FxHashMap;

use crate::models::{Cell, CellId, NotebookModel};

use super::app::{AppState, ContentModel, ContentRef};
use super::entities::KernelRecord;

pub fn model(state: &AppState, content_ref: ContentRef) -> Option<&ContentModel> {
    state.contents.get(content_ref).map(|record| &record.model)
}

pub fn notebook_model(state: &AppState, content_ref: ContentRef) -> Option<&NotebookModel> {
    match model(state, content_ref) {
        Some(ContentModel::Notebook(notebook)) => Some(notebook),
        _ => None,
    }
}

pub fn cell_focused<'a>(model: &'a NotebookModel) -> Option<&'a CellId> {
    model.cell_focused.as_ref()
}

pub fn cell_map<'a>(model: &'a NotebookModel) -> &'a FxHashMap<CellId, Cell> {
    model.cell_map()
}

pub fn cell_order<'a>(model: &'a NotebookModel) -> &'a [CellId] {
    model.cell_order()
}

pub fn cell_by_id<'a>(model: &'a NotebookModel, id: &CellId) -> Option<&'a Cell> {
    model.cell(id)
}

pub fn kernel_by_content_ref(state: &AppState, content_ref: ContentRef) -> Option<&KernelRecord> {
    let kernel_ref = state.contents.get(content_ref)?.kernel_ref?;
    state.entities.kernels.record(kernel_ref)
}
