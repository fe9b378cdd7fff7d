//! Notebook composition root: resolve an editor per cell, decorate each cell
//! with the mode's pipeline, and attach the status bar.

use crate::models::CellType;
use crate::state::{selectors, AppState, ContentRef};

use super::decorators::{
    decorate, read_only_pipeline, standard_pipeline, CellDecorator, CellFrame, DecorateCtx,
};
use super::editor_slot::{resolve_editor, EditorElement, EditorKind, EditorNode, EditorSession};
use super::status_bar::StatusBarView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotebookMode {
    Editable,
    ReadOnly,
}

#[derive(Debug)]
pub struct NotebookView {
    pub content_ref: ContentRef,
    pub cells: Vec<CellFrame>,
    pub status_bar: StatusBarView,
}

/// Candidate editors registered for a cell type, in declaration order.
fn editor_children(cell_type: CellType) -> Vec<EditorNode> {
    match cell_type {
        CellType::Code => vec![
            EditorNode::Element(EditorElement::typed(EditorKind::Syntax)),
            EditorNode::Element(EditorElement::typed(EditorKind::Plain)),
        ],
        CellType::Markdown | CellType::Raw => vec![
            EditorNode::Element(EditorElement::typed(EditorKind::Plain)),
            EditorNode::Element(EditorElement::typed(EditorKind::Syntax)),
        ],
    }
}

impl NotebookView {
    pub fn project(state: &AppState, content_ref: ContentRef, mode: NotebookMode) -> Self {
        let pipeline: Vec<Box<dyn CellDecorator>> = match mode {
            NotebookMode::Editable => standard_pipeline(),
            NotebookMode::ReadOnly => read_only_pipeline(),
        };

        let mut cells = Vec::new();
        if let Some(model) = selectors::notebook_model(state, content_ref) {
            let undo_available = model.has_pending_undo();
            for (index, id) in model.cell_order().iter().enumerate() {
                let session = EditorSession::derive(state, content_ref, id);
                let cell_type = session.cell_type;
                let focused = model.cell_focused.as_ref() == Some(id);
                let desired = match mode {
                    NotebookMode::Editable => session.editor_type,
                    NotebookMode::ReadOnly => EditorKind::Plain,
                };
                let editor = resolve_editor(desired, &editor_children(cell_type), session);

                let ctx = DecorateCtx {
                    content_ref,
                    index,
                    undo_available,
                };
                let frame = CellFrame::new(id.clone(), cell_type, focused, editor);
                cells.push(decorate(frame, &pipeline, &ctx));
            }
        }

        Self {
            content_ref,
            cells,
            status_bar: StatusBarView::project(state, content_ref),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/notebook.rs"]
mod tests;
