use super::*;

use crate::models::{Cell, CellId, NotebookModel};
use crate::state::Store;
use crate::views::decorators::ZoneKind;
use crate::views::editor_slot::EDITOR_CLASS;

fn projected(mode: NotebookMode) -> NotebookView {
    let mut model = NotebookModel::with_cells([
        (CellId::new("c"), Cell::new(CellType::Code, "1 + 1")),
        (CellId::new("m"), Cell::new(CellType::Markdown, "# title")),
        (CellId::new("r"), Cell::new(CellType::Raw, "raw")),
    ]);
    model.focus_cell(&CellId::new("m"));

    let mut state = AppState::new();
    let content_ref = state.open_notebook(model);
    NotebookView::project(&state, content_ref, mode)
}

#[test]
fn projects_one_decorated_frame_per_cell_in_order() {
    let view = projected(NotebookMode::Editable);
    let ids: Vec<_> = view.cells.iter().map(|frame| frame.id.as_str()).collect();
    assert_eq!(ids, ["c", "m", "r"]);

    for frame in &view.cells {
        assert_eq!(
            frame.layers,
            ["draggable", "hijack-scroll", "cell-creator", "undoable-delete"]
        );
        assert!(frame.editor.is_some(), "cell {} has an editor", frame.id);
    }
    assert!(!view.cells[0].focused);
    assert!(view.cells[1].focused);
}

#[test]
fn editable_mode_resolves_syntax_editors() {
    let view = projected(NotebookMode::Editable);
    for frame in &view.cells {
        let editor = frame.editor.as_ref().unwrap();
        assert_eq!(editor.element.editor_type, Some(EditorKind::Syntax));
        assert_eq!(editor.element.class_name.as_deref(), Some(EDITOR_CLASS));
    }
}

#[test]
fn read_only_mode_resolves_plain_editors_without_edit_affordances() {
    let view = projected(NotebookMode::ReadOnly);
    for frame in &view.cells {
        let editor = frame.editor.as_ref().unwrap();
        assert_eq!(editor.element.editor_type, Some(EditorKind::Plain));
        assert_eq!(frame.layers, ["draggable", "hijack-scroll"]);
    }
}

#[test]
fn status_bar_reports_count_and_focused_position() {
    let view = projected(NotebookMode::Editable);
    assert_eq!(view.status_bar.cell_count, 3);
    assert_eq!(view.status_bar.focused_position, Some(2));
    assert_eq!(view.status_bar.summary(), "kernel: not connected | cell 2/3");
}

#[test]
fn projection_of_a_missing_document_is_empty() {
    let content_ref = {
        let mut scratch = AppState::new();
        scratch.open_notebook(NotebookModel::new())
    };
    let state = AppState::new();
    let view = NotebookView::project(&state, content_ref, NotebookMode::Editable);
    assert!(view.cells.is_empty());
    assert_eq!(view.status_bar.cell_count, 0);
}

#[test]
fn frames_reflect_a_pending_undo_stash() {
    let mut model = NotebookModel::with_cells([
        (CellId::new("a"), Cell::empty(CellType::Code)),
        (CellId::new("b"), Cell::empty(CellType::Code)),
    ]);
    model.delete_cell(&CellId::new("b"));

    let mut state = AppState::new();
    let content_ref = state.open_notebook(model);
    let store = Store::new(state);

    let view = NotebookView::project(store.state(), content_ref, NotebookMode::Editable);
    assert!(view.cells[0].has_zone(ZoneKind::Undo));
}
