use super::*;

use crate::models::{Cell, CellId, NotebookModel};

fn state_with(cells: &[(&str, CellType)], focused: &str) -> (AppState, ContentRef) {
    let mut model = NotebookModel::with_cells(
        cells
            .iter()
            .map(|(id, cell_type)| (CellId::new(id), Cell::new(*cell_type, ""))),
    );
    model.focus_cell(&CellId::new(focused));
    let mut state = AppState::new();
    let content_ref = state.open_notebook(model);
    (state, content_ref)
}

fn code_then(successor: CellType) -> (AppState, ContentRef) {
    state_with(&[("c1", CellType::Code), ("c2", successor)], "c1")
}

#[test]
fn non_enter_keys_are_ignored() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress::shift(KeyCode::Char('x'));
    let dispatch = dispatch_notebook_key(&state, content_ref, &key, Platform::Other);
    assert!(!dispatch.is_handled());
    assert!(dispatch.into_actions().is_empty());
}

#[test]
fn enter_without_modifiers_is_ignored() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress::plain(KeyCode::Enter);
    assert!(!dispatch_notebook_key(&state, content_ref, &key, Platform::Other).is_handled());
}

#[test]
fn enter_with_both_modifiers_fails_the_xor_gate() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress {
        shift: true,
        ctrl: true,
        ..KeyPress::plain(KeyCode::Enter)
    };
    assert!(!dispatch_notebook_key(&state, content_ref, &key, Platform::Other).is_handled());
}

#[test]
fn ctrl_enter_executes_in_place() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress::ctrl(KeyCode::Enter);
    let actions =
        dispatch_notebook_key(&state, content_ref, &key, Platform::Other).into_actions();
    assert!(matches!(
        actions.as_slice(),
        [Action::ExecuteFocusedCell { .. }]
    ));
}

#[test]
fn shift_enter_executes_before_advancing_focus() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress::shift(KeyCode::Enter);
    let actions =
        dispatch_notebook_key(&state, content_ref, &key, Platform::Other).into_actions();

    match actions.as_slice() {
        [Action::ExecuteFocusedCell { .. }, Action::FocusNextCell {
            id,
            create_cell_if_undefined,
            ..
        }, Action::FocusNextCellEditor { id: hint, .. }] => {
            assert!(id.is_none());
            assert!(*create_cell_if_undefined);
            // The hint is the cell that was focused before the advance.
            assert_eq!(hint.as_ref(), Some(&CellId::new("c1")));
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn shift_enter_skips_editor_focus_for_markdown_and_raw_successors() {
    for successor in [CellType::Markdown, CellType::Raw] {
        let (state, content_ref) = code_then(successor);
        let key = KeyPress::shift(KeyCode::Enter);
        let actions =
            dispatch_notebook_key(&state, content_ref, &key, Platform::Other).into_actions();
        assert!(
            matches!(
                actions.as_slice(),
                [Action::ExecuteFocusedCell { .. }, Action::FocusNextCell { .. }]
            ),
            "successor {successor:?} must not get editor focus: {actions:?}"
        );
    }
}

#[test]
fn shift_enter_at_the_last_cell_focuses_the_created_editor() {
    let (state, content_ref) = state_with(&[("only", CellType::Code)], "only");
    let key = KeyPress::shift(KeyCode::Enter);
    let actions =
        dispatch_notebook_key(&state, content_ref, &key, Platform::Other).into_actions();
    assert!(matches!(
        actions.as_slice(),
        [
            Action::ExecuteFocusedCell { .. },
            Action::FocusNextCell { .. },
            Action::FocusNextCellEditor { .. }
        ]
    ));
}

#[test]
fn macos_treats_cmd_enter_as_control_like() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress::meta(KeyCode::Enter);

    let actions =
        dispatch_notebook_key(&state, content_ref, &key, Platform::MacOs).into_actions();
    assert!(matches!(
        actions.as_slice(),
        [Action::ExecuteFocusedCell { .. }]
    ));

    // Elsewhere cmd is not control-like, so the gate fails.
    assert!(!dispatch_notebook_key(&state, content_ref, &key, Platform::Other).is_handled());
}

#[test]
fn macos_cmd_plus_ctrl_together_is_not_control_like() {
    let (state, content_ref) = code_then(CellType::Code);
    let key = KeyPress {
        ctrl: true,
        meta: true,
        ..KeyPress::plain(KeyCode::Enter)
    };
    assert!(!dispatch_notebook_key(&state, content_ref, &key, Platform::MacOs).is_handled());
}

#[test]
fn empty_documents_still_execute_but_cannot_advance() {
    let mut state = AppState::new();
    let content_ref = state.open_notebook(NotebookModel::new());
    let key = KeyPress::shift(KeyCode::Enter);
    let actions =
        dispatch_notebook_key(&state, content_ref, &key, Platform::Other).into_actions();
    // No focused cell: the dispatcher still emits its fixed intent sequence;
    // the store reduces them to no-ops.
    assert!(matches!(
        actions.as_slice(),
        [
            Action::ExecuteFocusedCell { .. },
            Action::FocusNextCell { .. },
            Action::FocusNextCellEditor { .. }
        ]
    ));
}
