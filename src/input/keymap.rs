//! Notebook keyboard dispatch: classify a global Enter keypress into the
//! intent list for run-cell / run-and-advance.

use crate::models::CellType;
use crate::state::{selectors, Action, AppState, ContentRef};

use super::event::{KeyCode, KeyPress, Platform};

/// Outcome of offering a key to the dispatcher. `Handled` consumes the event
/// (the host must not apply its default handling); `Ignored` leaves it
/// untouched.
#[derive(Debug)]
pub enum KeyDispatch {
    Ignored,
    Handled(Vec<Action>),
}

impl KeyDispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyDispatch::Handled(_))
    }

    pub fn into_actions(self) -> Vec<Action> {
        match self {
            KeyDispatch::Ignored => Vec::new(),
            KeyDispatch::Handled(actions) => actions,
        }
    }
}

/// On macOS either cmd or ctrl counts as control-like, but not both held at
/// once; elsewhere only ctrl does.
fn control_like(key: &KeyPress, platform: Platform) -> bool {
    match platform {
        Platform::MacOs => (key.meta || key.ctrl) && !(key.meta && key.ctrl),
        Platform::Other => key.ctrl,
    }
}

/// Enter-key protocol for a notebook document.
///
/// Gate: exactly one of {shift, control-like} must be held. On pass the
/// focused cell is executed first; with shift, focus then advances to the
/// successor (appending a code cell at the end), and the successor's editor
/// is focused only when the successor is absent (just created) or a code
/// cell. Markdown/raw successors stay out of editor focus so their rendered
/// preview is not interrupted.
pub fn dispatch_notebook_key(
    state: &AppState,
    content_ref: ContentRef,
    key: &KeyPress,
    platform: Platform,
) -> KeyDispatch {
    if key.code != KeyCode::Enter {
        return KeyDispatch::Ignored;
    }

    let ctrl_like = control_like(key, platform);
    let shift_xor_ctrl = (key.shift || ctrl_like) && !(key.shift && ctrl_like);
    if !shift_xor_ctrl {
        return KeyDispatch::Ignored;
    }

    // Execution must be dispatched strictly before any focus change.
    let mut actions = vec![Action::ExecuteFocusedCell { content_ref }];

    if key.shift {
        let notebook = selectors::notebook_model(state, content_ref);
        let focused = notebook.and_then(selectors::cell_focused).cloned();
        let next_cell = notebook.and_then(|model| {
            let focused = selectors::cell_focused(model)?;
            let order = selectors::cell_order(model);
            let index = order.iter().position(|id| id == focused)?;
            let next_id = order.get(index + 1)?;
            selectors::cell_map(model).get(next_id)
        });

        actions.push(Action::FocusNextCell {
            id: None,
            create_cell_if_undefined: true,
            content_ref,
        });

        let next_is_code = matches!(
            next_cell,
            Some(cell) if cell.cell_type == CellType::Code
        );
        if next_cell.is_none() || next_is_code {
            actions.push(Action::FocusNextCellEditor {
                id: focused,
                content_ref,
            });
        }
    }

    KeyDispatch::Handled(actions)
}

#[cfg(test)]
#[path = "../../tests/unit/input/keymap.rs"]
mod tests;
