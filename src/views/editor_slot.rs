//! Editor slot resolution: pick which editor implementation renders a cell's
//! source, and augment it with the cell's derived state.

use compact_str::CompactString;

use crate::models::{CellId, CellType};
use crate::state::{selectors, Action, AppState, Channels, ContentRef, KernelRef, KernelStatus};

/// Style class stamped onto every resolved editor, overriding whatever the
/// candidate carried.
pub const EDITOR_CLASS: &str = "nb-cell-editor";

/// Closed set of editor implementations a cell can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Plain,
    Syntax,
}

impl EditorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorKind::Plain => "plain",
            EditorKind::Syntax => "syntax",
        }
    }
}

/// A candidate child in an editor slot. Mirrors a render-children list:
/// empty slots and bare text are legal and skipped during resolution.
#[derive(Debug, Clone)]
pub enum EditorNode {
    Empty,
    Text(String),
    Element(EditorElement),
}

#[derive(Debug, Clone, Default)]
pub struct EditorElement {
    /// Which concrete editor implementation this candidate is.
    pub name: CompactString,
    /// Editor-type label; candidates without one are skipped, not rejected.
    pub editor_type: Option<EditorKind>,
    pub class_name: Option<CompactString>,
}

impl EditorElement {
    pub fn typed(editor_type: EditorKind) -> Self {
        Self::named(editor_type.as_str(), editor_type)
    }

    pub fn named(name: impl AsRef<str>, editor_type: EditorKind) -> Self {
        Self {
            name: CompactString::new(name.as_ref()),
            editor_type: Some(editor_type),
            class_name: None,
        }
    }

    pub fn untyped(name: impl AsRef<str>) -> Self {
        Self {
            name: CompactString::new(name.as_ref()),
            editor_type: None,
            class_name: None,
        }
    }
}

/// Ambient per-cell derived state handed to the chosen editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub id: CellId,
    pub content_ref: ContentRef,
    pub editor_type: EditorKind,
    pub editor_focused: bool,
    pub value: String,
    pub cell_type: CellType,
    pub kernel: Option<KernelRef>,
    pub kernel_status: KernelStatus,
    pub channels: Option<Channels>,
}

impl EditorSession {
    /// Resolve the cell's derived state. An absent or non-notebook model, or
    /// an unknown cell id, yields safe defaults rather than an error.
    pub fn derive(state: &AppState, content_ref: ContentRef, id: &CellId) -> Self {
        let mut session = Self {
            id: id.clone(),
            content_ref,
            editor_type: EditorKind::Syntax,
            editor_focused: false,
            value: String::new(),
            cell_type: CellType::Code,
            kernel: None,
            kernel_status: KernelStatus::NotConnected,
            channels: None,
        };

        let Some(model) = selectors::notebook_model(state, content_ref) else {
            return session;
        };
        let Some(cell) = model.cell(id) else {
            return session;
        };

        session.editor_focused = model.editor_focused.as_ref() == Some(id);
        session.value = cell.source.clone();
        session.cell_type = cell.cell_type;
        if cell.cell_type == CellType::Code {
            session.kernel = state.contents.get(content_ref).and_then(|c| c.kernel_ref);
            if let Some(kernel) = selectors::kernel_by_content_ref(state, content_ref) {
                session.kernel_status = kernel.status;
                session.channels = kernel.channels.clone();
            }
        }
        session
    }

    /// Intent for an edited source value.
    pub fn on_change(&self, value: String) -> Action {
        Action::UpdateCellSource {
            id: self.id.clone(),
            value,
            content_ref: self.content_ref,
        }
    }

    /// Intents for an editor focus change. Focusing the editor also focuses
    /// the owning cell; the editor action must come first.
    pub fn on_focus_changed(&self, focused: bool) -> Vec<Action> {
        if !focused {
            return Vec::new();
        }
        vec![
            Action::FocusCellEditor {
                id: self.id.clone(),
                content_ref: self.content_ref,
            },
            Action::FocusCell {
                id: self.id.clone(),
                content_ref: self.content_ref,
            },
        ]
    }
}

/// The chosen candidate, re-issued with the full session and the fixed
/// editor style class.
#[derive(Debug, Clone)]
pub struct ResolvedEditor {
    pub element: EditorElement,
    pub session: EditorSession,
}

/// First-match selection over the candidate list: skip empty and text nodes,
/// skip unlabeled elements, stop at the first label equal to `desired`.
/// No match is a valid empty state, not an error.
pub fn resolve_editor(
    desired: EditorKind,
    children: &[EditorNode],
    session: EditorSession,
) -> Option<ResolvedEditor> {
    let mut chosen: Option<&EditorElement> = None;
    for child in children {
        if chosen.is_some() {
            break;
        }
        let EditorNode::Element(element) = child else {
            continue;
        };
        let Some(editor_type) = element.editor_type else {
            continue;
        };
        if editor_type == desired {
            chosen = Some(element);
        }
    }

    let chosen = chosen?;
    let mut element = chosen.clone();
    element.class_name = Some(CompactString::new(EDITOR_CLASS));
    Some(ResolvedEditor { element, session })
}

#[cfg(test)]
#[path = "../../tests/unit/views/editor_slot.rs"]
mod tests;
