use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashMap;

/// Opaque cell identifier. Owned by the document model; everything else
/// refers to cells by id only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(CompactString);

impl CellId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(CompactString::new(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

impl CellType {
    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Code => "code",
            CellType::Markdown => "markdown",
            CellType::Raw => "raw",
        }
    }
}

impl Default for CellType {
    fn default() -> Self {
        CellType::Code
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub cell_type: CellType,
    pub source: String,
}

impl Cell {
    pub fn new(cell_type: CellType, source: impl Into<String>) -> Self {
        Self {
            cell_type,
            source: source.into(),
        }
    }

    pub fn empty(cell_type: CellType) -> Self {
        Self::new(cell_type, "")
    }
}

/// Undo stash entry for a deleted cell.
#[derive(Debug, Clone)]
pub struct DeletedCell {
    pub id: CellId,
    pub cell: Cell,
    pub index: usize,
}

/// One open notebook document.
///
/// Invariant: `cell_order` and `cell_map` hold exactly the same set of ids.
/// At most one cell is focused, and independently at most one in-cell editor
/// is focused; editor focus implying cell focus is enforced by dispatch order
/// in the view layer, not here.
#[derive(Debug, Clone, Default)]
pub struct NotebookModel {
    cell_order: Vec<CellId>,
    cell_map: FxHashMap<CellId, Cell>,
    pub cell_focused: Option<CellId>,
    pub editor_focused: Option<CellId>,
    pending_undo: Vec<DeletedCell>,
    next_cell_seq: u64,
}

impl NotebookModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (CellId, Cell)>,
    {
        let mut model = Self::new();
        for (id, cell) in cells {
            model.cell_map.insert(id.clone(), cell);
            model.cell_order.push(id);
        }
        model
    }

    pub fn cell_order(&self) -> &[CellId] {
        &self.cell_order
    }

    pub fn cell_map(&self) -> &FxHashMap<CellId, Cell> {
        &self.cell_map
    }

    pub fn cell(&self, id: &CellId) -> Option<&Cell> {
        self.cell_map.get(id)
    }

    pub fn cell_count(&self) -> usize {
        self.cell_order.len()
    }

    pub fn index_of(&self, id: &CellId) -> Option<usize> {
        self.cell_order.iter().position(|c| c == id)
    }

    /// Id of the cell immediately after `id` in the ordering.
    pub fn cell_after(&self, id: &CellId) -> Option<&CellId> {
        let index = self.index_of(id)?;
        self.cell_order.get(index + 1)
    }

    pub fn pending_undo(&self) -> &[DeletedCell] {
        &self.pending_undo
    }

    pub fn has_pending_undo(&self) -> bool {
        !self.pending_undo.is_empty()
    }

    fn next_cell_id(&mut self) -> CellId {
        loop {
            self.next_cell_seq += 1;
            let id = CellId(format_compact!("cell-{}", self.next_cell_seq));
            if !self.cell_map.contains_key(&id) {
                return id;
            }
        }
    }

    /// Insert a new empty cell at `index` (clamped to the end).
    pub fn insert_cell_at(&mut self, index: usize, cell_type: CellType) -> CellId {
        let id = self.next_cell_id();
        let index = index.min(self.cell_order.len());
        self.cell_map.insert(id.clone(), Cell::empty(cell_type));
        self.cell_order.insert(index, id.clone());
        id
    }

    pub fn append_cell(&mut self, cell_type: CellType) -> CellId {
        self.insert_cell_at(self.cell_order.len(), cell_type)
    }

    pub fn set_cell_source(&mut self, id: &CellId, source: String) -> bool {
        match self.cell_map.get_mut(id) {
            Some(cell) if cell.source != source => {
                cell.source = source;
                true
            }
            _ => false,
        }
    }

    /// Move a cell to `to_index` (clamped). Returns false when the cell does
    /// not exist or the move is a no-op.
    pub fn move_cell(&mut self, id: &CellId, to_index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let to_index = to_index.min(self.cell_order.len() - 1);
        if from == to_index {
            return false;
        }
        let id = self.cell_order.remove(from);
        self.cell_order.insert(to_index, id);
        true
    }

    /// Remove a cell and stash it for undo. Focus on the deleted cell moves
    /// to its successor (or predecessor at the end).
    pub fn delete_cell(&mut self, id: &CellId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let removed_id = self.cell_order.remove(index);
        let Some(cell) = self.cell_map.remove(&removed_id) else {
            // Map/order drift would be a bug; restore the order entry.
            self.cell_order.insert(index, removed_id);
            return false;
        };

        if self.cell_focused.as_ref() == Some(id) {
            self.cell_focused = self
                .cell_order
                .get(index)
                .or_else(|| self.cell_order.get(index.wrapping_sub(1)))
                .cloned();
        }
        if self.editor_focused.as_ref() == Some(id) {
            self.editor_focused = None;
        }

        self.pending_undo.push(DeletedCell {
            id: removed_id,
            cell,
            index,
        });
        true
    }

    /// Restore the most recently deleted cell at its original index
    /// (clamped to the current length).
    pub fn undo_delete(&mut self) -> Option<CellId> {
        let entry = self.pending_undo.pop()?;
        let index = entry.index.min(self.cell_order.len());
        self.cell_map.insert(entry.id.clone(), entry.cell);
        self.cell_order.insert(index, entry.id.clone());
        Some(entry.id)
    }

    pub fn focus_cell(&mut self, id: &CellId) -> bool {
        if !self.cell_map.contains_key(id) {
            return false;
        }
        if self.cell_focused.as_ref() == Some(id) {
            return false;
        }
        self.cell_focused = Some(id.clone());
        true
    }

    pub fn focus_cell_editor(&mut self, id: &CellId) -> bool {
        if !self.cell_map.contains_key(id) {
            return false;
        }
        if self.editor_focused.as_ref() == Some(id) {
            return false;
        }
        self.editor_focused = Some(id.clone());
        true
    }

    pub fn unfocus_cell_editor(&mut self) -> bool {
        self.editor_focused.take().is_some()
    }

    /// Focus the cell after `hint` (or after the currently focused cell).
    /// With `create_if_undefined`, an empty code cell is appended when the
    /// focused cell is the last one. Returns the newly created id, if any.
    pub fn focus_next_cell(
        &mut self,
        hint: Option<&CellId>,
        create_if_undefined: bool,
    ) -> (bool, Option<CellId>) {
        let Some(current) = hint.or(self.cell_focused.as_ref()).cloned() else {
            return (false, None);
        };
        match self.cell_after(&current).cloned() {
            Some(next) => (self.focus_cell(&next), None),
            None if create_if_undefined => {
                let id = self.append_cell(CellType::Code);
                self.focus_cell(&id);
                (true, Some(id))
            }
            None => (false, None),
        }
    }

    /// Focus the editor of the cell after `hint` (or after the currently
    /// focused cell). No-op when there is no successor.
    pub fn focus_next_cell_editor(&mut self, hint: Option<&CellId>) -> bool {
        let Some(current) = hint.or(self.cell_focused.as_ref()).cloned() else {
            return false;
        };
        match self.cell_after(&current).cloned() {
            Some(next) => self.focus_cell_editor(&next),
            None => false,
        }
    }

    /// Focus the cell before the currently focused one.
    pub fn focus_previous_cell(&mut self) -> bool {
        let Some(current) = self.cell_focused.clone() else {
            return false;
        };
        let Some(index) = self.index_of(&current) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        let prev = self.cell_order[index - 1].clone();
        self.focus_cell(&prev)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/notebook.rs"]
mod tests;
