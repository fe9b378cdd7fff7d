//! Cell decoration pipeline: an explicit, ordered list of middleware-style
//! wrappers applied around every rendered cell. The order is a correctness
//! contract: drag must claim pointer input before scroll-hijack does, and
//! the creator must wrap deletion so that deleting the last cell can still
//! recreate an empty one.

use crate::models::{CellId, CellType};
use crate::state::ContentRef;

use super::editor_slot::ResolvedEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    DragHandle,
    CreateAbove,
    CreateBelow,
    Delete,
    Undo,
}

/// Interaction affordance contributed by a decorator. The UI runtime maps a
/// gesture on a zone to the corresponding store action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitZone {
    pub kind: ZoneKind,
}

/// One cell, decorated for rendering.
#[derive(Debug)]
pub struct CellFrame {
    pub id: CellId,
    pub cell_type: CellType,
    pub focused: bool,
    pub editor: Option<ResolvedEditor>,
    /// Wrapper layers, outermost first.
    pub layers: Vec<&'static str>,
    pub scroll_hijack: bool,
    pub hit_zones: Vec<HitZone>,
}

impl CellFrame {
    pub fn new(id: CellId, cell_type: CellType, focused: bool, editor: Option<ResolvedEditor>) -> Self {
        Self {
            id,
            cell_type,
            focused,
            editor,
            layers: Vec::new(),
            scroll_hijack: false,
            hit_zones: Vec::new(),
        }
    }

    pub fn has_zone(&self, kind: ZoneKind) -> bool {
        self.hit_zones.iter().any(|zone| zone.kind == kind)
    }
}

pub struct DecorateCtx {
    pub content_ref: ContentRef,
    pub index: usize,
    /// Whether the notebook has a stashed deleted cell to restore.
    pub undo_available: bool,
}

pub trait CellDecorator {
    fn name(&self) -> &'static str;
    fn decorate(&self, frame: CellFrame, ctx: &DecorateCtx) -> CellFrame;
}

struct Draggable;

impl CellDecorator for Draggable {
    fn name(&self) -> &'static str {
        "draggable"
    }

    fn decorate(&self, mut frame: CellFrame, _ctx: &DecorateCtx) -> CellFrame {
        frame.layers.insert(0, self.name());
        frame.hit_zones.push(HitZone {
            kind: ZoneKind::DragHandle,
        });
        frame
    }
}

struct HijackScroll;

impl CellDecorator for HijackScroll {
    fn name(&self) -> &'static str {
        "hijack-scroll"
    }

    fn decorate(&self, mut frame: CellFrame, _ctx: &DecorateCtx) -> CellFrame {
        frame.layers.insert(0, self.name());
        frame.scroll_hijack = true;
        frame
    }
}

struct CellCreator;

impl CellDecorator for CellCreator {
    fn name(&self) -> &'static str {
        "cell-creator"
    }

    fn decorate(&self, mut frame: CellFrame, _ctx: &DecorateCtx) -> CellFrame {
        frame.layers.insert(0, self.name());
        frame.hit_zones.push(HitZone {
            kind: ZoneKind::CreateAbove,
        });
        frame.hit_zones.push(HitZone {
            kind: ZoneKind::CreateBelow,
        });
        frame
    }
}

struct UndoableDelete;

impl CellDecorator for UndoableDelete {
    fn name(&self) -> &'static str {
        "undoable-delete"
    }

    fn decorate(&self, mut frame: CellFrame, ctx: &DecorateCtx) -> CellFrame {
        frame.layers.insert(0, self.name());
        frame.hit_zones.push(HitZone {
            kind: ZoneKind::Delete,
        });
        if ctx.undo_available {
            frame.hit_zones.push(HitZone {
                kind: ZoneKind::Undo,
            });
        }
        frame
    }
}

/// Full pipeline, outermost first: drag, scroll-hijack, creator, undoable
/// delete.
pub fn standard_pipeline() -> Vec<Box<dyn CellDecorator>> {
    vec![
        Box::new(Draggable),
        Box::new(HijackScroll),
        Box::new(CellCreator),
        Box::new(UndoableDelete),
    ]
}

/// Read-only composition: no creation, no deletion.
pub fn read_only_pipeline() -> Vec<Box<dyn CellDecorator>> {
    vec![Box::new(Draggable), Box::new(HijackScroll)]
}

/// Apply a pipeline so that the first listed decorator ends up outermost.
pub fn decorate(
    mut frame: CellFrame,
    pipeline: &[Box<dyn CellDecorator>],
    ctx: &DecorateCtx,
) -> CellFrame {
    for decorator in pipeline.iter().rev() {
        frame = decorator.decorate(frame, ctx);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/views/decorators.rs"]
mod tests;
