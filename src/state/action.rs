use crate::models::{CellId, CellType};

use super::app::ContentRef;
use super::entities::{Channels, KernelRef, KernelStatus, ModalKind};

/// Intents dispatched into the store. Fire-and-forget: callers never observe
/// a return value beyond `DispatchResult`.
#[derive(Debug, Clone)]
pub enum Action {
    /// Execute the currently focused cell of a document.
    ExecuteFocusedCell {
        content_ref: ContentRef,
    },
    FocusCell {
        id: CellId,
        content_ref: ContentRef,
    },
    FocusCellEditor {
        id: CellId,
        content_ref: ContentRef,
    },
    UnfocusCellEditor {
        content_ref: ContentRef,
    },
    /// Focus the cell after `id` (or after the focused cell when `id` is
    /// `None`), appending a new code cell at the end when asked to.
    FocusNextCell {
        id: Option<CellId>,
        create_cell_if_undefined: bool,
        content_ref: ContentRef,
    },
    FocusNextCellEditor {
        id: Option<CellId>,
        content_ref: ContentRef,
    },
    FocusPreviousCell {
        content_ref: ContentRef,
    },
    UpdateCellSource {
        id: CellId,
        value: String,
        content_ref: ContentRef,
    },
    MoveCell {
        id: CellId,
        to_index: usize,
        content_ref: ContentRef,
    },
    CreateCellAbove {
        id: CellId,
        cell_type: CellType,
        content_ref: ContentRef,
    },
    CreateCellBelow {
        id: CellId,
        cell_type: CellType,
        content_ref: ContentRef,
    },
    CreateCellAppend {
        cell_type: CellType,
        content_ref: ContentRef,
    },
    DeleteCell {
        id: CellId,
        content_ref: ContentRef,
    },
    UndoCellDelete {
        content_ref: ContentRef,
    },
    /// Kernel session feedback, emitted by the effect runtime.
    SetKernelStatus {
        kernel_ref: KernelRef,
        status: KernelStatus,
    },
    KernelChannelsReady {
        kernel_ref: KernelRef,
        channels: Channels,
    },
    OpenModal {
        kind: ModalKind,
    },
    CloseModal,
}
