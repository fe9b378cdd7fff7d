use super::*;

use crate::models::CellId;
use crate::state::AppState;

fn ctx(undo_available: bool) -> DecorateCtx {
    let mut state = AppState::new();
    let content_ref = state.open_notebook(crate::models::NotebookModel::new());
    DecorateCtx {
        content_ref,
        index: 0,
        undo_available,
    }
}

fn bare_frame() -> CellFrame {
    CellFrame::new(CellId::new("a"), CellType::Code, false, None)
}

#[test]
fn standard_pipeline_wraps_in_the_contract_order() {
    let frame = decorate(bare_frame(), &standard_pipeline(), &ctx(false));
    assert_eq!(
        frame.layers,
        ["draggable", "hijack-scroll", "cell-creator", "undoable-delete"]
    );
}

#[test]
fn read_only_pipeline_omits_creation_and_deletion() {
    let frame = decorate(bare_frame(), &read_only_pipeline(), &ctx(false));
    assert_eq!(frame.layers, ["draggable", "hijack-scroll"]);
    assert!(!frame.has_zone(ZoneKind::CreateAbove));
    assert!(!frame.has_zone(ZoneKind::CreateBelow));
    assert!(!frame.has_zone(ZoneKind::Delete));
    assert!(frame.has_zone(ZoneKind::DragHandle));
    assert!(frame.scroll_hijack);
}

#[test]
fn standard_pipeline_contributes_all_affordances() {
    let frame = decorate(bare_frame(), &standard_pipeline(), &ctx(false));
    assert!(frame.has_zone(ZoneKind::DragHandle));
    assert!(frame.has_zone(ZoneKind::CreateAbove));
    assert!(frame.has_zone(ZoneKind::CreateBelow));
    assert!(frame.has_zone(ZoneKind::Delete));
    assert!(frame.scroll_hijack);
}

#[test]
fn undo_zone_appears_only_with_a_pending_stash() {
    let without = decorate(bare_frame(), &standard_pipeline(), &ctx(false));
    assert!(!without.has_zone(ZoneKind::Undo));

    let with = decorate(bare_frame(), &standard_pipeline(), &ctx(true));
    assert!(with.has_zone(ZoneKind::Undo));
}
