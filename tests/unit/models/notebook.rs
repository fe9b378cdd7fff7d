use super::*;

fn model_with(ids: &[&str]) -> NotebookModel {
    NotebookModel::with_cells(
        ids.iter()
            .map(|id| (CellId::new(id), Cell::new(CellType::Code, format!("src {id}")))),
    )
}

#[test]
fn order_and_map_stay_consistent_under_insert_and_delete() {
    let mut model = model_with(&["a", "b"]);
    let created = model.insert_cell_at(1, CellType::Markdown);

    assert_eq!(model.cell_count(), 3);
    assert_eq!(model.index_of(&created), Some(1));
    assert!(model.cell(&created).is_some());

    assert!(model.delete_cell(&created));
    assert_eq!(model.cell_count(), 2);
    assert!(model.cell(&created).is_none());
    assert_eq!(model.index_of(&created), None);
}

#[test]
fn cell_after_walks_the_ordering() {
    let model = model_with(&["a", "b", "c"]);
    assert_eq!(model.cell_after(&CellId::new("a")), Some(&CellId::new("b")));
    assert_eq!(model.cell_after(&CellId::new("c")), None);
    assert_eq!(model.cell_after(&CellId::new("missing")), None);
}

#[test]
fn move_cell_clamps_and_rejects_noops() {
    let mut model = model_with(&["a", "b", "c"]);

    assert!(model.move_cell(&CellId::new("a"), 99));
    assert_eq!(model.index_of(&CellId::new("a")), Some(2));

    assert!(!model.move_cell(&CellId::new("a"), 2));
    assert!(!model.move_cell(&CellId::new("missing"), 0));
}

#[test]
fn delete_moves_focus_to_successor_then_predecessor() {
    let mut model = model_with(&["a", "b", "c"]);
    model.focus_cell(&CellId::new("b"));

    assert!(model.delete_cell(&CellId::new("b")));
    assert_eq!(model.cell_focused, Some(CellId::new("c")));

    model.focus_cell(&CellId::new("c"));
    assert!(model.delete_cell(&CellId::new("c")));
    assert_eq!(model.cell_focused, Some(CellId::new("a")));
}

#[test]
fn undo_restores_the_most_recent_delete_at_its_index() {
    let mut model = model_with(&["a", "b", "c"]);
    assert!(model.delete_cell(&CellId::new("b")));
    assert!(model.has_pending_undo());

    let restored = model.undo_delete().unwrap();
    assert_eq!(restored, CellId::new("b"));
    assert_eq!(model.index_of(&CellId::new("b")), Some(1));
    assert_eq!(model.cell(&CellId::new("b")).unwrap().source, "src b");
    assert!(!model.has_pending_undo());
}

#[test]
fn undo_index_is_clamped_when_the_notebook_shrank() {
    let mut model = model_with(&["a", "b"]);
    assert!(model.delete_cell(&CellId::new("b")));
    assert!(model.delete_cell(&CellId::new("a")));

    // "b" was at index 1 but the notebook is now empty.
    let restored = model.undo_delete().unwrap();
    assert_eq!(restored, CellId::new("b"));
    assert_eq!(model.index_of(&CellId::new("b")), Some(0));
}

#[test]
fn focus_next_cell_appends_code_cell_only_when_asked() {
    let mut model = model_with(&["a"]);
    model.focus_cell(&CellId::new("a"));

    let (changed, created) = model.focus_next_cell(None, false);
    assert!(!changed);
    assert!(created.is_none());
    assert_eq!(model.cell_count(), 1);

    let (changed, created) = model.focus_next_cell(None, true);
    assert!(changed);
    let created = created.unwrap();
    assert_eq!(model.cell_count(), 2);
    assert_eq!(model.cell(&created).unwrap().cell_type, CellType::Code);
    assert_eq!(model.cell_focused, Some(created));
}

#[test]
fn focus_next_cell_prefers_the_hint_over_current_focus() {
    let mut model = model_with(&["a", "b", "c"]);
    model.focus_cell(&CellId::new("c"));

    let (changed, created) = model.focus_next_cell(Some(&CellId::new("a")), true);
    assert!(changed);
    assert!(created.is_none());
    assert_eq!(model.cell_focused, Some(CellId::new("b")));
}

#[test]
fn focus_next_cell_without_focus_or_hint_is_a_noop() {
    let mut model = model_with(&["a"]);
    let (changed, created) = model.focus_next_cell(None, true);
    assert!(!changed);
    assert!(created.is_none());
    assert_eq!(model.cell_count(), 1);
}

#[test]
fn focus_next_cell_editor_skips_when_there_is_no_successor() {
    let mut model = model_with(&["a", "b"]);
    model.focus_cell(&CellId::new("a"));

    assert!(model.focus_next_cell_editor(None));
    assert_eq!(model.editor_focused, Some(CellId::new("b")));

    model.focus_cell(&CellId::new("b"));
    model.editor_focused = None;
    assert!(!model.focus_next_cell_editor(None));
    assert_eq!(model.editor_focused, None);
}

#[test]
fn generated_cell_ids_never_collide_with_existing_ones() {
    let mut model = NotebookModel::with_cells([(
        CellId::new("cell-1"),
        Cell::empty(CellType::Code),
    )]);
    let created = model.append_cell(CellType::Code);
    assert_ne!(created, CellId::new("cell-1"));
    assert_eq!(model.cell_count(), 2);
}
