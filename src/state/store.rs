use crate::models::{CellType, NotebookModel};

use super::app::{AppState, ContentModel, ContentRef};
use super::entities::{KernelRecord, KernelStatus};
use super::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    fn with_notebook<R>(
        &mut self,
        content_ref: ContentRef,
        f: impl FnOnce(&mut NotebookModel) -> R,
    ) -> Option<R> {
        match self.state.contents.get_mut(content_ref) {
            Some(record) => match &mut record.model {
                ContentModel::Notebook(notebook) => Some(f(notebook)),
                ContentModel::Unknown => None,
            },
            None => None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ExecuteFocusedCell { content_ref } => {
                self.reduce_execute_focused_cell(content_ref)
            }
            Action::FocusCell { id, content_ref } => {
                let changed = self
                    .with_notebook(content_ref, |notebook| notebook.focus_cell(&id))
                    .unwrap_or(false);
                let effects = if changed {
                    vec![Effect::ScrollIntoView {
                        content_ref,
                        cell_id: id,
                    }]
                } else {
                    Vec::new()
                };
                DispatchResult {
                    effects,
                    state_changed: changed,
                }
            }
            Action::FocusCellEditor { id, content_ref } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.focus_cell_editor(&id))
                    .unwrap_or(false),
            },
            Action::UnfocusCellEditor { content_ref } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.unfocus_cell_editor())
                    .unwrap_or(false),
            },
            Action::FocusNextCell {
                id,
                create_cell_if_undefined,
                content_ref,
            } => {
                let outcome = self.with_notebook(content_ref, |notebook| {
                    let (changed, created) =
                        notebook.focus_next_cell(id.as_ref(), create_cell_if_undefined);
                    (changed, created, notebook.cell_focused.clone())
                });
                match outcome {
                    Some((changed, _created, focused)) => {
                        let effects = match (&focused, changed) {
                            (Some(cell_id), true) => vec![Effect::ScrollIntoView {
                                content_ref,
                                cell_id: cell_id.clone(),
                            }],
                            _ => Vec::new(),
                        };
                        DispatchResult {
                            effects,
                            state_changed: changed,
                        }
                    }
                    None => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
            Action::FocusNextCellEditor { id, content_ref } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| {
                        notebook.focus_next_cell_editor(id.as_ref())
                    })
                    .unwrap_or(false),
            },
            Action::FocusPreviousCell { content_ref } => {
                let outcome = self.with_notebook(content_ref, |notebook| {
                    let changed = notebook.focus_previous_cell();
                    (changed, notebook.cell_focused.clone())
                });
                match outcome {
                    Some((true, Some(cell_id))) => DispatchResult {
                        effects: vec![Effect::ScrollIntoView {
                            content_ref,
                            cell_id,
                        }],
                        state_changed: true,
                    },
                    _ => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
            Action::UpdateCellSource {
                id,
                value,
                content_ref,
            } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.set_cell_source(&id, value))
                    .unwrap_or(false),
            },
            Action::MoveCell {
                id,
                to_index,
                content_ref,
            } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.move_cell(&id, to_index))
                    .unwrap_or(false),
            },
            Action::CreateCellAbove {
                id,
                cell_type,
                content_ref,
            } => self.reduce_create_cell(content_ref, Some(id), cell_type, 0),
            Action::CreateCellBelow {
                id,
                cell_type,
                content_ref,
            } => self.reduce_create_cell(content_ref, Some(id), cell_type, 1),
            Action::CreateCellAppend {
                cell_type,
                content_ref,
            } => self.reduce_create_cell(content_ref, None, cell_type, 0),
            Action::DeleteCell { id, content_ref } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.delete_cell(&id))
                    .unwrap_or(false),
            },
            Action::UndoCellDelete { content_ref } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .with_notebook(content_ref, |notebook| notebook.undo_delete().is_some())
                    .unwrap_or(false),
            },
            Action::SetKernelStatus { kernel_ref, status } => {
                let changed = match self.state.entities.kernels.record_mut(kernel_ref) {
                    Some(record) if record.status != status => {
                        record.status = status;
                        true
                    }
                    _ => false,
                };
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::KernelChannelsReady {
                kernel_ref,
                channels,
            } => {
                let changed = match self.state.entities.kernels.record_mut(kernel_ref) {
                    Some(record) => {
                        record.channels = Some(channels);
                        true
                    }
                    None => false,
                };
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::OpenModal { kind } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.entities.modals.open_modal(kind),
            },
            Action::CloseModal => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.entities.modals.close_modal(),
            },
        }
    }

    /// Execution must not mutate focus; the keyboard dispatcher relies on
    /// this being reduced before any focus-change action it emits.
    fn reduce_execute_focused_cell(&mut self, content_ref: ContentRef) -> DispatchResult {
        let request = self
            .with_notebook(content_ref, |notebook| {
                let focused = notebook.cell_focused.clone()?;
                let cell = notebook.cell(&focused)?;
                if cell.cell_type != CellType::Code {
                    return None;
                }
                Some((focused, cell.source.clone()))
            })
            .flatten();
        let Some((cell_id, source)) = request else {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        };

        let existing = self
            .state
            .contents
            .get(content_ref)
            .and_then(|record| record.kernel_ref);
        match existing {
            Some(kernel_ref) => {
                let channels = self
                    .state
                    .entities
                    .kernels
                    .record(kernel_ref)
                    .and_then(|record| record.channels.clone());
                match channels {
                    Some(channels) => DispatchResult {
                        effects: vec![Effect::ExecuteCell {
                            kernel_ref,
                            channels,
                            cell_id,
                            source,
                        }],
                        state_changed: false,
                    },
                    // Kernel still starting: the request is dropped, not queued.
                    None => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
            None => {
                let kernelspec_name = self
                    .state
                    .entities
                    .kernelspecs
                    .by_name
                    .keys()
                    .next()
                    .cloned();
                let record = KernelRecord {
                    status: KernelStatus::Starting,
                    channels: None,
                    kernelspec_name: kernelspec_name.clone(),
                };
                match self.state.attach_kernel(content_ref, record) {
                    Some(kernel_ref) => DispatchResult {
                        effects: vec![Effect::LaunchKernel {
                            content_ref,
                            kernel_ref,
                            kernelspec_name,
                        }],
                        state_changed: true,
                    },
                    None => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
        }
    }

    fn reduce_create_cell(
        &mut self,
        content_ref: ContentRef,
        anchor: Option<crate::models::CellId>,
        cell_type: CellType,
        offset: usize,
    ) -> DispatchResult {
        let created = self
            .with_notebook(content_ref, |notebook| {
                let index = match &anchor {
                    Some(id) => notebook.index_of(id).map(|i| i + offset)?,
                    None => notebook.cell_count(),
                };
                let id = notebook.insert_cell_at(index, cell_type);
                notebook.focus_cell(&id);
                Some(id)
            })
            .flatten();
        match created {
            Some(cell_id) => DispatchResult {
                effects: vec![Effect::ScrollIntoView {
                    content_ref,
                    cell_id,
                }],
                state_changed: true,
            },
            None => DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/store.rs"]
mod tests;
