//! Synchronous UI loop: crossterm events in, store dispatch, effect routing,
//! redraw. The notebook's Enter-key listener is mounted for the lifetime of
//! the loop through the listener registry.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::input::{
    dispatch_notebook_key, KeyCode, KeyDispatch, KeyPress, ListenerGuard, ListenerRegistry,
    Platform,
};
use crate::models::{CellId, CellType};
use crate::runtime::KernelRuntime;
use crate::state::{selectors, Action, ContentRef, Effect, Store};
use crate::views::{render, NotebookMode, NotebookView};

pub struct App {
    store: Store,
    registry: ListenerRegistry,
    content_ref: ContentRef,
    mode: NotebookMode,
    kernel_runtime: KernelRuntime,
    first_cell: usize,
    viewport_rows: u16,
    should_quit: bool,
    _notebook_keys: ListenerGuard,
}

impl App {
    pub fn new(store: Store, content_ref: ContentRef) -> io::Result<Self> {
        let platform = Platform::current();
        let registry = ListenerRegistry::new();
        let notebook_keys = registry.mount(Box::new(move |state, key| {
            dispatch_notebook_key(state, content_ref, key, platform)
        }));

        Ok(Self {
            store,
            registry,
            content_ref,
            mode: NotebookMode::Editable,
            kernel_runtime: KernelRuntime::new()?,
            first_cell: 0,
            viewport_rows: 24,
            should_quit: false,
            _notebook_keys: notebook_keys,
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            for action in self.kernel_runtime.drain_actions() {
                self.apply(action);
            }

            let view =
                NotebookView::project(self.store.state(), self.content_ref, self.mode);
            self.viewport_rows = terminal.size()?.height.saturating_sub(1);
            self.first_cell = self.first_cell.min(view.cells.len().saturating_sub(1));
            terminal.draw(|f| render::paint_notebook(f, &view, self.first_cell))?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(event) if event.kind != KeyEventKind::Release => {
                        self.on_key(KeyPress::from(event));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: KeyPress) {
        match self.registry.dispatch(self.store.state(), &key) {
            KeyDispatch::Handled(actions) => {
                for action in actions {
                    self.apply(action);
                }
            }
            KeyDispatch::Ignored => self.on_command_key(key),
        }
    }

    fn focused_cell(&self) -> Option<CellId> {
        selectors::notebook_model(self.store.state(), self.content_ref)
            .and_then(|model| model.cell_focused.clone())
    }

    fn editor_focused_cell(&self) -> Option<(CellId, String)> {
        let model = selectors::notebook_model(self.store.state(), self.content_ref)?;
        let id = model.editor_focused.clone()?;
        let cell = model.cell(&id)?;
        Some((id, cell.source.clone()))
    }

    /// Keys the notebook listener left untouched: cell editing when an
    /// editor is focused, command-mode navigation otherwise.
    fn on_command_key(&mut self, key: KeyPress) {
        let content_ref = self.content_ref;

        if let Some((id, source)) = self.editor_focused_cell() {
            match key.code {
                KeyCode::Esc => self.apply(Action::UnfocusCellEditor { content_ref }),
                KeyCode::Char(ch) if !key.ctrl && !key.meta && !key.alt => {
                    let mut value = source;
                    value.push(ch);
                    self.apply(Action::UpdateCellSource {
                        id,
                        value,
                        content_ref,
                    });
                }
                KeyCode::Enter => {
                    let mut value = source;
                    value.push('\n');
                    self.apply(Action::UpdateCellSource {
                        id,
                        value,
                        content_ref,
                    });
                }
                KeyCode::Backspace => {
                    let mut value = source;
                    value.pop();
                    self.apply(Action::UpdateCellSource {
                        id,
                        value,
                        content_ref,
                    });
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.apply(Action::FocusPreviousCell { content_ref }),
            KeyCode::Down => self.apply(Action::FocusNextCell {
                id: None,
                create_cell_if_undefined: false,
                content_ref,
            }),
            KeyCode::Enter => {
                if let Some(id) = self.focused_cell() {
                    // Editor focus first, then cell focus (dispatch order
                    // keeps the focus invariant).
                    self.apply(Action::FocusCellEditor {
                        id: id.clone(),
                        content_ref,
                    });
                    self.apply(Action::FocusCell { id, content_ref });
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.focused_cell() {
                    self.apply(Action::CreateCellAbove {
                        id,
                        cell_type: CellType::Code,
                        content_ref,
                    });
                }
            }
            KeyCode::Char('b') => {
                if let Some(id) = self.focused_cell() {
                    self.apply(Action::CreateCellBelow {
                        id,
                        cell_type: CellType::Code,
                        content_ref,
                    });
                }
            }
            KeyCode::Char('d') => {
                if self.mode == NotebookMode::Editable {
                    if let Some(id) = self.focused_cell() {
                        self.apply(Action::DeleteCell { id, content_ref });
                    }
                }
            }
            KeyCode::Char('u') => {
                if self.mode == NotebookMode::Editable {
                    self.apply(Action::UndoCellDelete { content_ref });
                }
            }
            KeyCode::Char('v') => {
                self.mode = match self.mode {
                    NotebookMode::Editable => NotebookMode::ReadOnly,
                    NotebookMode::ReadOnly => NotebookMode::Editable,
                };
            }
            _ => {}
        }
    }

    fn apply(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            match effect {
                Effect::ScrollIntoView { cell_id, .. } => self.scroll_into_view(&cell_id),
                other => self.kernel_runtime.handle_effect(other),
            }
        }
    }

    /// Keep the focused cell inside the viewport, using projected cell
    /// heights.
    fn scroll_into_view(&mut self, cell_id: &CellId) {
        let view = NotebookView::project(self.store.state(), self.content_ref, self.mode);
        let Some(target) = view.cells.iter().position(|frame| &frame.id == cell_id) else {
            return;
        };
        if !view.cells[target].scroll_hijack {
            return;
        }
        if target < self.first_cell {
            self.first_cell = target;
            return;
        }

        // Scroll down until the target's bottom edge fits.
        while self.first_cell < target {
            let visible: u16 = view.cells[self.first_cell..=target]
                .iter()
                .map(render::cell_height)
                .sum();
            if visible <= self.viewport_rows {
                break;
            }
            self.first_cell += 1;
        }
    }
}
