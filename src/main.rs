use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use znote::models::{Cell, CellId, CellType, NotebookModel};
use znote::state::{AppState, Store};
use znote::ui::{App, TerminalGuard};

fn demo_notebook() -> NotebookModel {
    let mut model = NotebookModel::with_cells([
        (
            CellId::new("intro"),
            Cell::new(
                CellType::Markdown,
                "# znote\nShift+Enter runs a cell and advances.\nCtrl+Enter runs in place.",
            ),
        ),
        (
            CellId::new("setup"),
            Cell::new(CellType::Code, "x = 41\nx + 1"),
        ),
        (
            CellId::new("notes"),
            Cell::new(CellType::Raw, "raw scratch space"),
        ),
    ]);
    model.focus_cell(&CellId::new("setup"));
    model
}

fn main() -> io::Result<()> {
    let _logging = znote::logging::init();

    let mut state = AppState::new();
    let content_ref = state.open_notebook(demo_notebook());

    let mut guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(Store::new(state), content_ref)
        .and_then(|mut app| app.run(&mut terminal));

    guard.restore()?;
    result
}
