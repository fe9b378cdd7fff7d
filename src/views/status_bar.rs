use crate::state::{selectors, AppState, ContentRef, KernelStatus};

/// Read-only projection for the status bar: kernel status, cell count, and
/// the 1-based position of the focused cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarView {
    pub kernel_status: KernelStatus,
    pub cell_count: usize,
    pub focused_position: Option<usize>,
}

impl StatusBarView {
    pub fn project(state: &AppState, content_ref: ContentRef) -> Self {
        let kernel_status = selectors::kernel_by_content_ref(state, content_ref)
            .map(|kernel| kernel.status)
            .unwrap_or_default();

        let (cell_count, focused_position) = match selectors::notebook_model(state, content_ref) {
            Some(model) => {
                let position = model
                    .cell_focused
                    .as_ref()
                    .and_then(|id| model.index_of(id))
                    .map(|index| index + 1);
                (model.cell_count(), position)
            }
            None => (0, None),
        };

        Self {
            kernel_status,
            cell_count,
            focused_position,
        }
    }

    pub fn summary(&self) -> String {
        match self.focused_position {
            Some(position) => format!(
                "kernel: {} | cell {}/{}",
                self.kernel_status.as_str(),
                position,
                self.cell_count
            ),
            None => format!(
                "kernel: {} | {} cells",
                self.kernel_status.as_str(),
                self.cell_count
            ),
        }
    }
}
