#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    About,
    KernelPicker,
}

/// At most one modal is open at a time.
#[derive(Debug, Default)]
pub struct ModalsState {
    pub open: Option<ModalKind>,
}

impl ModalsState {
    pub fn open_modal(&mut self, kind: ModalKind) -> bool {
        if self.open == Some(kind) {
            return false;
        }
        self.open = Some(kind);
        true
    }

    pub fn close_modal(&mut self) -> bool {
        self.open.take().is_some()
    }
}
