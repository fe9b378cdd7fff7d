use slotmap::{new_key_type, SlotMap};

use crate::models::NotebookModel;

use super::entities::{EntitiesState, KernelRecord, KernelRef};

new_key_type! {
    /// Opaque identifier scoping all operations to one open document.
    pub struct ContentRef;
}

/// Document model held by a content record. Selectors must tolerate a
/// non-notebook model and fall back to defaults.
#[derive(Debug)]
pub enum ContentModel {
    Notebook(NotebookModel),
    Unknown,
}

#[derive(Debug)]
pub struct ContentRecord {
    pub model: ContentModel,
    pub kernel_ref: Option<KernelRef>,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub entities: EntitiesState,
    pub contents: SlotMap<ContentRef, ContentRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_notebook(&mut self, model: NotebookModel) -> ContentRef {
        self.contents.insert(ContentRecord {
            model: ContentModel::Notebook(model),
            kernel_ref: None,
        })
    }

    pub fn attach_kernel(&mut self, content_ref: ContentRef, record: KernelRecord) -> Option<KernelRef> {
        let kernel_ref = self.entities.kernels.by_ref.insert(record);
        match self.contents.get_mut(content_ref) {
            Some(content) => {
                if let Some(old) = content.kernel_ref.replace(kernel_ref) {
                    self.entities.kernels.by_ref.remove(old);
                }
                Some(kernel_ref)
            }
            None => {
                self.entities.kernels.by_ref.remove(kernel_ref);
                None
            }
        }
    }
}
