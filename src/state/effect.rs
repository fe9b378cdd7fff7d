use compact_str::CompactString;

use crate::models::CellId;

use super::app::ContentRef;
use super::entities::{Channels, KernelRef};

/// Side effects requested by reducers, serviced outside the store.
#[derive(Debug, Clone)]
pub enum Effect {
    ExecuteCell {
        kernel_ref: KernelRef,
        channels: Channels,
        cell_id: CellId,
        source: String,
    },
    LaunchKernel {
        content_ref: ContentRef,
        kernel_ref: KernelRef,
        kernelspec_name: Option<CompactString>,
    },
    ScrollIntoView {
        content_ref: ContentRef,
        cell_id: CellId,
    },
}
