use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};
use tokio::sync::mpsc::UnboundedSender;

use crate::models::CellId;

new_key_type! {
    /// Opaque handle to one kernel record.
    pub struct KernelRef;
}

/// Derived, per-content kernel status as shown to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelStatus {
    NotConnected,
    Starting,
    Idle,
    Busy,
}

impl KernelStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            KernelStatus::NotConnected => "not connected",
            KernelStatus::Starting => "starting",
            KernelStatus::Idle => "idle",
            KernelStatus::Busy => "busy",
        }
    }

    pub fn is_connected(self) -> bool {
        !matches!(self, KernelStatus::NotConnected)
    }
}

impl Default for KernelStatus {
    fn default() -> Self {
        KernelStatus::NotConnected
    }
}

/// Execution request sent over a kernel channel.
#[derive(Debug, Clone)]
pub struct ExecuteRequest {
    pub cell_id: CellId,
    pub source: String,
}

/// Opaque communication handle owned by the kernel session. The view layer
/// carries it around but never inspects it.
#[derive(Debug, Clone)]
pub struct Channels {
    pub execute_tx: UnboundedSender<ExecuteRequest>,
}

impl Channels {
    pub fn send(&self, request: ExecuteRequest) -> bool {
        self.execute_tx.send(request).is_ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct KernelRecord {
    pub status: KernelStatus,
    pub channels: Option<Channels>,
    pub kernelspec_name: Option<CompactString>,
}

#[derive(Debug, Default)]
pub struct KernelsState {
    pub by_ref: SlotMap<KernelRef, KernelRecord>,
}

impl KernelsState {
    pub fn record(&self, kernel_ref: KernelRef) -> Option<&KernelRecord> {
        self.by_ref.get(kernel_ref)
    }

    pub fn record_mut(&mut self, kernel_ref: KernelRef) -> Option<&mut KernelRecord> {
        self.by_ref.get_mut(kernel_ref)
    }
}
