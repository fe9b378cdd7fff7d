use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct HostRef;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Local,
    Jupyter,
}

impl Default for HostKind {
    fn default() -> Self {
        HostKind::Local
    }
}

#[derive(Debug, Clone, Default)]
pub struct HostRecord {
    pub kind: HostKind,
    pub endpoint: Option<CompactString>,
}

#[derive(Debug, Default)]
pub struct HostsState {
    pub by_ref: SlotMap<HostRef, HostRecord>,
}
