//! Headless application core (state/action/effect).

pub mod action;
pub mod app;
pub mod effect;
pub mod entities;
pub mod selectors;
pub mod store;

pub use action::Action;
pub use app::{AppState, ContentModel, ContentRecord, ContentRef};
pub use effect::Effect;
pub use entities::{
    Channels, EntitiesState, ExecuteRequest, HostKind, HostRecord, HostRef, HostsState,
    KernelRecord, KernelRef, KernelspecRecord, KernelspecsState, KernelsState, KernelStatus,
    ModalKind, ModalsState,
};
pub use store::{DispatchResult, Store};
