//! State aggregate: default-valued records composing the four entity
//! sub-states (hosts, kernels, kernelspecs, modals). Pure data, no behavior.

pub mod hosts;
pub mod kernels;
pub mod kernelspecs;
pub mod modals;

pub use hosts::{HostKind, HostRecord, HostRef, HostsState};
pub use kernels::{Channels, ExecuteRequest, KernelRecord, KernelRef, KernelStatus, KernelsState};
pub use kernelspecs::{KernelspecRecord, KernelspecsState};
pub use modals::{ModalKind, ModalsState};

#[derive(Debug, Default)]
pub struct EntitiesState {
    pub hosts: HostsState,
    pub kernels: KernelsState,
    pub kernelspecs: KernelspecsState,
    pub modals: ModalsState,
}
