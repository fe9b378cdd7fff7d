//! Async side of the app: effect handling off the UI thread.

pub mod kernels;

pub use kernels::KernelRuntime;
