//! Terminal runtime (feature "tui").

pub mod runtime;
pub mod terminal;

pub use runtime::App;
pub use terminal::TerminalGuard;
