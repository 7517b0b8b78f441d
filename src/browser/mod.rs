//! Browser Adapters
//!
//! Real implementations of the page traits, wired together in `main`.

mod bootstrap;
mod document;
mod scheduler;

pub use bootstrap::BootstrapWidgets;
pub use document::BrowserDom;
pub use scheduler::BrowserScheduler;
