//! Backend Command Wrappers
//!
//! Frontend bindings to server endpoints, organized by domain.

mod favorite;

pub use favorite::*;
