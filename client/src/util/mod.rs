//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, downloads,
//! routing) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod files;
pub mod guard;
pub mod lifetime;
pub mod navigation;
pub mod session;
