//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard panels while reading shared state from Leptos
//! context providers.

pub mod batch_import;
pub mod generate_users;
pub mod navbar;
pub mod profile_card;
pub mod toasts;
pub mod user_search;
