//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`auth`, `generate`, `import`, `search`, `notify`)
//! so components depend on small focused models. Transitions live on the
//! models themselves and are tested without a DOM.

pub mod auth;
pub mod auth_session;
pub mod generate;
pub mod import;
pub mod notify;
pub mod search;
