//! Networking modules for the user-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the request pipeline and 401 handling, `api` names the
//! endpoints, `transport` is the swappable HTTP seam, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;
