//! Per-view liveness flag for async completions.
//!
//! Requests cannot be aborted once sent. A view binds a `ViewLifetime` on
//! mount; the flag flips on cleanup and completions check it before writing
//! view state, so a response that lands after navigation is dropped.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a lifetime that ends when the current reactive owner is cleaned up.
    pub fn bind() -> Self {
        let lifetime = Self::new();
        let ending = lifetime.clone();
        leptos::prelude::on_cleanup(move || ending.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
