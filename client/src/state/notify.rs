//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Views push notices; the `Toasts` component renders them and schedules
//! dismissal. Ids are monotonic so a late timer never removes a newer notice.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// How long a notice of this level stays visible.
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(4),
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    next_id: u64,
    pub items: Vec<Notice>,
}

impl NotificationState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
