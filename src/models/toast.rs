use crate::models::ToastLevel;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    pub created: Instant,
}

/// Short-lived notifications, newest last.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: Duration,
}

impl Toasts {
    const MAX_VISIBLE: usize = 5;

    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    pub fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime = lifetime;
    }

    pub fn push(&mut self, level: ToastLevel, text: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            level,
            text: text.into(),
            created: now,
        });
        if self.items.len() > Self::MAX_VISIBLE {
            self.items.remove(0);
        }
    }

    /// Drops expired toasts and returns what is left.
    pub fn active(&mut self, now: Instant) -> &[Toast] {
        let lifetime = self.lifetime;
        self.items
            .retain(|t| now.saturating_duration_since(t.created) < lifetime);
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
