// src/catalog/ids.rs

use chrono::Utc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Supplies ids for admin-submitted properties.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// `custom-<unix millis>`, bumped by one whenever the clock hasn't moved
/// past the last id handed out.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_millis(&self, now: i64) -> i64 {
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1)
    }
}

impl IdSource for TimestampIds {
    fn next_id(&self) -> String {
        let millis = self.next_millis(Utc::now().timestamp_millis());
        format!("custom-{millis}")
    }
}

/// Deterministic `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{n}", self.prefix)
    }
}
