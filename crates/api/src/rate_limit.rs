use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy)]
struct WindowSlot {
    started: Instant,
    count: usize,
}

/// Fixed-window request limiter keyed by caller IP.
#[derive(Debug, Clone)]
pub struct IpRateLimiter {
    slots: Arc<Mutex<HashMap<String, WindowSlot>>>,
    window: Duration,
    max_requests: usize,
}

impl IpRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            window,
            max_requests,
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut slots = self.slots.lock();

        let slot = slots.entry(key.to_string()).or_insert(WindowSlot {
            started: now,
            count: 0,
        });
        if now.duration_since(slot.started) > self.window {
            slot.started = now;
            slot.count = 0;
        }

        if slot.count >= self.max_requests {
            return false;
        }

        slot.count += 1;
        true
    }
}
