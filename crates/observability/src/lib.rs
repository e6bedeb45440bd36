use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    turns_total: AtomicU64,
    ai_classified_total: AtomicU64,
    fallback_classified_total: AtomicU64,
    resolved_total: AtomicU64,
    suggestions_offered_total: AtomicU64,
    translations_total: AtomicU64,
    translation_failures_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub turns_total: u64,
    pub ai_classified_total: u64,
    pub fallback_classified_total: u64,
    pub resolved_total: u64,
    pub suggestions_offered_total: u64,
    pub translations_total: u64,
    pub translation_failures_total: u64,
    pub avg_turn_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_turn(&self) {
        self.turns_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_ai_classified(&self) {
        self.ai_classified_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback_classified(&self) {
        self.fallback_classified_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_resolved(&self) {
        self.resolved_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_suggestions_offered(&self) {
        self.suggestions_offered_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_translation(&self) {
        self.translations_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_translation_failure(&self) {
        self.translation_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let turns = self.turns_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            turns_total: turns,
            ai_classified_total: self.ai_classified_total.load(Ordering::Relaxed),
            fallback_classified_total: self.fallback_classified_total.load(Ordering::Relaxed),
            resolved_total: self.resolved_total.load(Ordering::Relaxed),
            suggestions_offered_total: self.suggestions_offered_total.load(Ordering::Relaxed),
            translations_total: self.translations_total.load(Ordering::Relaxed),
            translation_failures_total: self.translation_failures_total.load(Ordering::Relaxed),
            avg_turn_latency_millis: if turns == 0 {
                0.0
            } else {
                latency as f64 / turns as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,rplus_api=info,rplus_agents=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
