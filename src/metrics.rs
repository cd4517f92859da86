//! Language observability: counters for lookups and language changes.
//!
//! Tracks how often dictionary lookups succeed, how often they fall back to
//! the raw key (a missing translation), and how often the interface language
//! is applied or toggled. Useful for spotting dictionary gaps in the field
//! without turning them into failures.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global language metrics singleton.
pub struct LanguageMetrics {
    /// Number of lookups that found a translation
    lookup_hits: AtomicUsize,

    /// Number of lookups that fell back to the raw key
    lookup_fallbacks: AtomicUsize,

    /// Number of times a language was applied to the page
    applies: AtomicUsize,

    /// Number of user-triggered language toggles
    toggles: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LanguageMetrics> = OnceLock::new();

impl LanguageMetrics {
    /// Get the global language metrics instance.
    pub fn global() -> &'static LanguageMetrics {
        METRICS.get_or_init(|| LanguageMetrics {
            lookup_hits: AtomicUsize::new(0),
            lookup_fallbacks: AtomicUsize::new(0),
            applies: AtomicUsize::new(0),
            toggles: AtomicUsize::new(0),
        })
    }

    /// Record a lookup that found a translation.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key.
    pub fn record_lookup_fallback(&self) {
        self.lookup_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a full apply pass over the page.
    pub fn record_apply(&self) {
        self.applies.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a user-triggered toggle.
    pub fn record_toggle(&self) {
        self.toggles.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup hit count.
    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Get the current lookup fallback count.
    pub fn lookup_fallbacks(&self) -> usize {
        self.lookup_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current apply count.
    pub fn applies(&self) -> usize {
        self.applies.load(Ordering::Relaxed)
    }

    /// Get the current toggle count.
    pub fn toggles(&self) -> usize {
        self.toggles.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let fallbacks = self.lookup_fallbacks();
        let total_lookups = hits + fallbacks;
        let fallback_rate = if total_lookups > 0 {
            (fallbacks as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_fallbacks: fallbacks,
            fallback_rate,
            applies: self.applies(),
            toggles: self.toggles(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_fallbacks.store(0, Ordering::Relaxed);
        self.applies.store(0, Ordering::Relaxed);
        self.toggles.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current language statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups that found a translation
    pub lookup_hits: usize,

    /// Number of lookups that fell back to the raw key
    pub lookup_fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Number of apply passes over the page
    pub applies: usize,

    /// Number of user-triggered toggles
    pub toggles: usize,
}
