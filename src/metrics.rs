// Performance metrics module
//
// Provides lightweight metrics tracking for monitoring store and renderer
// activity without locks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Application activity metrics
///
/// Uses atomic operations for thread-safe tracking. Collected over the
/// process lifetime and logged on shutdown for a quick health read.
#[derive(Debug)]
pub struct Metrics {
    /// Number of store updates performed
    pub state_updates: AtomicU64,

    /// Number of state broadcasts delivered to at least one subscriber
    pub state_broadcasts: AtomicU64,

    /// Number of documents rendered (preview or printable)
    pub documents_rendered: AtomicU64,

    /// Number of snapshot writes
    pub snapshots_written: AtomicU64,

    /// Number of resume export files written
    pub exports: AtomicU64,

    /// Number of successful imports
    pub imports: AtomicU64,

    /// Number of rejected import files
    pub import_failures: AtomicU64,

    /// Application start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            state_updates: AtomicU64::new(0),
            state_broadcasts: AtomicU64::new(0),
            documents_rendered: AtomicU64::new(0),
            snapshots_written: AtomicU64::new(0),
            exports: AtomicU64::new(0),
            imports: AtomicU64::new(0),
            import_failures: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_state_broadcast(&self) {
        self.state_broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_document_rendered(&self) {
        self.documents_rendered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_snapshot_written(&self) {
        self.snapshots_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_export(&self) {
        self.exports.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_import(&self) {
        self.imports.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_import_failure(&self) {
        self.import_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Activity Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Store: {} updates, {} broadcasts",
            self.state_updates.load(Ordering::Relaxed),
            self.state_broadcasts.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Rendering: {} documents, storage: {} snapshots, {} exports",
            self.documents_rendered.load(Ordering::Relaxed),
            self.snapshots_written.load(Ordering::Relaxed),
            self.exports.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Imports: {} accepted, {} rejected",
            self.imports.load(Ordering::Relaxed),
            self.import_failures.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
