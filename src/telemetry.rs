use std::sync::atomic::{AtomicU64, Ordering};

/// Stream activity counters.
///
/// Thread-safe atomics, recorded by [`crate::client::RagClient`] when
/// telemetry is enabled in configuration. An explicit instance owned by the
/// client, never process-global state.
#[derive(Debug, Default)]
pub struct StreamTelemetry {
    /// Turns dispatched to the backend
    pub turns_started: AtomicU64,

    /// Turns that streamed to completion
    pub turns_completed: AtomicU64,

    /// Decoded text fragments fed to the demux
    pub fragments_processed: AtomicU64,

    /// Raw bytes received from the transport
    pub bytes_received: AtomicU64,

    /// Metadata payloads discarded as malformed
    pub metadata_parse_failures: AtomicU64,
}

impl StreamTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_turn_started(&self) {
        self.turns_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_turn_completed(&self) {
        self.turns_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fragment(&self) {
        self.fragments_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bytes(&self, count: usize) {
        self.bytes_received.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_metadata_parse_failure(&self) {
        self.metadata_parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current counters
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            turns_started: self.turns_started.load(Ordering::Relaxed),
            turns_completed: self.turns_completed.load(Ordering::Relaxed),
            fragments_processed: self.fragments_processed.load(Ordering::Relaxed),
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            metadata_parse_failures: self.metadata_parse_failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters (useful for testing)
    pub fn reset(&self) {
        self.turns_started.store(0, Ordering::Relaxed);
        self.turns_completed.store(0, Ordering::Relaxed);
        self.fragments_processed.store(0, Ordering::Relaxed);
        self.bytes_received.store(0, Ordering::Relaxed);
        self.metadata_parse_failures.store(0, Ordering::Relaxed);
    }
}

/// Immutable snapshot of counters at a point in time
#[derive(Debug, Clone)]
pub struct TelemetrySnapshot {
    pub turns_started: u64,
    pub turns_completed: u64,
    pub fragments_processed: u64,
    pub bytes_received: u64,
    pub metadata_parse_failures: u64,
}

impl std::fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stream telemetry: {}/{} turns completed, {} fragments, {} bytes, {} metadata failures",
            self.turns_completed,
            self.turns_started,
            self.fragments_processed,
            self.bytes_received,
            self.metadata_parse_failures
        )
    }
}
