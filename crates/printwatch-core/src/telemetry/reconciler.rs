//! Sequence-guarded owner of the telemetry snapshot.
//!
//! Overlapping in-flight requests may complete out of order. The reconciler
//! tags each dispatched tick with a monotonically increasing sequence number
//! and only applies a completion whose sequence number is at least the last
//! applied one, so a slow stale response can never clobber fresher data.

use tracing::debug;

use super::payload::StatusPayload;
use super::snapshot::TelemetrySnapshot;

#[derive(Debug, Default)]
pub struct Reconciler {
    snapshot: TelemetrySnapshot,
    next_seq: u64,
    last_applied: Option<u64>,
    stale_discards: u64,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the sequence number for the next dispatched fetch.
    pub fn begin_tick(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Apply a completed fetch.
    ///
    /// Returns `true` if the payload was merged, `false` if it was discarded
    /// as stale (an earlier dispatch completing after a later one already
    /// applied). Equal sequence numbers re-apply; merge is idempotent.
    pub fn apply(&mut self, seq: u64, payload: &StatusPayload) -> bool {
        if let Some(last) = self.last_applied {
            if seq < last {
                self.stale_discards += 1;
                debug!(
                    event = "core.reconciler.stale_completion_discarded",
                    seq = seq,
                    last_applied = last,
                    stale_discards = self.stale_discards,
                );
                return false;
            }
        }

        self.snapshot = self.snapshot.merge(payload);
        self.last_applied = Some(seq);
        true
    }

    /// Record a failed fetch. The snapshot is left untouched; the display
    /// keeps showing the last good values.
    pub fn record_failure(&mut self, seq: u64) {
        debug!(event = "core.reconciler.tick_failed", seq = seq);
    }

    pub fn snapshot(&self) -> &TelemetrySnapshot {
        &self.snapshot
    }

    pub fn stale_discards(&self) -> u64 {
        self.stale_discards
    }
}
