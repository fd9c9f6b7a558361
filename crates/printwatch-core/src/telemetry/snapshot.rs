//! The durable, cumulative view of printer state.

use serde::Serialize;

use super::payload::StatusPayload;
use super::types::{PrinterState, Temps};

/// Placeholder shown for text fields that have never been reported.
pub const PLACEHOLDER: &str = "—";

/// Elapsed time shown before the first successful fetch.
pub const ELAPSED_ZERO: &str = "00:00:00";

/// Cumulative printer state as known by the client.
///
/// Created once with defaults, updated only through [`TelemetrySnapshot::merge`],
/// and always renderable: every field carries a displayable value even before
/// the first successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub temps: Temps,
    pub progress: f64,
    pub job: String,
    pub elapsed: String,
    pub stamp: String,
    pub state: PrinterState,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            temps: Temps::default(),
            progress: 0.0,
            job: PLACEHOLDER.to_string(),
            elapsed: ELAPSED_ZERO.to_string(),
            stamp: PLACEHOLDER.to_string(),
            state: PrinterState::Unknown,
        }
    }
}

impl TelemetrySnapshot {
    /// Merge a partial payload into this snapshot, returning the result.
    ///
    /// Only fields present in the payload replace the corresponding snapshot
    /// field; absent fields keep their previous value. `temps` is merged
    /// key-by-key under the same rule, never replaced wholesale. Applying the
    /// same payload twice is a no-op the second time.
    pub fn merge(&self, payload: &StatusPayload) -> TelemetrySnapshot {
        let temps_patch = payload.temps.unwrap_or_default();

        TelemetrySnapshot {
            temps: Temps {
                nozzle_actual: temps_patch.nozzle_actual.or(self.temps.nozzle_actual),
                nozzle_target: temps_patch.nozzle_target.or(self.temps.nozzle_target),
                bed_actual: temps_patch.bed_actual.or(self.temps.bed_actual),
                bed_target: temps_patch.bed_target.or(self.temps.bed_target),
            },
            progress: payload.progress.unwrap_or(self.progress),
            job: payload.job.clone().unwrap_or_else(|| self.job.clone()),
            elapsed: payload
                .elapsed
                .clone()
                .unwrap_or_else(|| self.elapsed.clone()),
            stamp: payload.stamp.clone().unwrap_or_else(|| self.stamp.clone()),
            state: payload
                .state
                .as_deref()
                .map(PrinterState::parse)
                .unwrap_or_else(|| self.state.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::payload::TempsPatch;

    fn populated_snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            temps: Temps {
                nozzle_actual: Some(200.0),
                nozzle_target: Some(210.0),
                bed_actual: Some(60.0),
                bed_target: Some(60.0),
            },
            progress: 10.0,
            job: "X".to_string(),
            elapsed: "00:01:00".to_string(),
            stamp: "a".to_string(),
            state: PrinterState::Printing,
        }
    }

    #[test]
    fn test_default_snapshot_is_renderable() {
        let snapshot = TelemetrySnapshot::default();
        assert_eq!(snapshot.progress, 0.0);
        assert_eq!(snapshot.job, "—");
        assert_eq!(snapshot.elapsed, "00:00:00");
        assert_eq!(snapshot.stamp, "—");
        assert_eq!(snapshot.state, PrinterState::Unknown);
        assert!(snapshot.temps.nozzle_actual.is_none());
    }

    #[test]
    fn test_empty_payload_is_a_no_op() {
        let snapshot = populated_snapshot();
        assert_eq!(snapshot.merge(&StatusPayload::default()), snapshot);
    }

    #[test]
    fn test_present_fields_overwrite() {
        let snapshot = populated_snapshot();
        let payload = StatusPayload {
            progress: Some(42.0),
            job: Some("Y".to_string()),
            elapsed: Some("00:05:00".to_string()),
            stamp: Some("b".to_string()),
            state: Some("PAUSED".to_string()),
            temps: None,
        };

        let merged = snapshot.merge(&payload);
        assert_eq!(merged.progress, 42.0);
        assert_eq!(merged.job, "Y");
        assert_eq!(merged.elapsed, "00:05:00");
        assert_eq!(merged.stamp, "b");
        assert_eq!(merged.state, PrinterState::Paused);
        // Absent temps object leaves all readings untouched.
        assert_eq!(merged.temps, snapshot.temps);
    }

    #[test]
    fn test_temps_merge_is_key_wise() {
        let snapshot = TelemetrySnapshot {
            temps: Temps {
                nozzle_actual: Some(200.0),
                bed_actual: Some(60.0),
                ..Temps::default()
            },
            ..TelemetrySnapshot::default()
        };
        let payload = StatusPayload {
            temps: Some(TempsPatch {
                nozzle_actual: Some(210.0),
                ..TempsPatch::default()
            }),
            ..StatusPayload::default()
        };

        let merged = snapshot.merge(&payload);
        assert_eq!(merged.temps.nozzle_actual, Some(210.0));
        assert_eq!(merged.temps.bed_actual, Some(60.0));
        assert!(merged.temps.nozzle_target.is_none());
    }

    #[test]
    fn test_single_temp_update_leaves_everything_else() {
        // Scenario from the observed endpoint: {"temps":{"T":205}}.
        let snapshot = populated_snapshot();
        let payload: StatusPayload = serde_json::from_str(r#"{"temps":{"T":205}}"#).unwrap();

        let merged = snapshot.merge(&payload);
        assert_eq!(merged.temps.nozzle_actual, Some(205.0));
        assert_eq!(merged.temps.nozzle_target, Some(210.0));
        assert_eq!(merged.temps.bed_actual, Some(60.0));
        assert_eq!(merged.temps.bed_target, Some(60.0));
        assert_eq!(merged.progress, 10.0);
        assert_eq!(merged.job, "X");
        assert_eq!(merged.elapsed, "00:01:00");
        assert_eq!(merged.stamp, "a");
        assert_eq!(merged.state, PrinterState::Printing);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let snapshot = populated_snapshot();
        let payload = StatusPayload {
            temps: Some(TempsPatch {
                nozzle_actual: Some(205.0),
                ..TempsPatch::default()
            }),
            progress: Some(11.0),
            state: Some("PAUSED".to_string()),
            ..StatusPayload::default()
        };

        let once = snapshot.merge(&payload);
        let twice = once.merge(&payload);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unrecognized_state_is_kept_verbatim() {
        let snapshot = TelemetrySnapshot::default();
        let payload = StatusPayload {
            state: Some("LEVELING".to_string()),
            ..StatusPayload::default()
        };
        let merged = snapshot.merge(&payload);
        assert_eq!(merged.state, PrinterState::Other("LEVELING".to_string()));
    }

    #[test]
    fn test_snapshot_serializes_for_json_output() {
        let json = serde_json::to_value(populated_snapshot()).unwrap();
        assert_eq!(json["state"], "PRINTING");
        assert_eq!(json["progress"], 10.0);
        assert_eq!(json["temps"]["nozzle_actual"], 200.0);
    }
}
