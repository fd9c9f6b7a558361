//! Printer lifecycle state and temperature readings.

use serde::{Serialize, Serializer};

/// Lifecycle state reported by the printer.
///
/// The wire value is a free-form string; anything outside the known set is
/// preserved verbatim as [`PrinterState::Other`] so the dashboard can still
/// show what the firmware said. `Unknown` is the pre-first-fetch default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterState {
    Printing,
    Paused,
    Idle,
    Unknown,
    Other(String),
}

impl PrinterState {
    /// Parse a wire state string, case-insensitively.
    ///
    /// The MKS firmware reports `PAUSE` where Marlin reports `PAUSED`; both
    /// map to [`PrinterState::Paused`].
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PRINTING" => PrinterState::Printing,
            "PAUSED" | "PAUSE" => PrinterState::Paused,
            "IDLE" => PrinterState::Idle,
            "UNKNOWN" | "" => PrinterState::Unknown,
            _ => PrinterState::Other(normalized),
        }
    }

    /// Display label for badges and table output.
    pub fn label(&self) -> &str {
        match self {
            PrinterState::Printing => "PRINTING",
            PrinterState::Paused => "PAUSED",
            PrinterState::Idle => "IDLE",
            PrinterState::Unknown => "UNKNOWN",
            PrinterState::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for PrinterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PrinterState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Last-known temperature readings, each sensor independently optional.
///
/// A reading stays `None` until the endpoint has reported it at least once;
/// after that it only ever moves forward to a newer value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Temps {
    pub nozzle_actual: Option<f64>,
    pub nozzle_target: Option<f64>,
    pub bed_actual: Option<f64>,
    pub bed_target: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_states() {
        assert_eq!(PrinterState::parse("PRINTING"), PrinterState::Printing);
        assert_eq!(PrinterState::parse("PAUSED"), PrinterState::Paused);
        assert_eq!(PrinterState::parse("PAUSE"), PrinterState::Paused);
        assert_eq!(PrinterState::parse("IDLE"), PrinterState::Idle);
        assert_eq!(PrinterState::parse("UNKNOWN"), PrinterState::Unknown);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PrinterState::parse("printing"), PrinterState::Printing);
        assert_eq!(PrinterState::parse(" Idle "), PrinterState::Idle);
    }

    #[test]
    fn test_parse_preserves_unrecognized_states() {
        assert_eq!(
            PrinterState::parse("XYZ"),
            PrinterState::Other("XYZ".to_string())
        );
        assert_eq!(PrinterState::parse("XYZ").label(), "XYZ");
    }

    #[test]
    fn test_empty_state_falls_back_to_unknown() {
        assert_eq!(PrinterState::parse(""), PrinterState::Unknown);
        assert_eq!(PrinterState::parse("   "), PrinterState::Unknown);
    }

    #[test]
    fn test_state_serializes_as_label() {
        let json = serde_json::to_string(&PrinterState::Printing).unwrap();
        assert_eq!(json, "\"PRINTING\"");
        let json = serde_json::to_string(&PrinterState::Other("BUSY".to_string())).unwrap();
        assert_eq!(json, "\"BUSY\"");
    }
}
