//! Telemetry state: payload decoding, snapshot merging, reconciliation.

pub mod payload;
pub mod reconciler;
pub mod snapshot;
pub mod types;

pub use payload::{StatusPayload, TempsPatch};
pub use reconciler::Reconciler;
pub use snapshot::{ELAPSED_ZERO, PLACEHOLDER, TelemetrySnapshot};
pub use types::{PrinterState, Temps};
