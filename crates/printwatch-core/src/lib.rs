//! printwatch-core: telemetry polling and reconciliation for a printer
//! status endpoint.
//!
//! The pipeline is poller → reconciler → view projection: the poller fetches
//! partial, untrusted status payloads; the reconciler owns the cumulative
//! snapshot and merges payloads field-wise without ever regressing on a
//! partial update; the view module projects the snapshot onto a registry of
//! display targets.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Fetch and decode one status payload per tick
//! - [`telemetry`] - Snapshot, merge semantics, sequence-guarded reconciler
//! - [`view`] - Projection of snapshots onto view targets
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod poller;
pub mod telemetry;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use config::PrintwatchConfig;
pub use errors::{PrintwatchError, PrintwatchResult};
pub use poller::{PollError, StatusPoller};
pub use telemetry::{PrinterState, Reconciler, StatusPayload, TelemetrySnapshot, Temps};
pub use view::{BadgeCategory, StatusView, ViewTarget, ViewUpdate, ViewValue, project};

// Re-export logging initialization
pub use logging::init_logging;
