//! Default values for configuration types.

/// Default status endpoint. The MKS Wi-Fi module answers on 192.168.4.1 when
/// acting as its own access point.
pub const DEFAULT_STATUS_URL: &str = "http://192.168.4.1/printer/status";

/// Default seconds between poll ticks (the slow-refresh variant).
pub const DEFAULT_INTERVAL_SECS: u64 = 3;

/// Default per-request timeout in seconds.
///
/// Deliberately longer than the fast 1s interval: a hung request must not be
/// retried within its own tick, but it also must not pile up forever.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
