//! Untrusted partial status payloads from the network.
//!
//! Every field is optional: the endpoint is free to omit any top-level field
//! or any individual temperature, and `null` is treated the same as absent.
//! Unknown fields are ignored rather than rejected so a newer backend cannot
//! break an older dashboard.

use serde::Deserialize;

/// Partial temperature update using the wire key names of the MKS firmware
/// (`T`/`Tset` nozzle actual/target, `B`/`Bset` bed actual/target).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct TempsPatch {
    #[serde(rename = "T")]
    pub nozzle_actual: Option<f64>,
    #[serde(rename = "Tset")]
    pub nozzle_target: Option<f64>,
    #[serde(rename = "B")]
    pub bed_actual: Option<f64>,
    #[serde(rename = "Bset")]
    pub bed_target: Option<f64>,
}

/// One status update as received from the endpoint.
///
/// `None` in any field means "no new information", never "reset".
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatusPayload {
    pub temps: Option<TempsPatch>,
    pub progress: Option<f64>,
    pub job: Option<String>,
    pub elapsed: Option<String>,
    pub stamp: Option<String>,
    pub state: Option<String>,
}
