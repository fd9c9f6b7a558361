//! Projection of a snapshot onto view targets.

use crate::telemetry::{PLACEHOLDER, PrinterState, TelemetrySnapshot};

use super::types::{BadgeCategory, ViewTarget, ViewUpdate, ViewValue};

/// Map a printer state onto its badge category.
///
/// Fixed lookup: PRINTING is a success, PAUSED a warning, everything else —
/// including UNKNOWN and unrecognized states — neutral.
pub fn badge_category(state: &PrinterState) -> BadgeCategory {
    match state {
        PrinterState::Printing => BadgeCategory::Success,
        PrinterState::Paused => BadgeCategory::Warning,
        _ => BadgeCategory::Neutral,
    }
}

fn temp_text(reading: Option<f64>) -> String {
    match reading {
        Some(value) => format!("{value:.1}°"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Project a snapshot into one update per view target.
///
/// Pure: no display access, no network, no clock. Defaults are already
/// resolved inside the snapshot, so every target always receives a value.
pub fn project(snapshot: &TelemetrySnapshot) -> Vec<ViewUpdate> {
    let percent = snapshot.progress.clamp(0.0, 100.0).round() as u8;

    vec![
        ViewUpdate {
            target: ViewTarget::NozzleActual,
            value: ViewValue::Text(temp_text(snapshot.temps.nozzle_actual)),
        },
        ViewUpdate {
            target: ViewTarget::NozzleTarget,
            value: ViewValue::Text(temp_text(snapshot.temps.nozzle_target)),
        },
        ViewUpdate {
            target: ViewTarget::BedActual,
            value: ViewValue::Text(temp_text(snapshot.temps.bed_actual)),
        },
        ViewUpdate {
            target: ViewTarget::BedTarget,
            value: ViewValue::Text(temp_text(snapshot.temps.bed_target)),
        },
        ViewUpdate {
            target: ViewTarget::Job,
            value: ViewValue::Text(snapshot.job.clone()),
        },
        ViewUpdate {
            target: ViewTarget::Progress,
            value: ViewValue::Progress {
                percent,
                readout: percent.to_string(),
            },
        },
        ViewUpdate {
            target: ViewTarget::Elapsed,
            value: ViewValue::Text(snapshot.elapsed.clone()),
        },
        ViewUpdate {
            target: ViewTarget::Stamp,
            value: ViewValue::Text(snapshot.stamp.clone()),
        },
        ViewUpdate {
            target: ViewTarget::StateBadge,
            value: ViewValue::Badge {
                category: badge_category(&snapshot.state),
                label: snapshot.state.label().to_string(),
            },
        },
    ]
}
