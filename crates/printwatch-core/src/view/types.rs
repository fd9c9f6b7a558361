//! View-target registry types.
//!
//! The renderer never talks to a concrete display directly. It produces
//! [`ViewUpdate`]s addressed to stable [`ViewTarget`]s, and a [`StatusView`]
//! implementation applies the ones it supports. A missing target is a normal
//! branch, not an error — a view is free to show only a subset of the fields.

use tracing::debug;

/// Stable identifiers for the display elements a status view may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTarget {
    NozzleActual,
    NozzleTarget,
    BedActual,
    BedTarget,
    Job,
    Progress,
    Elapsed,
    Stamp,
    StateBadge,
}

impl ViewTarget {
    pub const ALL: [ViewTarget; 9] = [
        ViewTarget::NozzleActual,
        ViewTarget::NozzleTarget,
        ViewTarget::BedActual,
        ViewTarget::BedTarget,
        ViewTarget::Job,
        ViewTarget::Progress,
        ViewTarget::Elapsed,
        ViewTarget::Stamp,
        ViewTarget::StateBadge,
    ];
}

/// Visual category for the state badge. Exactly one category is in effect
/// after every render; a new render replaces the previous one outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Success,
    Warning,
    Neutral,
}

/// Value carried by a single view update.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewValue {
    Text(String),
    /// Progress drives a proportional bar, an accessibility-facing numeric
    /// value and a textual readout, all from the same percent.
    Progress { percent: u8, readout: String },
    Badge { category: BadgeCategory, label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub target: ViewTarget,
    pub value: ViewValue,
}

/// A display surface for telemetry.
///
/// Implementations declare which targets they carry; `render` skips the rest
/// silently. No implementation may let an error escape — view mutation is
/// best-effort by contract.
pub trait StatusView {
    fn supports(&self, target: ViewTarget) -> bool;

    /// Apply one update for a supported target.
    fn apply(&mut self, update: &ViewUpdate);

    /// Apply every supported update from a projection pass.
    fn render(&mut self, updates: &[ViewUpdate]) {
        for update in updates {
            if self.supports(update.target) {
                self.apply(update);
            } else {
                debug!(
                    event = "core.view.target_skipped",
                    target = ?update.target,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// View that only carries the job label, mimicking a legacy page where
    /// most targets are absent.
    struct JobOnlyView {
        job: Option<String>,
        applied: usize,
    }

    impl StatusView for JobOnlyView {
        fn supports(&self, target: ViewTarget) -> bool {
            target == ViewTarget::Job
        }

        fn apply(&mut self, update: &ViewUpdate) {
            if let ViewValue::Text(text) = &update.value {
                self.job = Some(text.clone());
            }
            self.applied += 1;
        }
    }

    #[test]
    fn test_unsupported_targets_are_skipped_silently() {
        let mut view = JobOnlyView {
            job: None,
            applied: 0,
        };
        let updates = vec![
            ViewUpdate {
                target: ViewTarget::Job,
                value: ViewValue::Text("benchy.gco".to_string()),
            },
            ViewUpdate {
                target: ViewTarget::Progress,
                value: ViewValue::Progress {
                    percent: 50,
                    readout: "50".to_string(),
                },
            },
            ViewUpdate {
                target: ViewTarget::StateBadge,
                value: ViewValue::Badge {
                    category: BadgeCategory::Success,
                    label: "PRINTING".to_string(),
                },
            },
        ];

        view.render(&updates);
        assert_eq!(view.job.as_deref(), Some("benchy.gco"));
        assert_eq!(view.applied, 1);
    }

    #[test]
    fn test_all_targets_listed_once() {
        for target in ViewTarget::ALL {
            assert_eq!(
                ViewTarget::ALL.iter().filter(|t| **t == target).count(),
                1
            );
        }
    }
}
