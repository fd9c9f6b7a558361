use printwatch_core::{StatusView, TelemetrySnapshot, ViewTarget, ViewUpdate, ViewValue, project};

/// Two-column field/value table for `printwatch status`.
///
/// Built through the same [`StatusView`] projection the dashboard uses, so
/// table output can never drift from what the live view would show.
pub struct StatusTable {
    rows: Vec<(&'static str, String)>,
}

fn target_label(target: ViewTarget) -> &'static str {
    match target {
        ViewTarget::NozzleActual => "Nozzle",
        ViewTarget::NozzleTarget => "Nozzle target",
        ViewTarget::BedActual => "Bed",
        ViewTarget::BedTarget => "Bed target",
        ViewTarget::Job => "Job",
        ViewTarget::Progress => "Progress",
        ViewTarget::Elapsed => "Elapsed",
        ViewTarget::Stamp => "Last update",
        ViewTarget::StateBadge => "State",
    }
}

impl StatusTable {
    pub fn from_snapshot(snapshot: &TelemetrySnapshot) -> Self {
        let mut table = StatusTable { rows: Vec::new() };
        table.render(&project(snapshot));
        table
    }

    pub fn print(&self) {
        let field_width = self
            .rows
            .iter()
            .map(|(field, _)| field.chars().count())
            .max()
            .unwrap_or(8);
        let value_width = self
            .rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(8, 60);

        println!(
            "┌{}┬{}┐",
            "─".repeat(field_width + 2),
            "─".repeat(value_width + 2)
        );
        for (field, value) in &self.rows {
            println!(
                "│ {:<field_width$} │ {:<value_width$} │",
                field,
                truncate(value, value_width),
            );
        }
        println!(
            "└{}┴{}┘",
            "─".repeat(field_width + 2),
            "─".repeat(value_width + 2)
        );
    }

    #[cfg(test)]
    fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(field, _)| *field == label)
            .map(|(_, value)| value.as_str())
    }
}

impl StatusView for StatusTable {
    fn supports(&self, _target: ViewTarget) -> bool {
        true
    }

    fn apply(&mut self, update: &ViewUpdate) {
        let value = match &update.value {
            ViewValue::Text(text) => text.clone(),
            ViewValue::Progress { readout, .. } => format!("{}%", readout),
            ViewValue::Badge { label, .. } => label.clone(),
        };
        self.rows.push((target_label(update.target), value));
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
