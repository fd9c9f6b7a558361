//! Live dashboard: fixed-interval scheduler driving poll → merge → render.
//!
//! The scheduler never serializes overlapping requests: a tick dispatches its
//! fetch and moves on, and completions are applied through the reconciler's
//! sequence guard so a slow stale response cannot clobber fresher data. Every
//! completion (success or failure) triggers a re-render from the snapshot, so
//! the screen always shows the best available data.

use std::collections::HashMap;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use printwatch_core::{
    BadgeCategory, PollError, PrintwatchError, Reconciler, StatusPayload, StatusPoller,
    StatusView, ViewTarget, ViewUpdate, ViewValue, project,
};

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the TUI terminal (raw mode + alternate screen).
fn init_terminal() -> std::io::Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal. Must run even when the event loop failed.
fn cleanup_terminal(terminal: &mut TuiTerminal) -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Check for quit key press (non-blocking).
fn quit_requested() -> bool {
    if event::poll(Duration::from_millis(0)).unwrap_or(false) {
        if let Ok(CEvent::Key(key)) = event::read() {
            return key.code == KeyCode::Char('q') || key.code == KeyCode::Esc;
        }
    }
    false
}

fn badge_color(category: BadgeCategory) -> Color {
    match category {
        BadgeCategory::Success => Color::Green,
        BadgeCategory::Warning => Color::Yellow,
        BadgeCategory::Neutral => Color::DarkGray,
    }
}

/// Terminal surface for the full set of view targets.
///
/// Holds the latest value per target between renders; a render pass replaces
/// values outright, so no stale badge category survives a state change.
pub struct DashboardView {
    texts: HashMap<ViewTarget, String>,
    percent: u8,
    readout: String,
    badge_category: BadgeCategory,
    badge_label: String,
    last_failure: Option<String>,
    stale_discards: u64,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            texts: HashMap::new(),
            percent: 0,
            readout: "0".to_string(),
            badge_category: BadgeCategory::Neutral,
            badge_label: "UNKNOWN".to_string(),
            last_failure: None,
            stale_discards: 0,
        }
    }
}

impl StatusView for DashboardView {
    fn supports(&self, _target: ViewTarget) -> bool {
        true
    }

    fn apply(&mut self, update: &ViewUpdate) {
        match &update.value {
            ViewValue::Text(text) => {
                self.texts.insert(update.target, text.clone());
            }
            ViewValue::Progress { percent, readout } => {
                self.percent = *percent;
                self.readout = readout.clone();
            }
            ViewValue::Badge { category, label } => {
                self.badge_category = *category;
                self.badge_label = label.clone();
            }
        }
    }
}

impl DashboardView {
    fn text(&self, target: ViewTarget) -> &str {
        self.texts.get(&target).map(String::as_str).unwrap_or("—")
    }

    fn note_success(&mut self, stale_discards: u64) {
        self.last_failure = None;
        self.stale_discards = stale_discards;
    }

    fn note_failure(&mut self, message: String) {
        self.last_failure = Some(message);
    }

    fn footer_line(&self) -> String {
        let mut line = match &self.last_failure {
            Some(message) => format!("poll failed: {} — showing last good data", message),
            None => "polling".to_string(),
        };
        if self.stale_discards > 0 {
            line.push_str(&format!(" | {} stale responses discarded", self.stale_discards));
        }
        line.push_str(" | q to quit");
        line
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(frame.area());

        let temps = Paragraph::new(format!(
            "Nozzle  {} / {}\nBed     {} / {}",
            self.text(ViewTarget::NozzleActual),
            self.text(ViewTarget::NozzleTarget),
            self.text(ViewTarget::BedActual),
            self.text(ViewTarget::BedTarget),
        ))
        .block(Block::default().title("Temperatures").borders(Borders::ALL));
        frame.render_widget(temps, chunks[0]);

        let gauge = Gauge::default()
            .block(Block::default().title("Progress").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(u16::from(self.percent))
            .label(format!("{}%", self.readout));
        frame.render_widget(gauge, chunks[1]);

        let job = Paragraph::new(format!(
            "Job         {}\nElapsed     {}\nLast update {}",
            self.text(ViewTarget::Job),
            self.text(ViewTarget::Elapsed),
            self.text(ViewTarget::Stamp),
        ))
        .block(Block::default().title("Job").borders(Borders::ALL));
        frame.render_widget(job, chunks[2]);

        let badge = Paragraph::new(format!(" {} ", self.badge_label))
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(badge_color(self.badge_category))
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().title("State").borders(Borders::ALL));
        frame.render_widget(badge, chunks[3]);

        let footer = Paragraph::new(self.footer_line())
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[4]);
    }
}

/// Run the live dashboard until the user quits.
pub async fn run_dashboard(
    poller: StatusPoller,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, poller, interval).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut TuiTerminal,
    poller: StatusPoller,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let poller = Arc::new(poller);
    let mut reconciler = Reconciler::new();
    let mut view = DashboardView::default();

    let (tx, mut rx) = mpsc::channel::<(u64, Result<StatusPayload, PollError>)>(16);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut input_poll = tokio::time::interval(Duration::from_millis(100));

    // First paint from defaults, before any fetch has completed.
    view.render(&project(reconciler.snapshot()));
    terminal.draw(|frame| view.draw(frame))?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let seq = reconciler.begin_tick();
                let poller = Arc::clone(&poller);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = poller.fetch().await;
                    // Receiver gone means we are shutting down.
                    let _ = tx.send((seq, result)).await;
                });
            }
            Some((seq, result)) = rx.recv() => {
                match result {
                    Ok(payload) => {
                        reconciler.apply(seq, &payload);
                        view.note_success(reconciler.stale_discards());
                    }
                    Err(e) => {
                        warn!(
                            event = "cli.watch.tick_failed",
                            seq = seq,
                            error_code = e.error_code(),
                            error = %e,
                        );
                        reconciler.record_failure(seq);
                        view.note_failure(e.to_string());
                    }
                }
                view.render(&project(reconciler.snapshot()));
                terminal.draw(|frame| view.draw(frame))?;
            }
            _ = input_poll.tick() => {
                if quit_requested() {
                    info!(event = "cli.watch.quit_requested");
                    break;
                }
            }
        }
    }

    Ok(())
}
