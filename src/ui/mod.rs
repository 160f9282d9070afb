pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::event::AppEvent;
use crate::model::sample::PriceSample;
use crate::model::signal::Signal;
use crate::model::signal_event::SignalEvent;

use dashboard::{KeybindBar, MarketPanel, MessagePanel, SignalLogPanel, SignalPanel, StatusBar};

const MAX_LOG_MESSAGES: usize = 200;

pub struct AppState {
    pub pair: String,
    pub refresh_interval_secs: u64,
    pub stop_loss_pips: u32,
    pub email_enabled: bool,
    pub log_table_rows: usize,
    pub last_sample: Option<PriceSample>,
    pub current_signal: Option<Signal>,
    /// Persisted history, oldest first; grows as transitions are logged.
    pub events: Vec<SignalEvent>,
    pub cycle_count: u64,
    pub paused: bool,
    pub log_messages: Vec<String>,
}

impl AppState {
    pub fn new(
        pair: &str,
        refresh_interval_secs: u64,
        stop_loss_pips: u32,
        email_enabled: bool,
        log_table_rows: usize,
        history: Vec<SignalEvent>,
    ) -> Self {
        Self {
            pair: pair.to_string(),
            refresh_interval_secs,
            stop_loss_pips,
            email_enabled,
            log_table_rows,
            last_sample: None,
            current_signal: None,
            events: history,
            cycle_count: 0,
            paused: false,
            log_messages: Vec::new(),
        }
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            let excess = self.log_messages.len() - MAX_LOG_MESSAGES;
            self.log_messages.drain(0..excess);
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::CycleComplete { sample, signal } => {
                self.cycle_count += 1;
                self.last_sample = Some(sample);
                self.current_signal = Some(signal);
            }
            AppEvent::SignalLogged(event) => {
                self.push_log(format!(
                    "{} at {} | Price: {:.5} | SL: {:.5}",
                    event.signal, event.time, event.price, event.stop_loss
                ));
                self.events.push(event);
            }
            AppEvent::NotifyFailed(err) => {
                self.push_log(format!("Email alert failed: {err}"));
            }
            AppEvent::CycleFailed(err) => {
                self.push_log(format!("Evaluation cycle failed: {err}"));
            }
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    frame.render_widget(MarketPanel::new(state), top[0]);
    frame.render_widget(SignalPanel::new(state), top[1]);
    frame.render_widget(StatusBar::new(state), top[2]);
    frame.render_widget(SignalLogPanel::new(state), chunks[1]);
    frame.render_widget(MessagePanel::new(&state.log_messages), chunks[2]);
    frame.render_widget(KeybindBar, chunks[3]);
}
