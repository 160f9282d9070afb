use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::model::sample::Sentiment;
use crate::model::signal::Signal;

use super::AppState;

fn signal_color(signal: Signal) -> Color {
    match signal {
        Signal::Buy => Color::Green,
        Signal::Sell => Color::Red,
        Signal::NoTrade => Color::DarkGray,
    }
}

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Bullish => Color::Green,
        Sentiment::Bearish => Color::Red,
        Sentiment::Neutral => Color::DarkGray,
    }
}

pub struct MarketPanel<'a> {
    state: &'a AppState,
}

impl<'a> MarketPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MarketPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (price_str, sentiment) = match self.state.last_sample {
            Some(sample) => (format!("{:.5}", sample.price), Some(sample.sentiment)),
            None => ("--".to_string(), None),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Price:     ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    price_str,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Sentiment: ", Style::default().fg(Color::DarkGray)),
                match sentiment {
                    Some(s) => Span::styled(s.as_str(), Style::default().fg(sentiment_color(s))),
                    None => Span::styled("--", Style::default().fg(Color::DarkGray)),
                },
            ]),
        ];

        let block = Block::default()
            .title(format!(" {} ", self.state.pair))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct SignalPanel<'a> {
    state: &'a AppState,
}

impl<'a> SignalPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for SignalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.state.current_signal {
            Some(signal) => Line::from(Span::styled(
                signal.as_str(),
                Style::default()
                    .fg(signal_color(signal))
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "waiting for first cycle",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let block = Block::default()
            .title(" Current Signal ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(vec![Line::default(), line.centered()])
            .block(block)
            .render(area, buf);
    }
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = if self.state.paused {
            Span::styled("PAUSED", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("RUNNING", Style::default().fg(Color::Green))
        };
        let email = if self.state.email_enabled {
            Span::styled("on", Style::default().fg(Color::Green))
        } else {
            Span::styled("off", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Mode:     ", Style::default().fg(Color::DarkGray)),
                mode,
            ]),
            Line::from(vec![
                Span::styled("Refresh:  ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{}s", self.state.refresh_interval_secs)),
            ]),
            Line::from(vec![
                Span::styled("SL pips:  ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.state.stop_loss_pips.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Cycles:   ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.state.cycle_count.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Email:    ", Style::default().fg(Color::DarkGray)),
                email,
            ]),
        ];

        let block = Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct SignalLogPanel<'a> {
    state: &'a AppState,
}

impl<'a> SignalLogPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for SignalLogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Most recent first, capped to the configured table depth.
        let rows: Vec<Row> = self
            .state
            .events
            .iter()
            .rev()
            .take(self.state.log_table_rows)
            .map(|event| {
                Row::new(vec![
                    Cell::from(event.time.clone()),
                    Cell::from(event.signal.as_str())
                        .style(Style::default().fg(signal_color(event.signal))),
                    Cell::from(format!("{:.5}", event.price)),
                    Cell::from(format!("{:.5}", event.stop_loss)),
                ])
            })
            .collect();

        let header = Row::new(vec!["Time", "Signal", "Price", "Stop Loss"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let block = Block::default()
            .title(format!(" Trade Signal Log ({} entries) ", self.state.events.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}

pub struct MessagePanel<'a> {
    messages: &'a [String],
}

impl<'a> MessagePanel<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for MessagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|m| Line::from(m.as_str()))
            .collect();

        let block = Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" q ", Style::default().fg(Color::Cyan)),
            Span::raw("quit  "),
            Span::styled("p ", Style::default().fg(Color::Cyan)),
            Span::raw("pause  "),
            Span::styled("r ", Style::default().fg(Color::Cyan)),
            Span::raw("resume  "),
            Span::styled("f ", Style::default().fg(Color::Cyan)),
            Span::raw("refresh now  "),
            Span::styled("e ", Style::default().fg(Color::Cyan)),
            Span::raw("export csv"),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
