use fx_sentinel::event::AppEvent;
use fx_sentinel::model::sample::{PriceSample, Sentiment};
use fx_sentinel::model::signal::Signal;
use fx_sentinel::model::signal_event::SignalEvent;
use fx_sentinel::ui::AppState;

fn state() -> AppState {
    AppState::new("EUR/USD", 60, 20, false, 12, Vec::new())
}

fn event() -> SignalEvent {
    SignalEvent::new(
        "2026-08-25 09:15:00".to_string(),
        Signal::Buy,
        1.10310,
        1.10110,
    )
}

#[test]
fn cycle_complete_updates_market_view() {
    let mut state = state();
    let sample = PriceSample {
        price: 1.1234,
        sentiment: Sentiment::Bullish,
    };
    state.apply(AppEvent::CycleComplete {
        sample,
        signal: Signal::NoTrade,
    });

    assert_eq!(state.cycle_count, 1);
    assert_eq!(state.last_sample, Some(sample));
    assert_eq!(state.current_signal, Some(Signal::NoTrade));
    assert!(state.events.is_empty());
}

#[test]
fn signal_logged_extends_history_and_messages() {
    let mut state = state();
    state.apply(AppEvent::SignalLogged(event()));

    assert_eq!(state.events, vec![event()]);
    assert_eq!(state.log_messages.len(), 1);
    assert!(state.log_messages[0].contains("BUY"));
    assert!(state.log_messages[0].contains("1.10310"));
}

#[test]
fn failures_surface_as_messages_only() {
    let mut state = state();
    state.apply(AppEvent::NotifyFailed("relay down".to_string()));
    state.apply(AppEvent::CycleFailed("disk full".to_string()));

    assert!(state.events.is_empty());
    assert_eq!(state.log_messages.len(), 2);
    assert!(state.log_messages[0].contains("relay down"));
    assert!(state.log_messages[1].contains("disk full"));
}

#[test]
fn preexisting_history_is_kept_oldest_first() {
    let history = vec![event()];
    let state = AppState::new("EUR/USD", 60, 20, false, 12, history.clone());
    assert_eq!(state.events, history);
    assert_eq!(state.cycle_count, 0);
}

#[test]
fn message_log_is_capped() {
    let mut state = state();
    for i in 0..500 {
        state.push_log(format!("message {i}"));
    }
    assert_eq!(state.log_messages.len(), 200);
    assert_eq!(state.log_messages.last().unwrap(), "message 499");
    assert_eq!(state.log_messages.first().unwrap(), "message 300");
}
