use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode};
use tokio::sync::{mpsc, watch};

use fx_sentinel::config::Config;
use fx_sentinel::email::{EmailSink, NullSink};
use fx_sentinel::event::AppEvent;
use fx_sentinel::input::{parse_main_command, UiCommand};
use fx_sentinel::market::{MarketDataSource, SimulatedMarket};
use fx_sentinel::model::signal_event::SignalEvent;
use fx_sentinel::notifier::{NotificationSink, SignalEngine};
use fx_sentinel::store::{export_csv, CsvSignalStore, SignalStore};
use fx_sentinel::ui::{self, AppState};

const UI_POLL_MS: u64 = 100;

/// Everything one evaluation cycle touches. Owned by the evaluation task so
/// the signal log has exactly one writer for the process lifetime.
struct EvaluationPipeline {
    market: SimulatedMarket,
    engine: SignalEngine,
    store: CsvSignalStore,
    sink: Box<dyn NotificationSink + Send>,
}

impl EvaluationPipeline {
    fn run_cycle(&mut self) -> Vec<AppEvent> {
        let sample = self.market.fetch();
        match self
            .engine
            .evaluate(&sample, &mut self.store, self.sink.as_ref())
        {
            Ok(outcome) => {
                let mut events = vec![AppEvent::CycleComplete {
                    sample,
                    signal: outcome.signal,
                }];
                if let Some(logged) = outcome.logged {
                    tracing::info!(
                        signal = %logged.signal,
                        price = logged.price,
                        stop_loss = logged.stop_loss,
                        "signal transition recorded"
                    );
                    events.push(AppEvent::SignalLogged(logged));
                }
                if let Some(err) = outcome.notify_error {
                    events.push(AppEvent::NotifyFailed(err));
                }
                events
            }
            Err(e) => {
                tracing::error!(error = %e, "evaluation cycle aborted");
                vec![AppEvent::CycleFailed(e.to_string())]
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EvalCommand {
    RefreshNow,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("When email.enabled is set, EMAIL_USER and EMAIL_PASS must be in .env");
            std::process::exit(1);
        }
    };

    // Init tracing (log to file so it doesn't interfere with TUI)
    let log_file = std::fs::File::create("fx-sentinel.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        pair = %config.signal.pair,
        signal_log = %config.signal_log.path,
        stop_loss_pips = config.signal.stop_loss_pips,
        refresh_secs = config.ui.refresh_interval_secs,
        "Starting fx-sentinel"
    );

    let store = CsvSignalStore::new(&config.signal_log.path);
    let history = store
        .all_entries()
        .context("failed to read existing signal log")?;

    let sink: Box<dyn NotificationSink + Send> = if config.email.enabled {
        Box::new(EmailSink::new(&config.email).context("failed to build email sink")?)
    } else {
        Box::new(NullSink)
    };

    // Channels
    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(64);
    let (eval_tx, mut eval_rx) = mpsc::channel::<EvalCommand>(8);
    let (paused_tx, paused_rx) = watch::channel(false);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Evaluation task: one cycle in flight at a time, pipeline owns the store.
    let refresh_secs = config.ui.refresh_interval_secs;
    let eval_handle = tokio::spawn({
        let app_tx = app_tx.clone();
        let mut shutdown_rx = shutdown_rx.clone();
        async move {
            let mut pipeline = EvaluationPipeline {
                market: SimulatedMarket::new(),
                engine: SignalEngine::new(config.signal.stop_loss_pips),
                store,
                sink,
            };
            let mut ticker = tokio::time::interval(Duration::from_secs(refresh_secs));
            loop {
                let run = tokio::select! {
                    _ = ticker.tick() => !*paused_rx.borrow(),
                    cmd = eval_rx.recv() => match cmd {
                        // Forced refresh runs even while paused.
                        Some(EvalCommand::RefreshNow) => true,
                        None => break,
                    },
                    _ = shutdown_rx.changed() => break,
                };
                if !run {
                    continue;
                }
                // Store and SMTP IO are blocking; keep them off the runtime.
                let (returned, events) = match tokio::task::spawn_blocking(move || {
                    let mut p = pipeline;
                    let events = p.run_cycle();
                    (p, events)
                })
                .await
                {
                    Ok(v) => v,
                    Err(e) => {
                        tracing::error!(error = %e, "evaluation cycle panicked");
                        break;
                    }
                };
                pipeline = returned;
                for event in events {
                    if app_tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
        }
    });

    let mut terminal = ratatui::init();
    let mut app_state = AppState::new(
        &config.signal.pair,
        config.ui.refresh_interval_secs,
        config.signal.stop_loss_pips,
        config.email.enabled,
        config.ui.log_table_rows,
        history,
    );

    loop {
        terminal.draw(|frame| ui::render(frame, &app_state))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    tracing::info!("User quit");
                    let _ = shutdown_tx.send(true);
                    break;
                }
                if let Some(cmd) = parse_main_command(&key.code) {
                    match cmd {
                        UiCommand::Pause => {
                            if !app_state.paused {
                                app_state.paused = true;
                                let _ = paused_tx.send(true);
                                app_state.push_log("Evaluation paused".to_string());
                            }
                        }
                        UiCommand::Resume => {
                            if app_state.paused {
                                app_state.paused = false;
                                let _ = paused_tx.send(false);
                                app_state.push_log("Evaluation resumed".to_string());
                            }
                        }
                        UiCommand::RefreshNow => {
                            let _ = eval_tx.try_send(EvalCommand::RefreshNow);
                        }
                        UiCommand::ExportCsv => match export_signal_log(&app_state.events) {
                            Ok(path) => {
                                app_state.push_log(format!("Signal log exported to {path}"))
                            }
                            Err(e) => app_state.push_log(format!("Export failed: {e}")),
                        },
                    }
                }
            }
        }

        // Drain events from channel
        while let Ok(event) = app_rx.try_recv() {
            app_state.apply(event);
        }
    }

    eval_handle.abort();
    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Check fx-sentinel.log for details.");
    Ok(())
}

fn export_signal_log(events: &[SignalEvent]) -> Result<String> {
    let data = export_csv(events)?;
    let path = format!(
        "signal_log_export_{}.csv",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    std::fs::write(&path, data).with_context(|| format!("failed to write {path}"))?;
    Ok(path)
}
