use tracing::warn;

use crate::classifier::classify;
use crate::error::AppError;
use crate::model::round5;
use crate::model::sample::PriceSample;
use crate::model::signal::Signal;
use crate::model::signal_event::SignalEvent;
use crate::store::SignalStore;

/// One pip of EUR/USD price movement.
pub const PIP: f64 = 0.0001;

/// Outbound alert channel. Delivery is best-effort: the caller never retries
/// and a failure never rolls back an already-persisted log row.
pub trait NotificationSink {
    fn notify(&self, subject: &str, body: &str) -> Result<(), AppError>;
}

/// Result of one evaluation cycle: at most one logged event and at most one
/// attempted notification.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub signal: Signal,
    pub logged: Option<SignalEvent>,
    pub notify_error: Option<String>,
}

impl EvaluationOutcome {
    fn quiet(signal: Signal) -> Self {
        Self {
            signal,
            logged: None,
            notify_error: None,
        }
    }
}

pub struct SignalEngine {
    stop_loss_pips: u32,
}

impl SignalEngine {
    pub fn new(stop_loss_pips: u32) -> Self {
        Self { stop_loss_pips }
    }

    /// Stop-loss for a tradeable signal: below entry for BUY, above for SELL,
    /// rounded to 5 fractional digits. None for NO TRADE.
    pub fn stop_loss_for(&self, signal: Signal, price: f64) -> Option<f64> {
        let distance = f64::from(self.stop_loss_pips) * PIP;
        match signal {
            Signal::Buy => Some(round5(price - distance)),
            Signal::Sell => Some(round5(price + distance)),
            Signal::NoTrade => None,
        }
    }

    /// Run one evaluation cycle: classify, suppress repeats against the last
    /// persisted row, otherwise append a new event and raise an alert.
    ///
    /// The append happens before the notification. A sink failure is reported
    /// in the outcome but the row stands; a store failure aborts the cycle
    /// before anything is sent.
    pub fn evaluate<S, N>(
        &self,
        sample: &PriceSample,
        store: &mut S,
        sink: &N,
    ) -> Result<EvaluationOutcome, AppError>
    where
        S: SignalStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let signal = classify(sample.price);
        let Some(stop_loss) = self.stop_loss_for(signal, sample.price) else {
            // NO TRADE is never recorded; the log only carries BUY/SELL rows.
            return Ok(EvaluationOutcome::quiet(signal));
        };

        // Repeat suppression compares against the last persisted row only.
        // NO TRADE cycles in between are invisible to this check, so a
        // BUY -> NO TRADE -> BUY sequence stays suppressed.
        if store.last_entry()?.map(|e| e.signal) == Some(signal) {
            return Ok(EvaluationOutcome::quiet(signal));
        }

        let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let event = SignalEvent::new(time, signal, round5(sample.price), stop_loss);
        store.append(&event)?;

        let notify_error = match sink.notify(&alert_subject(signal), &alert_body(&event)) {
            Ok(()) => None,
            Err(e) => {
                warn!(signal = %signal, error = %e, "signal alert delivery failed");
                Some(e.to_string())
            }
        };

        Ok(EvaluationOutcome {
            signal,
            logged: Some(event),
            notify_error,
        })
    }
}

pub fn alert_subject(signal: Signal) -> String {
    format!("Forex {signal} Signal Alert")
}

pub fn alert_body(event: &SignalEvent) -> String {
    format!(
        "Forex {} Signal\nTime: {}\nPrice: {:.5}\nStop Loss: {:.5}\n",
        event.signal, event.time, event.price, event.stop_loss
    )
}
