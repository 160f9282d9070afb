use crate::model::sample::PriceSample;
use crate::model::signal::Signal;
use crate::model::signal_event::SignalEvent;

/// Messages from the evaluation task to the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// An evaluation cycle finished, whether or not anything was logged.
    CycleComplete { sample: PriceSample, signal: Signal },
    /// A transition was recorded to the signal log.
    SignalLogged(SignalEvent),
    /// The alert for a logged transition could not be delivered. The log row
    /// already stands.
    NotifyFailed(String),
    /// The cycle aborted before producing a log row (store failure).
    CycleFailed(String),
}
