use crate::error::AppError;
use crate::model::signal::Signal;

/// One persisted row of the signal log. Created exactly once, when a newly
/// classified signal differs from the last persisted one, and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEvent {
    /// Local timestamp, `%Y-%m-%d %H:%M:%S`.
    pub time: String,
    /// Always BUY or SELL; NO TRADE is never persisted.
    pub signal: Signal,
    pub price: f64,
    pub stop_loss: f64,
}

impl SignalEvent {
    pub fn new(time: String, signal: Signal, price: f64, stop_loss: f64) -> Self {
        Self {
            time,
            signal,
            price,
            stop_loss,
        }
    }

    /// CSV fields in log order: Time, Signal, Price, Stop Loss.
    pub fn to_record(&self) -> [String; 4] {
        [
            self.time.clone(),
            self.signal.as_str().to_string(),
            format!("{:.5}", self.price),
            format!("{:.5}", self.stop_loss),
        ]
    }

    pub fn from_fields(
        time: &str,
        signal: &str,
        price: &str,
        stop_loss: &str,
    ) -> Result<Self, AppError> {
        let signal: Signal = signal.parse()?;
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::Store(format!("bad price field '{price}': {e}")))?;
        let stop_loss = stop_loss
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::Store(format!("bad stop loss field '{stop_loss}': {e}")))?;
        Ok(Self::new(time.trim().to_string(), signal, price, stop_loss))
    }

    /// Parse a raw data row of the log file (no quoting in this format).
    pub fn parse_row(row: &str) -> Result<Self, AppError> {
        let mut fields = row.splitn(4, ',');
        match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(time), Some(signal), Some(price), Some(stop_loss)) => {
                Self::from_fields(time, signal, price, stop_loss)
            }
            _ => Err(AppError::Store(format!("malformed log row '{row}'"))),
        }
    }
}
