pub mod sample;
pub mod signal;
pub mod signal_event;

/// Round a price to 5 fractional digits (pipette precision).
pub fn round5(price: f64) -> f64 {
    (price * 100_000.0).round() / 100_000.0
}
