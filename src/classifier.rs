use crate::model::signal::Signal;

/// Price above this level is treated as overextended: SELL.
pub const SELL_THRESHOLD: f64 = 1.1450;
/// Price below this level is treated as oversold: BUY.
pub const BUY_THRESHOLD: f64 = 1.1050;

/// Map a price to a discrete signal. Comparisons are strict, so both
/// threshold values themselves classify as NO TRADE. Stateless: each call
/// is independent of any previous signal.
pub fn classify(price: f64) -> Signal {
    if price > SELL_THRESHOLD {
        Signal::Sell
    } else if price < BUY_THRESHOLD {
        Signal::Buy
    } else {
        Signal::NoTrade
    }
}
