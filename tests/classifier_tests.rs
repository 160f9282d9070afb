use fx_sentinel::classifier::{classify, BUY_THRESHOLD, SELL_THRESHOLD};
use fx_sentinel::model::signal::Signal;

#[test]
fn price_below_buy_threshold_is_buy() {
    assert_eq!(classify(1.1049), Signal::Buy);
    assert_eq!(classify(1.1000), Signal::Buy);
    assert_eq!(classify(0.9000), Signal::Buy);
}

#[test]
fn price_above_sell_threshold_is_sell() {
    assert_eq!(classify(1.1451), Signal::Sell);
    assert_eq!(classify(1.1500), Signal::Sell);
    assert_eq!(classify(2.0000), Signal::Sell);
}

#[test]
fn price_inside_band_is_no_trade() {
    assert_eq!(classify(1.1100), Signal::NoTrade);
    assert_eq!(classify(1.1250), Signal::NoTrade);
    assert_eq!(classify(1.1449), Signal::NoTrade);
}

#[test]
/// Comparisons are strict: the threshold values themselves do not trade.
fn thresholds_classify_as_no_trade() {
    assert_eq!(classify(SELL_THRESHOLD), Signal::NoTrade);
    assert_eq!(classify(BUY_THRESHOLD), Signal::NoTrade);
}

#[test]
fn classifier_is_stateless() {
    // Same input, same output, regardless of call history.
    let _ = classify(1.1000);
    let _ = classify(1.1480);
    assert_eq!(classify(1.1000), Signal::Buy);
    assert_eq!(classify(1.1000), Signal::Buy);
}
