use fx_sentinel::market::{MarketDataSource, SimulatedMarket, PRICE_CEIL, PRICE_FLOOR};

#[test]
fn prices_stay_inside_demo_band() {
    let mut market = SimulatedMarket::with_seed(7);
    for _ in 0..1000 {
        let sample = market.fetch();
        assert!(sample.price >= PRICE_FLOOR, "price {} too low", sample.price);
        assert!(sample.price <= PRICE_CEIL, "price {} too high", sample.price);
    }
}

#[test]
fn prices_carry_five_fractional_digits() {
    let mut market = SimulatedMarket::with_seed(42);
    for _ in 0..100 {
        let price = market.fetch().price;
        let scaled = price * 100_000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "price {price} not rounded to 5 digits"
        );
    }
}

#[test]
fn same_seed_is_deterministic() {
    let mut a = SimulatedMarket::with_seed(123);
    let mut b = SimulatedMarket::with_seed(123);
    for _ in 0..50 {
        assert_eq!(a.fetch(), b.fetch());
    }
}

#[test]
fn all_sentiments_eventually_appear() {
    let mut market = SimulatedMarket::with_seed(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(market.fetch().sentiment.as_str());
    }
    assert_eq!(seen.len(), 3);
}
