use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::round5;
use crate::model::sample::{PriceSample, Sentiment};

pub const PRICE_FLOOR: f64 = 1.1000;
pub const PRICE_CEIL: f64 = 1.1500;

/// Source of price/sentiment observations. Injected into the evaluation
/// pipeline so tests can feed deterministic samples.
pub trait MarketDataSource {
    fn fetch(&mut self) -> PriceSample;
}

/// Placeholder feed: uniform random walk-less prices inside the EUR/USD demo
/// band, with a uniformly random sentiment label.
pub struct SimulatedMarket {
    rng: StdRng,
}

impl SimulatedMarket {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataSource for SimulatedMarket {
    fn fetch(&mut self) -> PriceSample {
        let price = round5(self.rng.gen_range(PRICE_FLOOR..PRICE_CEIL));
        let sentiment = match self.rng.gen_range(0..3) {
            0 => Sentiment::Bullish,
            1 => Sentiment::Bearish,
            _ => Sentiment::Neutral,
        };
        PriceSample { price, sentiment }
    }
}
