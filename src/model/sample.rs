#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Bullish",
            Sentiment::Bearish => "Bearish",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// One observation from the market feed. Ephemeral: consumed by the
/// evaluation cycle that fetched it and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub price: f64,
    pub sentiment: Sentiment,
}
