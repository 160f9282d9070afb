use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    NoTrade,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::NoTrade => "NO TRADE",
        }
    }

    /// Only BUY and SELL are ever persisted or alerted on.
    pub fn is_tradeable(&self) -> bool {
        !matches!(self, Signal::NoTrade)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "BUY" => Ok(Signal::Buy),
            "SELL" => Ok(Signal::Sell),
            "NO TRADE" => Ok(Signal::NoTrade),
            other => Err(AppError::Store(format!("unknown signal label '{other}'"))),
        }
    }
}
