use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Spot prices keyed by token address.
pub type MarketPrices = HashMap<String, f64>;

/// One point of a market chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Display label (e.g. "Aug 29").
    pub date: String,
    pub price: f64,
}

/// Chart timeframe selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Day,
    Week,
    Month,
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::Day
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1d" | "day" => Ok(Self::Day),
            "1w" | "week" => Ok(Self::Week),
            "1m" | "month" => Ok(Self::Month),
            other => Err(Error::Parse(format!("unknown timeframe '{}'", other))),
        }
    }
}

impl Timeframe {
    /// Number of chart points for this timeframe (hourly for a day, daily
    /// otherwise).
    pub fn points(self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

/// Market snapshot for a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub price_change_percentage_24h: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parses_short_and_long_forms() {
        assert_eq!("1d".parse::<Timeframe>().unwrap(), Timeframe::Day);
        assert_eq!("week".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert!("1y".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_timeframe_point_counts() {
        assert_eq!(Timeframe::Day.points(), 24);
        assert_eq!(Timeframe::Week.points(), 7);
        assert_eq!(Timeframe::Month.points(), 30);
    }
}
