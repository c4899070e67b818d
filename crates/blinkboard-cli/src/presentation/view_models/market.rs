use std::fmt;

use blinkboard_types::{MarketPrices, PricePoint, TokenInfo};
use serde::Serialize;

use crate::presentation::formatters::number;

#[derive(Debug, Serialize)]
pub struct PricesViewModel {
    pub prices: Vec<(String, f64)>,
}

impl PricesViewModel {
    /// Keeps the caller's address order rather than the map's.
    pub fn new(addresses: &[String], prices: &MarketPrices) -> Self {
        Self {
            prices: addresses
                .iter()
                .filter_map(|addr| prices.get(addr).map(|p| (addr.clone(), *p)))
                .collect(),
        }
    }
}

impl fmt::Display for PricesViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (address, price) in &self.prices {
            writeln!(f, "{:<44} {}", address, number::format_price(*price))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ChartViewModel {
    pub address: String,
    pub timeframe: String,
    pub points: Vec<PricePoint>,
}

impl ChartViewModel {
    pub fn new(address: &str, timeframe: &str, points: Vec<PricePoint>) -> Self {
        Self {
            address: address.to_string(),
            timeframe: timeframe.to_string(),
            points,
        }
    }
}

impl fmt::Display for ChartViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.address, self.timeframe)?;
        for point in &self.points {
            writeln!(f, "  {:<8} {}", point.date, number::format_price(point.price))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TokenInfoViewModel {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub price_change_percentage_24h: f64,
}

impl TokenInfoViewModel {
    pub fn from_info(info: &TokenInfo) -> Self {
        Self {
            name: info.name.clone(),
            symbol: info.symbol.clone(),
            current_price: info.current_price,
            market_cap: info.market_cap,
            total_volume: info.total_volume,
            high_24h: info.high_24h,
            low_24h: info.low_24h,
            price_change_percentage_24h: info.price_change_percentage_24h,
        }
    }
}

impl fmt::Display for TokenInfoViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.symbol)?;
        writeln!(f, "  Price: {}", number::format_price(self.current_price))?;
        writeln!(
            f,
            "  24h: {} .. {} ({:+.1}%)",
            number::format_price(self.low_24h),
            number::format_price(self.high_24h),
            self.price_change_percentage_24h
        )?;
        writeln!(f, "  Market cap: ${:.0}", self.market_cap)?;
        writeln!(f, "  Volume: ${:.0}", self.total_volume)
    }
}
