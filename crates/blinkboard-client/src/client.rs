use std::sync::Arc;

use blinkboard_types::{
    BarkTransaction, Blink, BlinkDraft, CommerceItem, DashboardData, GovernanceProposal,
    LeaderboardEntry, MarketPrices, Notification, PricePoint, StakingInfo, SwapQuote, TimeRange,
    Timeframe, TokenInfo,
};

use crate::error::Result;
use crate::mock::MockApi;
use crate::source::DataSource;

/// Entry point for dashboard data access.
///
/// Wraps a [`DataSource`] and exposes typed handles per page. Cloning is
/// cheap; clones share the underlying source.
#[derive(Clone)]
pub struct Client {
    source: Arc<dyn DataSource>,
}

impl Client {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Client backed by the in-memory demo dataset.
    pub fn mock() -> Self {
        Self::new(Arc::new(MockApi::new()))
    }

    /// Access blink listing and creation.
    pub fn blinks(&self) -> BlinkHandle {
        BlinkHandle {
            source: Arc::clone(&self.source),
        }
    }

    /// Access staking state and operations.
    pub fn staking(&self) -> StakingHandle {
        StakingHandle {
            source: Arc::clone(&self.source),
        }
    }

    /// Access the commerce catalog.
    pub fn commerce(&self) -> CommerceHandle {
        CommerceHandle {
            source: Arc::clone(&self.source),
        }
    }

    /// Access token prices and charts.
    pub fn market(&self) -> MarketHandle {
        MarketHandle {
            source: Arc::clone(&self.source),
        }
    }

    pub fn dashboard(&self, range: TimeRange) -> Result<DashboardData> {
        self.source.fetch_dashboard(range)
    }

    pub fn governance(&self) -> Result<Vec<GovernanceProposal>> {
        self.source.fetch_governance()
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.source.fetch_leaderboard()
    }

    pub fn transactions(&self) -> Result<Vec<BarkTransaction>> {
        self.source.fetch_transactions()
    }

    pub fn swap_quote(&self, from: &str, to: &str, amount: f64) -> Result<SwapQuote> {
        self.source.swap_quote(from, to, amount)
    }

    pub fn execute_swap(&self, quote: &SwapQuote) -> Result<BarkTransaction> {
        self.source.execute_swap(quote)
    }

    pub fn notifications(&self) -> Result<Vec<Notification>> {
        self.source.notifications()
    }

    pub fn mark_notifications_read(&self) -> Result<()> {
        self.source.mark_notifications_read()
    }
}

/// Handle for blink queries and creation.
pub struct BlinkHandle {
    source: Arc<dyn DataSource>,
}

impl BlinkHandle {
    pub fn list(&self) -> Result<Vec<Blink>> {
        self.source.fetch_blinks()
    }

    pub fn search(&self, term: &str) -> Result<Vec<Blink>> {
        self.source.search_blinks(term)
    }

    pub fn create(&self, draft: BlinkDraft) -> Result<Blink> {
        self.source.create_blink(draft)
    }
}

/// Handle for staking state and operations.
pub struct StakingHandle {
    source: Arc<dyn DataSource>,
}

impl StakingHandle {
    pub fn info(&self) -> Result<StakingInfo> {
        self.source.fetch_staking_info()
    }

    pub fn stake(&self, amount: f64) -> Result<BarkTransaction> {
        self.source.stake(amount)
    }

    pub fn unstake(&self, amount: f64) -> Result<BarkTransaction> {
        self.source.unstake(amount)
    }

    pub fn claim_rewards(&self) -> Result<BarkTransaction> {
        self.source.claim_rewards()
    }
}

/// Handle for the commerce catalog.
pub struct CommerceHandle {
    source: Arc<dyn DataSource>,
}

impl CommerceHandle {
    pub fn list(&self) -> Result<Vec<CommerceItem>> {
        self.source.fetch_commerce_items()
    }

    pub fn purchase(&self, item_id: &str) -> Result<BarkTransaction> {
        self.source.purchase_item(item_id)
    }
}

/// Handle for market data.
pub struct MarketHandle {
    source: Arc<dyn DataSource>,
}

impl MarketHandle {
    pub fn prices(&self, network: &str, addresses: &[String]) -> Result<MarketPrices> {
        self.source.fetch_token_prices(network, addresses)
    }

    pub fn chart(
        &self,
        network: &str,
        address: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>> {
        self.source.fetch_market_chart(network, address, timeframe)
    }

    pub fn token_info(&self, network: &str, address: &str) -> Result<TokenInfo> {
        self.source.fetch_token_info(network, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_source() {
        let client = Client::mock();
        let other = client.clone();

        client.blinks().create(BlinkDraft::default()).unwrap();

        let blinks = other.blinks().list().unwrap();
        assert_eq!(blinks.len(), 4);
        assert_eq!(blinks[0].name, "New Blink");
    }

    #[test]
    fn test_handles_route_to_the_same_state() {
        let client = Client::mock();

        client.staking().stake(10.0).unwrap();
        let history = client.transactions().unwrap();
        assert_eq!(history.len(), 4);
    }
}
