use blinkboard_types::{
    BarkTransaction, Blink, BlinkDraft, CommerceItem, DashboardData, GovernanceProposal,
    LeaderboardEntry, MarketPrices, Notification, PricePoint, StakingInfo, SwapQuote, TimeRange,
    Timeframe, TokenInfo,
};

use crate::error::Result;

/// Fetch-and-replace contract for everything the dashboard displays.
///
/// Every fetch returns a complete collection or aggregate that the caller
/// swaps in wholesale (`ListView::replace`); there are no deltas and no
/// retry policy. Failures are opaque to the view layer -- the caller
/// displays them and offers a retry affordance.
pub trait DataSource: Send + Sync {
    // Dashboard aggregates
    fn fetch_dashboard(&self, range: TimeRange) -> Result<DashboardData>;

    // Blinks
    fn fetch_blinks(&self) -> Result<Vec<Blink>>;
    fn search_blinks(&self, term: &str) -> Result<Vec<Blink>>;
    fn create_blink(&self, draft: BlinkDraft) -> Result<Blink>;

    // Governance & community
    fn fetch_governance(&self) -> Result<Vec<GovernanceProposal>>;
    fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;

    // Commerce
    fn fetch_commerce_items(&self) -> Result<Vec<CommerceItem>>;
    fn purchase_item(&self, item_id: &str) -> Result<BarkTransaction>;

    // Staking
    fn fetch_staking_info(&self) -> Result<StakingInfo>;
    fn stake(&self, amount: f64) -> Result<BarkTransaction>;
    fn unstake(&self, amount: f64) -> Result<BarkTransaction>;
    fn claim_rewards(&self) -> Result<BarkTransaction>;

    // Swaps & history
    fn swap_quote(&self, from: &str, to: &str, amount: f64) -> Result<SwapQuote>;
    fn execute_swap(&self, quote: &SwapQuote) -> Result<BarkTransaction>;
    fn fetch_transactions(&self) -> Result<Vec<BarkTransaction>>;

    // Market data
    fn fetch_token_prices(&self, network: &str, addresses: &[String]) -> Result<MarketPrices>;
    fn fetch_market_chart(
        &self,
        network: &str,
        address: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>>;
    fn fetch_token_info(&self, network: &str, address: &str) -> Result<TokenInfo>;

    // Notifications
    fn notifications(&self) -> Result<Vec<Notification>>;
    fn mark_notifications_read(&self) -> Result<()>;
}
