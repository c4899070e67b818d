mod blink;
mod commerce;
mod dashboard;
mod governance;
mod market;
mod notification;
mod staking;
mod transaction;

pub use blink::{Blink, BlinkDraft};
pub use commerce::CommerceItem;
pub use dashboard::{
    DashboardData, EngagementSummary, LeaderboardEntry, PerformanceBreakdown, SeriesPoint,
    TimeRange,
};
pub use governance::{GovernanceProposal, ProposalStatus};
pub use market::{MarketPrices, PricePoint, Timeframe, TokenInfo};
pub use notification::Notification;
pub use staking::StakingInfo;
pub use transaction::{BarkTransaction, SwapQuote, TransactionKind, TransactionStatus};
