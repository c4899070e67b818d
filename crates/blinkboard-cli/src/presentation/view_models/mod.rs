mod blink;
mod commerce;
mod dashboard;
mod governance;
mod market;
mod notification;
mod result;
mod staking;
mod transaction;

pub use blink::{BlinkListViewModel, BlinkViewModel, PageSummary};
pub use commerce::CommerceListViewModel;
pub use dashboard::DashboardViewModel;
pub use governance::{GovernanceViewModel, LeaderboardViewModel};
pub use market::{ChartViewModel, PricesViewModel, TokenInfoViewModel};
pub use notification::NotificationListViewModel;
pub use result::{CommandResult, Guidance};
pub use staking::StakingViewModel;
pub use transaction::{SwapQuoteViewModel, TransactionListViewModel, TransactionViewModel};
