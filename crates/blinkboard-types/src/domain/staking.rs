use serde::{Deserialize, Serialize};

/// Pool-wide and per-user staking figures for the staking page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingInfo {
    /// Total BARK staked across the pool.
    pub total_staked: f64,
    /// Annual percentage rate, e.g. 5.0 for 5%.
    pub apr: f64,
    /// BARK staked by the connected wallet.
    pub user_staked: f64,
    /// Unclaimed rewards for the connected wallet.
    pub rewards: f64,
}
