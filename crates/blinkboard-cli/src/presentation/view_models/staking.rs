use std::fmt;

use blinkboard_types::StakingInfo;
use serde::Serialize;

use crate::presentation::formatters::number;

#[derive(Debug, Serialize)]
pub struct StakingViewModel {
    pub total_staked: f64,
    pub apr: f64,
    pub user_staked: f64,
    pub rewards: f64,
}

impl StakingViewModel {
    pub fn from_info(info: &StakingInfo) -> Self {
        Self {
            total_staked: info.total_staked,
            apr: info.apr,
            user_staked: info.user_staked,
            rewards: info.rewards,
        }
    }
}

impl fmt::Display for StakingViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Pool total: {}", number::format_bark(self.total_staked))?;
        writeln!(f, "APR: {:.1}%", self.apr)?;
        writeln!(f, "Your stake: {}", number::format_bark(self.user_staked))?;
        writeln!(f, "Unclaimed rewards: {}", number::format_bark(self.rewards))
    }
}
