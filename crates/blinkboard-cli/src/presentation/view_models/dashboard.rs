use std::fmt;

use blinkboard_types::{DashboardData, SeriesPoint};
use serde::Serialize;

use super::governance::{GovernanceViewModel, LeaderboardViewModel};
use crate::presentation::formatters::number;

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub total_blinks: u64,
    pub balance: f64,
    pub unread_notifications: usize,
    pub blink_creation: Vec<SeriesPoint>,
    pub market_overview: Vec<SeriesPoint>,
    pub engagement: Vec<SeriesPoint>,
    pub revenue: Vec<SeriesPoint>,
    pub governance: GovernanceViewModel,
    pub leaderboard: LeaderboardViewModel,
}

impl DashboardViewModel {
    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            total_blinks: data.total_blinks,
            balance: data.balance,
            unread_notifications: data.unread_notifications(),
            blink_creation: data.blink_creation.clone(),
            market_overview: data.market_overview.clone(),
            engagement: data.performance.engagement.clone(),
            revenue: data.performance.revenue.clone(),
            governance: GovernanceViewModel::new(&data.governance),
            leaderboard: LeaderboardViewModel::new(&data.leaderboard),
        }
    }
}

fn write_series(f: &mut fmt::Formatter, title: &str, series: &[SeriesPoint]) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for point in series {
        writeln!(f, "  {:<14} {:>10}", point.label, point.value)?;
    }
    writeln!(f)
}

impl fmt::Display for DashboardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Balance: {}", number::format_bark(self.balance))?;
        writeln!(f, "Total blinks: {}", self.total_blinks)?;
        writeln!(f, "Unread notifications: {}", self.unread_notifications)?;
        writeln!(f)?;

        write_series(f, "Blinks created", &self.blink_creation)?;
        write_series(f, "Market overview", &self.market_overview)?;
        write_series(f, "Engagement", &self.engagement)?;
        write_series(f, "Revenue", &self.revenue)?;

        writeln!(f, "Governance:")?;
        write!(f, "{}", self.governance)?;
        writeln!(f)?;

        writeln!(f, "Leaderboard:")?;
        write!(f, "{}", self.leaderboard)
    }
}
