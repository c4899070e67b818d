use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::blink::Blink;
use super::governance::GovernanceProposal;
use super::notification::Notification;
use crate::error::Error;
use crate::record::Record;

/// Time range selector for dashboard aggregates ("Last 6 Months" dropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::SixMonths
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            other => Err(Error::Parse(format!("unknown time range '{}'", other))),
        }
    }
}

impl TimeRange {
    /// Number of monthly points the creation chart covers.
    pub fn months(self) -> usize {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }
}

/// One labelled value in a chart series ("Jan" -> 400, "Likes" -> 500).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Engagement vs revenue breakdown for the performance pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBreakdown {
    pub engagement: Vec<SeriesPoint>,
    pub revenue: Vec<SeriesPoint>,
}

/// Headline engagement percentages for the progress bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub daily_active_users: u64,
    pub blink_creation_rate: u64,
    pub community_interaction: u64,
}

/// A ranked community leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub blinks: u64,
    pub likes: u64,
    pub rank: u32,
    pub joined_at: DateTime<Utc>,
}

impl Record for LeaderboardEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn sort_key(&self) -> f64 {
        self.likes as f64
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// Everything the dashboard summary panels render, fetched in one call for a
/// given time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_blinks: u64,
    /// BARK balance of the connected wallet.
    pub balance: f64,
    pub blink_creation: Vec<SeriesPoint>,
    pub market_overview: Vec<SeriesPoint>,
    pub performance: PerformanceBreakdown,
    pub engagement: EngagementSummary,
    pub governance: Vec<GovernanceProposal>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub blinks: Vec<Blink>,
    pub notifications: Vec<Notification>,
}

impl DashboardData {
    /// Count of notifications the user has not read yet.
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
