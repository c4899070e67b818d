use std::sync::Mutex;
use std::time::Duration;

use blinkboard_types::{
    BarkTransaction, Blink, BlinkDraft, CommerceItem, DashboardData, EngagementSummary,
    GovernanceProposal, LeaderboardEntry, MarketPrices, Notification, PerformanceBreakdown,
    PricePoint, ProposalStatus, SeriesPoint, StakingInfo, SwapQuote, TimeRange, Timeframe,
    TokenInfo, TransactionKind, TransactionStatus,
};
use chrono::{Duration as ChronoDuration, Utc};

use crate::error::{Error, Result};
use crate::source::DataSource;

const SWAP_RATE: f64 = 1.5;
const QUOTE_TTL_SECS: i64 = 60;
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

struct MockState {
    blinks: Vec<Blink>,
    notifications: Vec<Notification>,
    transactions: Vec<BarkTransaction>,
    staking: StakingInfo,
    next_blink_id: usize,
    next_tx_id: usize,
}

/// In-memory data source with the dashboard's demo dataset.
///
/// Mutations (create, stake, purchase) behave like the real service would:
/// ids are assigned, counters start at zero, transactions land in the
/// history. Latency is a test/demo seam, not a behavior -- it defaults to
/// zero and a real deployment swaps this source out entirely.
pub struct MockApi {
    state: Mutex<MockState>,
    latency: Duration,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    pub fn new() -> Self {
        let blinks = seed_blinks();
        let transactions = seed_transactions();
        let next_blink_id = blinks.len() + 1;
        let next_tx_id = transactions.len() + 1;

        Self {
            state: Mutex::new(MockState {
                blinks,
                notifications: seed_notifications(),
                transactions,
                staking: StakingInfo {
                    total_staked: 10_000.0,
                    apr: 5.0,
                    user_staked: 100.0,
                    rewards: 5.0,
                },
                next_blink_id,
                next_tx_id,
            }),
            latency: Duration::ZERO,
        }
    }

    /// Delay every call by `latency`, approximating the original service's
    /// simulated network round trip for demos.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }

    fn record_transaction(
        state: &mut MockState,
        kind: TransactionKind,
        amount: f64,
    ) -> BarkTransaction {
        let tx = BarkTransaction {
            id: state.next_tx_id.to_string(),
            kind,
            amount,
            status: TransactionStatus::Completed,
            timestamp: Utc::now(),
        };
        state.next_tx_id += 1;
        state.transactions.insert(0, tx.clone());
        tx
    }
}

impl DataSource for MockApi {
    fn fetch_dashboard(&self, range: TimeRange) -> Result<DashboardData> {
        self.simulate_latency();
        let state = self.state.lock().unwrap();

        let blink_creation = MONTH_LABELS
            .iter()
            .take(range.months())
            .enumerate()
            .map(|(i, label)| SeriesPoint::new(*label, 10.0 + 5.0 * i as f64))
            .collect();

        Ok(DashboardData {
            total_blinks: state.blinks.len() as u64,
            balance: 1_000.0,
            blink_creation,
            market_overview: vec![
                SeriesPoint::new("BARK", 0.5),
                SeriesPoint::new("SOL", 50.0),
                SeriesPoint::new("USDC", 1.0),
            ],
            performance: PerformanceBreakdown {
                engagement: vec![
                    SeriesPoint::new("Likes", 500.0),
                    SeriesPoint::new("Shares", 200.0),
                    SeriesPoint::new("Views", 1_000.0),
                ],
                revenue: vec![
                    SeriesPoint::new("Ad Revenue", 100.0),
                    SeriesPoint::new("Tips", 50.0),
                    SeriesPoint::new("Sponsorships", 200.0),
                ],
            },
            engagement: EngagementSummary {
                daily_active_users: 1_000,
                blink_creation_rate: 50,
                community_interaction: 75,
            },
            governance: seed_proposals(),
            leaderboard: seed_leaderboard(),
            blinks: state.blinks.clone(),
            notifications: state.notifications.clone(),
        })
    }

    fn fetch_blinks(&self) -> Result<Vec<Blink>> {
        self.simulate_latency();
        Ok(self.state.lock().unwrap().blinks.clone())
    }

    fn search_blinks(&self, term: &str) -> Result<Vec<Blink>> {
        self.simulate_latency();
        let needle = term.to_lowercase();
        let state = self.state.lock().unwrap();

        Ok(state
            .blinks
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&needle)
                    || b.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    fn create_blink(&self, draft: BlinkDraft) -> Result<Blink> {
        self.simulate_latency();
        let mut state = self.state.lock().unwrap();

        let blink = Blink {
            id: state.next_blink_id.to_string(),
            name: draft.name.unwrap_or_else(|| "New Blink".to_string()),
            description: draft
                .description
                .unwrap_or_else(|| "New Blink Description".to_string()),
            image: draft.image,
            created_at: Utc::now(),
            likes: 0,
            shares: 0,
            comments: 0,
            views: 0,
        };
        state.next_blink_id += 1;
        state.blinks.insert(0, blink.clone());

        Ok(blink)
    }

    fn fetch_governance(&self) -> Result<Vec<GovernanceProposal>> {
        self.simulate_latency();
        Ok(seed_proposals())
    }

    fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.simulate_latency();
        Ok(seed_leaderboard())
    }

    fn fetch_commerce_items(&self) -> Result<Vec<CommerceItem>> {
        self.simulate_latency();
        Ok(seed_commerce_items())
    }

    fn purchase_item(&self, item_id: &str) -> Result<BarkTransaction> {
        self.simulate_latency();
        let item = seed_commerce_items()
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| Error::NotFound(format!("commerce item '{}'", item_id)))?;

        let mut state = self.state.lock().unwrap();
        Ok(Self::record_transaction(
            &mut state,
            TransactionKind::Purchase,
            item.price,
        ))
    }

    fn fetch_staking_info(&self) -> Result<StakingInfo> {
        self.simulate_latency();
        Ok(self.state.lock().unwrap().staking.clone())
    }

    fn stake(&self, amount: f64) -> Result<BarkTransaction> {
        self.simulate_latency();
        if amount <= 0.0 {
            return Err(Error::InvalidInput(
                "stake amount must be positive".to_string(),
            ));
        }

        let mut state = self.state.lock().unwrap();
        state.staking.user_staked += amount;
        state.staking.total_staked += amount;
        Ok(Self::record_transaction(
            &mut state,
            TransactionKind::Stake,
            amount,
        ))
    }

    fn unstake(&self, amount: f64) -> Result<BarkTransaction> {
        self.simulate_latency();
        if amount <= 0.0 {
            return Err(Error::InvalidInput(
                "unstake amount must be positive".to_string(),
            ));
        }

        let mut state = self.state.lock().unwrap();
        if amount > state.staking.user_staked {
            return Err(Error::InvalidInput(format!(
                "cannot unstake {} BARK: only {} staked",
                amount, state.staking.user_staked
            )));
        }

        state.staking.user_staked -= amount;
        state.staking.total_staked -= amount;
        Ok(Self::record_transaction(
            &mut state,
            TransactionKind::Unstake,
            amount,
        ))
    }

    fn claim_rewards(&self) -> Result<BarkTransaction> {
        self.simulate_latency();
        let mut state = self.state.lock().unwrap();
        let rewards = state.staking.rewards;
        state.staking.rewards = 0.0;
        Ok(Self::record_transaction(
            &mut state,
            TransactionKind::Claim,
            rewards,
        ))
    }

    fn swap_quote(&self, from: &str, to: &str, amount: f64) -> Result<SwapQuote> {
        self.simulate_latency();
        if amount <= 0.0 {
            return Err(Error::InvalidInput(
                "swap amount must be positive".to_string(),
            ));
        }

        Ok(SwapQuote {
            from_token: from.to_string(),
            to_token: to.to_string(),
            from_amount: amount,
            to_amount: amount * SWAP_RATE,
            exchange_rate: SWAP_RATE,
            expires_at: Utc::now() + ChronoDuration::seconds(QUOTE_TTL_SECS),
        })
    }

    fn execute_swap(&self, quote: &SwapQuote) -> Result<BarkTransaction> {
        self.simulate_latency();
        if quote.is_expired(Utc::now()) {
            return Err(Error::InvalidInput(format!(
                "quote {} -> {} expired",
                quote.from_token, quote.to_token
            )));
        }

        let mut state = self.state.lock().unwrap();
        Ok(Self::record_transaction(
            &mut state,
            TransactionKind::Swap,
            quote.from_amount,
        ))
    }

    fn fetch_transactions(&self) -> Result<Vec<BarkTransaction>> {
        self.simulate_latency();
        Ok(self.state.lock().unwrap().transactions.clone())
    }

    fn fetch_token_prices(&self, _network: &str, addresses: &[String]) -> Result<MarketPrices> {
        self.simulate_latency();
        Ok(addresses
            .iter()
            .enumerate()
            .map(|(i, address)| (address.clone(), 1.0 + i as f64 * 0.1))
            .collect())
    }

    fn fetch_market_chart(
        &self,
        network: &str,
        address: &str,
        timeframe: Timeframe,
    ) -> Result<Vec<PricePoint>> {
        self.simulate_latency();

        let step = match timeframe {
            Timeframe::Day => ChronoDuration::hours(1),
            Timeframe::Week | Timeframe::Month => ChronoDuration::days(1),
        };
        let points = timeframe.points();
        let now = Utc::now();
        let mut seed = chart_seed(network, address);

        // Oldest point first; prices wander deterministically in [1.0, 1.2)
        // so charts are reproducible across runs.
        let chart = (0..points)
            .map(|i| {
                let at = now - step * (points - 1 - i) as i32;
                PricePoint {
                    date: at.format("%b %-d").to_string(),
                    price: next_price(&mut seed),
                }
            })
            .collect();

        Ok(chart)
    }

    fn fetch_token_info(&self, _network: &str, _address: &str) -> Result<TokenInfo> {
        self.simulate_latency();
        Ok(TokenInfo {
            name: "BARK Token".to_string(),
            symbol: "BARK".to_string(),
            current_price: 1.05,
            market_cap: 1_000_000.0,
            total_volume: 500_000.0,
            high_24h: 1.1,
            low_24h: 1.0,
            price_change_percentage_24h: 5.0,
        })
    }

    fn notifications(&self) -> Result<Vec<Notification>> {
        self.simulate_latency();
        Ok(self.state.lock().unwrap().notifications.clone())
    }

    fn mark_notifications_read(&self) -> Result<()> {
        self.simulate_latency();
        let mut state = self.state.lock().unwrap();
        for notification in &mut state.notifications {
            notification.read = true;
        }
        Ok(())
    }
}

fn chart_seed(network: &str, address: &str) -> u64 {
    network
        .bytes()
        .chain(address.bytes())
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
            (acc ^ b as u64).wrapping_mul(0x100_0000_01b3)
        })
        | 1
}

fn next_price(seed: &mut u64) -> f64 {
    *seed ^= *seed << 13;
    *seed ^= *seed >> 7;
    *seed ^= *seed << 17;
    1.0 + (*seed % 1_000) as f64 / 5_000.0
}

fn seed_blinks() -> Vec<Blink> {
    let now = Utc::now();
    let mk = |id: &str, name: &str, description: &str, likes, shares, views| Blink {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: None,
        created_at: now,
        likes,
        shares,
        comments: 0,
        views,
    };

    vec![
        mk("1", "First Blink", "This is the first blink", 10, 5, 100),
        mk("2", "Second Blink", "This is the second blink", 20, 8, 150),
        mk("3", "Third Blink", "This is the third blink", 15, 3, 80),
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification::unread("1", "New follower"),
        Notification {
            id: "2".to_string(),
            message: "Your blink was liked".to_string(),
            read: true,
        },
    ]
}

fn seed_transactions() -> Vec<BarkTransaction> {
    let now = Utc::now();
    let mk = |id: &str, kind, amount| BarkTransaction {
        id: id.to_string(),
        kind,
        amount,
        status: TransactionStatus::Completed,
        timestamp: now,
    };

    vec![
        mk("1", TransactionKind::Swap, 100.0),
        mk("2", TransactionKind::Purchase, 20.0),
        mk("3", TransactionKind::Stake, 50.0),
    ]
}

fn seed_proposals() -> Vec<GovernanceProposal> {
    let now = Utc::now();
    vec![
        GovernanceProposal {
            id: "1".to_string(),
            title: "Proposal 1".to_string(),
            votes: 100,
            status: ProposalStatus::Active,
            created_at: now,
        },
        GovernanceProposal {
            id: "2".to_string(),
            title: "Proposal 2".to_string(),
            votes: 75,
            status: ProposalStatus::Ended,
            created_at: now,
        },
    ]
}

fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    let now = Utc::now();
    let mk = |id: &str, name: &str, blinks, likes, rank| LeaderboardEntry {
        id: id.to_string(),
        name: name.to_string(),
        blinks,
        likes,
        rank,
        joined_at: now,
    };

    vec![
        mk("1", "User 1", 50, 1_000, 1),
        mk("2", "User 2", 45, 900, 2),
        mk("3", "User 3", 40, 800, 3),
    ]
}

fn seed_commerce_items() -> Vec<CommerceItem> {
    let now = Utc::now();
    vec![
        CommerceItem {
            id: "1".to_string(),
            name: "BARK T-Shirt".to_string(),
            description: "Cool BARK T-Shirt".to_string(),
            price: 20.0,
            listed_at: now,
        },
        CommerceItem {
            id: "2".to_string(),
            name: "BARK Mug".to_string(),
            description: "BARK Coffee Mug".to_string(),
            price: 10.0,
            listed_at: now,
        },
    ]
}
