use clap::Subcommand;

use super::common::SortDirection;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard summary (balance, charts, engagement)
    Dashboard {
        /// Time range for the creation chart: 1m, 3m, 6m, or 1y
        #[arg(long, default_value = "6m")]
        range: String,
    },

    /// Blink listing, search, and creation
    Blink {
        #[command(subcommand)]
        command: BlinkCommand,
    },

    /// Governance proposals
    Governance,

    /// Community leaderboard
    Leaderboard,

    /// Commerce catalog and purchases
    Commerce {
        #[command(subcommand)]
        command: CommerceCommand,
    },

    /// Staking state and operations
    Stake {
        #[command(subcommand)]
        command: StakeCommand,
    },

    /// Token swaps
    Swap {
        #[command(subcommand)]
        command: SwapCommand,
    },

    /// Transaction history
    Tx,

    /// Token prices and charts
    Market {
        #[command(subcommand)]
        command: MarketCommand,
    },

    /// Notifications
    Notification {
        #[command(subcommand)]
        command: NotificationCommand,
    },
}

#[derive(Subcommand)]
pub enum BlinkCommand {
    /// List blinks, paged and sorted by likes
    List {
        /// Zero-based page to show (out-of-range pages clamp to the last one)
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Blinks per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Sort direction by likes
        #[arg(long, value_enum, default_value = "desc")]
        sort: SortDirection,

        /// Keep only blinks whose name or description contains this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Search interactively: reads terms from stdin (one per line) and
    /// applies each after the configured quiet interval, so a paste of
    /// successive refinements only recomputes once
    Find,

    /// Create a new blink (engagement counters start at zero)
    Create {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Image URL to attach
        #[arg(long)]
        image: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CommerceCommand {
    /// List items for sale, paged and sorted by price
    List {
        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, value_enum, default_value = "desc")]
        sort: SortDirection,

        #[arg(long)]
        search: Option<String>,
    },

    /// Purchase an item by id
    Buy { item_id: String },
}

#[derive(Subcommand)]
pub enum StakeCommand {
    /// Show pool and wallet staking figures
    Info,

    /// Stake BARK
    Add { amount: f64 },

    /// Unstake BARK
    Remove { amount: f64 },

    /// Claim accumulated rewards
    Claim,
}

#[derive(Subcommand)]
pub enum SwapCommand {
    /// Quote a swap without executing it
    Quote {
        from: String,
        to: String,
        amount: f64,
    },

    /// Quote and immediately execute a swap
    Execute {
        from: String,
        to: String,
        amount: f64,
    },
}

#[derive(Subcommand)]
pub enum MarketCommand {
    /// Spot prices for one or more token addresses
    Prices {
        #[arg(required = true)]
        addresses: Vec<String>,

        #[arg(long, default_value = "solana")]
        network: String,
    },

    /// Price chart for a token: 1d, 1w, or month
    Chart {
        address: String,

        #[arg(long, default_value = "1d")]
        timeframe: String,

        #[arg(long, default_value = "solana")]
        network: String,
    },

    /// Market snapshot for a token
    Info {
        address: String,

        #[arg(long, default_value = "solana")]
        network: String,
    },
}

#[derive(Subcommand)]
pub enum NotificationCommand {
    /// List notifications, unread first
    List,

    /// Mark all notifications as read
    Read,
}
