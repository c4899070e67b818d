// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Each dashboard page maps to one namespace (blink, commerce, stake, swap,
//   market, notification) plus top-level aggregates (dashboard, governance, tx)
// - Improves --help discoverability and conceptual clarity
// - Example: `blink list` vs `blink create` vs flat `list-blinks`

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "blinkboard")]
#[command(about = "Browse and manage BARK blinks from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Override the config directory (default: $BLINKBOARD_PATH, the
    /// platform data dir, or ~/.blinkboard)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
