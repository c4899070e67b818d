use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use blinkboard_client::{Client, MockApi};

use super::args::{BlinkCommand, Cli, Commands, CommerceCommand};
use super::handlers;
use crate::config::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref());
    let config_path = config_dir.join("config.toml");
    let config = Config::load_from(&config_path)?;

    // First run: persist the defaults so users have a file to edit.
    if !config_path.exists() {
        config.save_to(&config_path)?;
    }

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let api = MockApi::new().with_latency(Duration::from_millis(config.mock_latency_ms));
    let client = Client::new(Arc::new(api));

    match command {
        Commands::Dashboard { range } => handlers::dashboard::handle(&client, &range, cli.format),

        Commands::Blink { command } => match command {
            BlinkCommand::List {
                page,
                page_size,
                sort,
                search,
            } => handlers::blink_list::handle(
                &client,
                config.blink_page_size,
                page,
                page_size,
                sort,
                search,
                cli.format,
            ),
            BlinkCommand::Find => handlers::blink_find::handle(
                &client,
                config.blink_page_size,
                Duration::from_millis(config.search_debounce_ms),
            ),
            BlinkCommand::Create {
                name,
                description,
                image,
            } => handlers::blink_create::handle(&client, name, description, image, cli.format),
        },

        Commands::Governance => handlers::governance::handle(&client, cli.format),

        Commands::Leaderboard => handlers::leaderboard::handle(&client, cli.format),

        Commands::Commerce { command } => match command {
            CommerceCommand::List {
                page,
                page_size,
                sort,
                search,
            } => handlers::commerce::handle_list(
                &client,
                config.commerce_page_size,
                page,
                page_size,
                sort,
                search,
                cli.format,
            ),
            CommerceCommand::Buy { item_id } => {
                handlers::commerce::handle_buy(&client, &item_id, cli.format)
            }
        },

        Commands::Stake { command } => handlers::stake::handle(&client, command, cli.format),

        Commands::Swap { command } => handlers::swap::handle(&client, command, cli.format),

        Commands::Tx => handlers::transactions::handle(&client, cli.format),

        Commands::Market { command } => handlers::market::handle(&client, command, cli.format),

        Commands::Notification { command } => {
            handlers::notifications::handle(&client, command, cli.format)
        }
    }
}

/// Priority: explicit flag, then `BLINKBOARD_PATH`, then the platform data
/// dir, then `~/.blinkboard`.
fn resolve_config_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_tilde(dir);
    }
    if let Ok(dir) = std::env::var("BLINKBOARD_PATH") {
        return expand_tilde(&dir);
    }
    if let Some(data) = dirs::data_dir() {
        return data.join("blinkboard");
    }
    expand_tilde("~/.blinkboard")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn show_guidance() {
    println!("blinkboard - BARK dashboard in your terminal\n");
    println!("Quick commands:");
    println!("  blinkboard dashboard              # Balance, charts, engagement");
    println!("  blinkboard blink list             # Browse blinks by likes");
    println!("  blinkboard blink list --search bark");
    println!("  blinkboard stake info             # Staking overview");
    println!("  blinkboard tx                     # Transaction history\n");
    println!("For more commands:");
    println!("  blinkboard --help");
}
