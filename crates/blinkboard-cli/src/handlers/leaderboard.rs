use anyhow::Result;
use blinkboard_client::Client;

use crate::args::OutputFormat;
use crate::presentation::{CommandResult, ConsoleRenderer, LeaderboardViewModel, Renderer};

pub fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let entries = client.leaderboard()?;
    let result = CommandResult::new(LeaderboardViewModel::new(&entries));
    ConsoleRenderer::new(format.is_json()).render(result)
}
