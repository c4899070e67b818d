use anyhow::Result;
use blinkboard_client::Client;

use crate::args::OutputFormat;
use crate::presentation::{CommandResult, ConsoleRenderer, Renderer, TransactionListViewModel};

pub fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let transactions = client.transactions()?;
    let result = CommandResult::new(TransactionListViewModel::new(&transactions));
    ConsoleRenderer::new(format.is_json()).render(result)
}
