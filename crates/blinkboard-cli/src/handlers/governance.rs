use anyhow::Result;
use blinkboard_client::Client;

use crate::args::OutputFormat;
use crate::presentation::{CommandResult, ConsoleRenderer, GovernanceViewModel, Renderer};

pub fn handle(client: &Client, format: OutputFormat) -> Result<()> {
    let proposals = client.governance()?;
    let result = CommandResult::new(GovernanceViewModel::new(&proposals));
    ConsoleRenderer::new(format.is_json()).render(result)
}
