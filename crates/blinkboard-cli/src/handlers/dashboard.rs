use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_types::TimeRange;

use crate::args::OutputFormat;
use crate::presentation::{CommandResult, ConsoleRenderer, DashboardViewModel, Guidance, Renderer};

pub fn handle(client: &Client, range: &str, format: OutputFormat) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let data = client.dashboard(range)?;

    let unread = data.unread_notifications();
    let mut result = CommandResult::new(DashboardViewModel::from_data(&data));
    if unread > 0 {
        result = result.with_suggestion(Guidance::new(
            format!("{} unread notifications", unread),
            "blinkboard notification list",
        ));
    }

    ConsoleRenderer::new(format.is_json()).render(result)
}
