use anyhow::Result;
use blinkboard_client::Client;

use crate::args::{NotificationCommand, OutputFormat};
use crate::presentation::{CommandResult, ConsoleRenderer, NotificationListViewModel, Renderer};

pub fn handle(client: &Client, command: NotificationCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.is_json());

    match command {
        NotificationCommand::List => {
            let notifications = client.notifications()?;
            renderer.render(CommandResult::new(NotificationListViewModel::new(
                &notifications,
            )))
        }
        NotificationCommand::Read => {
            client.mark_notifications_read()?;
            let notifications = client.notifications()?;
            renderer.render(CommandResult::new(NotificationListViewModel::new(
                &notifications,
            )))
        }
    }
}
