use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_types::BlinkDraft;

use crate::args::OutputFormat;
use crate::presentation::{BlinkViewModel, CommandResult, ConsoleRenderer, Guidance, Renderer};

pub fn handle(
    client: &Client,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let draft = BlinkDraft {
        name,
        description,
        image,
    };
    let blink = client.blinks().create(draft)?;

    let result = CommandResult::new(BlinkViewModel::from_blink(&blink))
        .with_suggestion(Guidance::new("See it listed", "blinkboard blink list"));

    ConsoleRenderer::new(format.is_json()).render(result)
}
