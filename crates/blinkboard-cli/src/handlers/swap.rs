use anyhow::Result;
use blinkboard_client::Client;

use crate::args::{OutputFormat, SwapCommand};
use crate::presentation::{
    CommandResult, ConsoleRenderer, Guidance, Renderer, SwapQuoteViewModel, TransactionViewModel,
};

pub fn handle(client: &Client, command: SwapCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.is_json());

    match command {
        SwapCommand::Quote { from, to, amount } => {
            let quote = client.swap_quote(&from, &to, amount)?;
            let result = CommandResult::new(SwapQuoteViewModel::from_quote(&quote))
                .with_suggestion(Guidance::new(
                    "Execute it",
                    format!("blinkboard swap execute {} {} {}", from, to, amount),
                ));
            renderer.render(result)
        }
        SwapCommand::Execute { from, to, amount } => {
            let quote = client.swap_quote(&from, &to, amount)?;
            let tx = client.execute_swap(&quote)?;
            renderer.render(CommandResult::new(TransactionViewModel::from_transaction(
                &tx,
            )))
        }
    }
}
