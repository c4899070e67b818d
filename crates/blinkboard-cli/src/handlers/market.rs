use anyhow::Result;
use blinkboard_client::Client;
use blinkboard_types::Timeframe;

use crate::args::{MarketCommand, OutputFormat};
use crate::presentation::{
    ChartViewModel, CommandResult, ConsoleRenderer, PricesViewModel, Renderer, TokenInfoViewModel,
};

pub fn handle(client: &Client, command: MarketCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.is_json());
    let market = client.market();

    match command {
        MarketCommand::Prices { addresses, network } => {
            let prices = market.prices(&network, &addresses)?;
            renderer.render(CommandResult::new(PricesViewModel::new(&addresses, &prices)))
        }
        MarketCommand::Chart {
            address,
            timeframe,
            network,
        } => {
            let parsed: Timeframe = timeframe.parse()?;
            let points = market.chart(&network, &address, parsed)?;
            renderer.render(CommandResult::new(ChartViewModel::new(
                &address, &timeframe, points,
            )))
        }
        MarketCommand::Info { address, network } => {
            let info = market.token_info(&network, &address)?;
            renderer.render(CommandResult::new(TokenInfoViewModel::from_info(&info)))
        }
    }
}
