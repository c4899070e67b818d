use anyhow::Result;
use blinkboard_client::Client;

use crate::args::{OutputFormat, StakeCommand};
use crate::presentation::{
    CommandResult, ConsoleRenderer, Guidance, Renderer, StakingViewModel, TransactionViewModel,
};

pub fn handle(client: &Client, command: StakeCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format.is_json());
    let staking = client.staking();

    match command {
        StakeCommand::Info => {
            let info = staking.info()?;
            let mut result = CommandResult::new(StakingViewModel::from_info(&info));
            if info.rewards > 0.0 {
                result = result.with_suggestion(Guidance::new(
                    "Claim your rewards",
                    "blinkboard stake claim",
                ));
            }
            renderer.render(result)
        }
        StakeCommand::Add { amount } => {
            let tx = staking.stake(amount)?;
            renderer.render(CommandResult::new(TransactionViewModel::from_transaction(
                &tx,
            )))
        }
        StakeCommand::Remove { amount } => {
            let tx = staking.unstake(amount)?;
            renderer.render(CommandResult::new(TransactionViewModel::from_transaction(
                &tx,
            )))
        }
        StakeCommand::Claim => {
            let tx = staking.claim_rewards()?;
            renderer.render(CommandResult::new(TransactionViewModel::from_transaction(
                &tx,
            )))
        }
    }
}
