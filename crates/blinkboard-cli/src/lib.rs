mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{
    BlinkCommand, Cli, Commands, CommerceCommand, MarketCommand, NotificationCommand,
    StakeCommand, SwapCommand,
};
pub use commands::run;
