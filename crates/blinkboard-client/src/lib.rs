//! blinkboard-client: the data-fetch collaborator.
//!
//! The list view operates purely on in-memory collections; this crate is
//! where those collections come from. [`DataSource`] is the
//! fetch-and-replace contract (every fetch returns a full collection or
//! aggregate, never a delta), [`MockApi`] is the in-memory implementation the
//! dashboard demos against, and [`Client`] is the facade handlers talk to.

mod client;
mod error;
mod mock;
mod source;

pub use client::{BlinkHandle, Client, CommerceHandle, MarketHandle, StakingHandle};
pub use error::{Error, Result};
pub use mock::MockApi;
pub use source::DataSource;
