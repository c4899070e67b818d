//! Test support for the Blinkboard workspace.
//!
//! Seed collections mirror the dashboard's demo data so tests read like the
//! pages they cover, plus a recording sink for asserting notification side
//! effects.

mod fixtures;
mod sink;

pub use fixtures::{seed_blinks, seed_commerce_items, seed_proposals, seed_transactions};
pub use sink::RecordingSink;
