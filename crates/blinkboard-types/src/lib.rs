pub mod domain;
pub mod error;
mod record;

pub use domain::*;
pub use error::{Error, Result};
pub use record::{Record, SortOrder};
