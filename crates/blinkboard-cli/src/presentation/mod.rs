pub mod formatters;
mod renderers;
mod view_models;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::*;
