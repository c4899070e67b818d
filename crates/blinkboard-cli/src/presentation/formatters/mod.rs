pub mod number;
pub mod text;
pub mod time;
