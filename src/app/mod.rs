pub mod commands;
pub mod query;

pub use commands::*;
pub use query::*;
