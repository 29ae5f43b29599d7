pub mod app;
pub mod cli;
pub mod error;
pub mod output;
pub mod report;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
