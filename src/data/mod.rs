mod config;
mod output;

pub use config::*;
pub use output::*;
