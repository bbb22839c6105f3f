pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod scanner;

pub use cli::GlobalArgs;
pub use error::{Result, ScanError};
pub use scanner::engine::ScanEngine;
