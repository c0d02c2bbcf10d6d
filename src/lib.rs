pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod loader;
pub mod logging;
