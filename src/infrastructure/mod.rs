//! Infrastructure layer: CLI arguments and log configuration.

pub mod config;

pub use config::{CliArgs, LogLevel};
