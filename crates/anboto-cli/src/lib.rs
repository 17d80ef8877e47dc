/*
[INPUT]:  CLI modules
[OUTPUT]: Public anboto-cli library surface
[POS]:    Crate root - module wiring
[UPDATE]: When adding new CLI modules
*/

pub mod commands;
pub mod config;

pub use commands::{Command, CreateOrderArgs, execute, render};
pub use config::CliConfig;
