//! Catree command line support: commands, configuration and logging

pub mod cmd;
pub mod config;
pub mod logging;
pub mod util;
