//! CLI command implementations

pub mod clear;
pub mod config;
pub mod import;
pub mod init;
pub mod store;
pub mod tree;
