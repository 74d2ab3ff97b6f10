//! Configuration management for the control panel.
//!
//! This module provides centralized handling of credentials, the endpoint, and
//! command parameters, merged from defaults, the config file, and the CLI.

mod config;

pub use config::*;
