//! Core domain logic for the control panel.
//!
//! This module contains the session state machine and data models that drive
//! the terminal UI, independent of the terminal backend or the HTTP transport.

pub mod models;
pub mod services;
