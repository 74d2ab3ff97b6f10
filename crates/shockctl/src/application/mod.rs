//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing and the main UI loop. It wires the
//! domain state machine to the terminal backend and the command dispatcher.

pub mod cli;
pub mod ui;
