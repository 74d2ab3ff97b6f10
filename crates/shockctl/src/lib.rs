//! Terminal control panel for OpenShock devices.
//!
//! This crate renders a full-screen intensity meter driven by the arrow keys and
//! periodically forwards the current intensity as an exclusive control command
//! to the OpenShock API. It is the user-facing half of a very small system: one
//! keyboard, one device, one dispatch channel.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{bar_line, destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    CommandRequest, CommandType, Credentials, Dispatcher, DispatcherBox, DispatcherName, Event,
};
pub use domain::services::{AppState, AppStateProps, EventsService};
pub use infrastructure::clients::DispatcherManager;
