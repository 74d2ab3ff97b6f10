use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

/// Command types understood by the OpenShock control endpoint. Serde keeps the
/// variant casing for the wire format, strum lowercases for CLI and config.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumVariantNames,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandType {
    #[default]
    Shock,
    Vibrate,
}

impl CommandType {
    pub fn parse(s: &str) -> Option<CommandType> {
        return CommandType::iter().find(|e| return e.to_string() == s);
    }
}

/// One outbound command for the configured device. Constructed fresh per
/// dispatch and never retained. Always exclusive: it preempts whatever else is
/// active on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub command_type: CommandType,
    pub intensity: u8,
    pub duration_ms: u64,
    pub exclusive: bool,
}

impl CommandRequest {
    pub fn new(command_type: CommandType, intensity: u8, duration_ms: u64) -> CommandRequest {
        return CommandRequest {
            command_type,
            intensity: intensity.min(100),
            duration_ms,
            exclusive: true,
        };
    }
}
