use std::time::Duration;
use std::time::Instant;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CommandRequest;
use crate::domain::models::CommandType;
use crate::domain::models::DispatcherBox;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

const INTENSITY_STEP: u8 = 5;
const MAX_INTENSITY: u8 = 100;
const DEFAULT_DURATION_MS: u64 = 300;

pub struct AppStateProps {
    pub command_type: CommandType,
    pub duration_ms: u64,
    pub dispatch_interval: Duration,
}

impl Default for AppStateProps {
    fn default() -> AppStateProps {
        let command_type =
            CommandType::parse(&Config::get(ConfigKey::CommandType)).unwrap_or_default();
        let duration_ms = Config::get(ConfigKey::DurationMs)
            .parse::<u64>()
            .unwrap_or(DEFAULT_DURATION_MS);

        return AppStateProps {
            command_type,
            duration_ms,
            dispatch_interval: Duration::from_secs(1),
        };
    }
}

/// The interaction loop's session state. Owned by the loop, mutated only by
/// its own event handling, gone when the loop exits.
pub struct AppState {
    pub command_type: CommandType,
    pub dispatch_interval: Duration,
    pub duration_ms: u64,
    pub intensity: u8,
    pub last_dispatch: Option<Instant>,
    pub running: bool,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            command_type: props.command_type,
            dispatch_interval: props.dispatch_interval,
            duration_ms: props.duration_ms,
            intensity: 0,
            last_dispatch: None,
            running: true,
        };
    }

    pub fn increase(&mut self) {
        self.intensity = (self.intensity + INTENSITY_STEP).min(MAX_INTENSITY);
    }

    pub fn decrease(&mut self) {
        self.intensity = self.intensity.saturating_sub(INTENSITY_STEP);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::IntensityUp => self.increase(),
            Event::IntensityDown => self.decrease(),
            Event::Quit => self.running = false,
            Event::UITick => {}
        }
    }

    /// A dispatch is due when there is something to send and the last
    /// acknowledged dispatch is at least one interval old. Failed dispatches
    /// never advance the timestamp, so they stay due on every tick.
    pub fn should_dispatch(&self, now: Instant) -> bool {
        if self.intensity == 0 {
            return false;
        }

        return match self.last_dispatch {
            Some(last) => now.duration_since(last) >= self.dispatch_interval,
            None => true,
        };
    }

    pub async fn dispatch_due(&mut self, dispatcher: &DispatcherBox, now: Instant) -> bool {
        if !self.should_dispatch(now) {
            return false;
        }

        let request = CommandRequest::new(self.command_type, self.intensity, self.duration_ms);
        if dispatcher.dispatch(request).await {
            self.last_dispatch = Some(now);
            return true;
        }

        return false;
    }
}
