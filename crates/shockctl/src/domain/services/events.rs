use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::time;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

// The sleep doubles as the loop's tick rate.
const TICK_RATE_MS: u64 = 100;

pub struct EventsService {
    crossterm_events: EventStream,
}

impl EventsService {
    pub fn new() -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind != KeyEventKind::Press {
                    return None;
                }

                match keyevent.code {
                    KeyCode::Up => {
                        return Some(Event::IntensityUp);
                    }
                    KeyCode::Down => {
                        return Some(Event::IntensityDown);
                    }
                    KeyCode::Char('q') => {
                        return Some(Event::Quit);
                    }
                    KeyCode::Char('c') if keyevent.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Some(Event::Quit);
                    }
                    _ => {
                        return None;
                    }
                }
            }
            _ => {
                return None;
            }
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(TICK_RATE_MS)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

impl Default for EventsService {
    fn default() -> EventsService {
        return EventsService::new();
    }
}
