use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;

use crate::domain::models::DispatcherBox;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

const BAR_CELLS: usize = 50;
const INSTRUCTIONS: &str = "Press Up/Down to adjust intensity. Press q to quit.";

/// 50-cell meter, filled proportionally to the intensity percentage.
pub fn bar_line(intensity: u8) -> String {
    let filled = usize::from(intensity.min(100)) * BAR_CELLS / 100;
    return format!("{}{}", "#".repeat(filled), "-".repeat(BAR_CELLS - filled));
}

fn draw_centered(frame: &mut Frame<'_>, area: Rect, row: u16, text: String) {
    let rect = Rect {
        x: area.x,
        y: area.y + row,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).alignment(Alignment::Center),
        rect,
    );
}

// Full clear-then-draw every frame. The terminal is small enough that partial
// updates are not worth the bookkeeping.
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mid = area.height / 2;
    let last_row = area.height - 1;

    draw_centered(
        frame,
        area,
        mid.saturating_sub(2),
        INSTRUCTIONS.to_string(),
    );
    draw_centered(frame, area, mid, format!("Intensity: {}%", state.intensity));
    draw_centered(
        frame,
        area,
        (mid + 2).min(last_row),
        format!("[{}]", bar_line(state.intensity)),
    );
}

/// Cleans up raw mode and the alternate screen when a panic fires mid-loop,
/// so the backtrace lands on a usable terminal.
pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    execute!(io::stdout(), LeaveAlternateScreen).unwrap();
    execute!(io::stdout(), cursor::Show).unwrap();
}

async fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dispatcher: DispatcherBox,
) -> Result<()> {
    let mut state = AppState::new(AppStateProps::default());
    let mut events = EventsService::new();

    while state.running {
        terminal.draw(|frame| render(frame, &state))?;

        let event = events.next().await?;
        state.handle_event(event);
        if !state.running {
            break;
        }

        // The dispatch awaits inline. Input and rendering stall while a
        // request is in flight.
        state.dispatch_due(&dispatcher, Instant::now()).await;
    }

    return Ok(());
}

pub async fn start_loop(dispatcher: DispatcherBox) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = main_loop(&mut terminal, dispatcher).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    return res;
}
