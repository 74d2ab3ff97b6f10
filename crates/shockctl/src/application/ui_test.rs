use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::*;
use crate::domain::models::CommandType;

fn state_with_intensity(intensity: u8) -> AppState {
    let mut state = AppState::new(AppStateProps {
        command_type: CommandType::Shock,
        duration_ms: 300,
        dispatch_interval: Duration::from_secs(1),
    });
    state.intensity = intensity;
    return state;
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    return (0..buffer.area.width)
        .map(|x| return buffer[(x, y)].symbol().to_string())
        .collect::<String>();
}

#[test]
fn it_fills_the_bar_proportionally() {
    assert_eq!(bar_line(0), "-".repeat(50));
    assert_eq!(bar_line(100), "#".repeat(50));

    let bar = bar_line(40);
    assert_eq!(bar.len(), 50);
    assert_eq!(bar.matches('#').count(), 20);
    assert_eq!(bar.matches('-').count(), 30);

    // Odd steps floor rather than round.
    assert_eq!(bar_line(5).matches('#').count(), 2);
    assert_eq!(bar_line(95).matches('#').count(), 47);
}

#[test]
fn it_renders_the_panel_centered() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let state = state_with_intensity(40);

    terminal.draw(|frame| render(frame, &state)).unwrap();

    // Height 24 centers on row 12; instructions and bar sit two rows out.
    assert!(row_text(&terminal, 10).contains(INSTRUCTIONS));
    assert!(row_text(&terminal, 12).contains("Intensity: 40%"));
    let bar_row = row_text(&terminal, 14);
    assert!(bar_row.contains(&format!("[{}{}]", "#".repeat(20), "-".repeat(30))));
}

#[test]
fn it_redraws_fully_each_frame() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    let state = state_with_intensity(100);
    terminal.draw(|frame| render(frame, &state)).unwrap();
    assert!(row_text(&terminal, 14).contains(&"#".repeat(50)));

    let state = state_with_intensity(0);
    terminal.draw(|frame| render(frame, &state)).unwrap();
    let bar_row = row_text(&terminal, 14);
    assert!(bar_row.contains(&"-".repeat(50)));
    assert!(!bar_row.contains('#'));
    assert!(row_text(&terminal, 12).contains("Intensity: 0%"));
}

#[test]
fn it_survives_tiny_terminals() {
    let backend = TestBackend::new(10, 2);
    let mut terminal = Terminal::new(backend).unwrap();
    let state = state_with_intensity(50);

    terminal.draw(|frame| render(frame, &state)).unwrap();
}
