pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus, StatusLevel};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // New entry form
            Constraint::Min(0),    // Entries
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_title(frame, layout[0], state, &theme);
    screens::form::render(frame, layout[1], state);
    screens::entries::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], state, &theme);
    components::confirm::render(frame, area, state.confirm.as_ref());
}

fn render_title(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![Span::styled(
        "My Finance Tracker",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )];

    if let Some(status) = &state.status {
        let color = match status.level {
            StatusLevel::Info => theme.text_muted,
            StatusLevel::Success => theme.positive,
        };
        parts.push(Span::raw("   "));
        parts.push(Span::styled(status.message.clone(), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.confirm.is_some() {
        components::hints::confirming()
    } else if state.is_editing() {
        components::hints::row_editing()
    } else {
        match state.focus {
            Focus::Form => components::hints::form_editing(),
            Focus::List => components::hints::list_navigation(),
        }
    };

    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use engine::{Entry, Ledger};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{app::App, config::AppConfig};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        let ledger = Ledger::builder()
            .today(day(2024, 6, 1))
            .entry(Entry::new("Checking", 100.5, day(2024, 1, 10)))
            .entry(Entry::new("Savings", 50.0, day(2024, 1, 15)))
            .build();
        App::with_ledger(&AppConfig::default(), ledger)
    }

    fn draw(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app.state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    fn position(lines: &[String], needle: &str) -> Option<usize> {
        lines.iter().position(|line| line.contains(needle))
    }

    #[test]
    fn renders_entries_newest_first_with_two_decimals() {
        let lines = draw(&app());

        assert!(screen_contains(&lines, "My Finance Tracker"));
        assert!(screen_contains(&lines, "Date: ← 2024-06-01"));
        assert!(screen_contains(&lines, "$100.50"));
        assert!(screen_contains(&lines, "$50.00"));
        assert!(position(&lines, "Savings") < position(&lines, "Checking"));
    }

    #[test]
    fn renders_edit_row_and_confirm_prompt() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let lines = draw(&app);
        assert!(screen_contains(&lines, "Account: Savings"));
        assert!(screen_contains(&lines, "Balance: 50"));

        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        let lines = draw(&app);
        assert!(screen_contains(&lines, engine::DELETE_PROMPT));
    }
}
