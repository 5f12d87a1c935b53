use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn form_editing() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("←→", "date ±1"),
        KeyHint::new("Enter", "add"),
        KeyHint::new("Esc", "list"),
        KeyHint::new("Ctrl+C", "quit"),
    ]
}

pub fn list_navigation() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("Enter", "edit"),
        KeyHint::new("a", "add"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn row_editing() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("←→", "date ±1"),
        KeyHint::new("Enter", "save"),
        KeyHint::new("Esc", "cancel"),
        KeyHint::new("Ctrl+D", "delete"),
    ]
}

pub fn confirming() -> Vec<KeyHint> {
    vec![KeyHint::new("y", "delete"), KeyHint::new("n", "keep")]
}
