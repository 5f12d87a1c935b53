pub mod entries;
pub mod form;

use engine::{Draft, Field};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Label and value of one draft field, with a cursor when focused.
pub(crate) fn field_spans(
    draft: &Draft,
    field: Field,
    focused: Option<Field>,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let is_focused = focused == Some(field);
    let cursor = if is_focused { "│" } else { "" };
    let value_style = if is_focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![
        Span::styled(format!("{}: ", field.label()), Style::default().fg(theme.text_muted)),
    ];
    if field == Field::Date {
        spans.push(Span::styled("← ", Style::default().fg(theme.text_muted)));
    }
    spans.push(Span::styled(format!("{}{cursor}", draft.field(field)), value_style));
    if field == Field::Date {
        spans.push(Span::styled(" →", Style::default().fg(theme.text_muted)));
    }
    spans
}
