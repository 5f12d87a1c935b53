use engine::Field;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Focus},
    ui::{components::card::Card, screens::field_spans, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let focused = state.focus == Focus::Form && !state.is_editing() && state.confirm.is_none();
    let card = Card::new("New entry", &theme).focused(focused);

    let draft = state.ledger.create_draft();
    let focus = focused.then_some(state.form_field);

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.extend(field_spans(draft, field, focus, &theme));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(card.block()), area);
}
