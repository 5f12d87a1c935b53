use engine::{Entry, Field, date};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{card::Card, hints, money},
        screens::field_spans,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let focused = state.focus == Focus::List || state.is_editing();
    let block = Card::new("Entries", &theme).focused(focused).block();
    let entries = state.ledger.entries();

    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No entries yet.",
                Style::default().fg(theme.text_muted),
            )))
            .alignment(Alignment::Center)
            .block(block),
            area,
        );
        return;
    }

    let editing = state.ledger.editing_index();
    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if editing == Some(index) {
                edit_item(state, &theme)
            } else {
                view_item(entry, &state.currency_symbol, &theme)
            }
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(editing.or(Some(state.selected)));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn view_item(entry: &Entry, symbol: &str, theme: &Theme) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<20}", entry.account), Style::default().fg(theme.text)),
        Span::raw(" "),
        money::styled_balance(entry.balance, symbol, theme),
        Span::raw("  "),
        Span::styled(date::format_iso(entry.date), Style::default().fg(theme.text_muted)),
    ]))
}

fn edit_item(state: &AppState, theme: &Theme) -> ListItem<'static> {
    let Some(draft) = state.ledger.edit_draft() else {
        return ListItem::new(Line::from(""));
    };
    let focus = state.confirm.is_none().then_some(state.edit_field);

    let mut lines: Vec<Line<'static>> = Field::ALL
        .into_iter()
        .map(|field| Line::from(field_spans(draft, field, focus, theme)))
        .collect();
    lines.push(Line::from(hints::hints_to_spans(&hints::row_editing(), theme)));

    ListItem::new(Text::from(lines))
}
