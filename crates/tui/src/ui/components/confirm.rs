use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::ConfirmState,
    ui::{
        components::{centered_box, hints},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, confirm: Option<&ConfirmState>) {
    let Some(confirm) = confirm else {
        return;
    };
    let theme = Theme::default();
    let width = u16::try_from(confirm.message.chars().count() + 4).unwrap_or(u16::MAX);
    let popup = centered_box(width, 5, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" delete entry #{} ", confirm.index + 1))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error));

    let lines = vec![
        Line::from(confirm.message.as_str()),
        Line::from(""),
        Line::from(hints::hints_to_spans(&hints::confirming(), &theme)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
