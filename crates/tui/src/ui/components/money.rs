use engine::Balance;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// A balance with its currency symbol and two decimals, colored by sign.
/// Balances that are not numbers are shown in the error color.
#[must_use]
pub fn styled_balance(balance: Balance, symbol: &str, theme: &Theme) -> Span<'static> {
    let value = balance.value();
    let color = if value.is_nan() {
        theme.error
    } else if value < 0.0 {
        theme.negative
    } else if value > 0.0 {
        theme.positive
    } else {
        theme.text
    };

    Span::styled(
        balance.format_with(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
