use ledger::amount::format_fixed;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Theme;

/// A totals line: muted label, two-decimal value.
#[must_use]
pub fn total_line(label: &str, value: f64, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
        Span::styled(format_fixed(value), Style::default().fg(theme.text)),
    ])
}

/// The balance line, bold and colored by sign.
///
/// - Positive: green
/// - Negative: red
/// - Zero or NaN: neutral text color
#[must_use]
pub fn balance_line(label: &str, value: f64, theme: &Theme) -> Line<'static> {
    let color = if value > 0.0 {
        theme.positive
    } else if value < 0.0 {
        theme.negative
    } else {
        theme.text
    };

    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
        Span::styled(
            format_fixed(value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
