use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// Labelled single-line text field. Shows `placeholder` while empty.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else if focused {
        Span::styled(value.to_string(), Style::default().fg(theme.accent))
    } else {
        Span::styled(value.to_string(), Style::default().fg(theme.text))
    };

    let line = Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
        value_span,
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
