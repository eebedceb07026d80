use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::{
    components::{centered_box, hints},
    theme::Theme,
};

const MIN_WIDTH: u16 = 30;

/// Modal notification drawn over the whole screen.
pub fn render(frame: &mut Frame<'_>, area: Rect, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };
    let theme = Theme::default();

    let width = (message.chars().count() as u16)
        .saturating_add(6)
        .max(MIN_WIDTH);
    let rect = centered_box(width, 5, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error));

    let lines = vec![
        Line::from(message.to_string()).style(Style::default().fg(theme.error)),
        Line::from(""),
        Line::from(hints::hints_to_spans(&hints::alert_hints(), &theme)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
