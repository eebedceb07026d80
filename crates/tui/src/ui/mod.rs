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

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Title, balance sheet, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, layout[0], state, &theme);
    screens::balance_sheet::render(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);
    components::alert::render(frame, area, state.alert.as_deref());
}

fn render_title(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            state.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    use components::hints;

    let context = if state.alert.is_some() {
        hints::alert_hints()
    } else {
        hints::field_hints(state.form.focus)
    };

    let mut parts = hints::hints_to_spans(&context, theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(&hints::global_hints(), theme));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
