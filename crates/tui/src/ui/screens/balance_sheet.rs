use ledger::{Transaction, TransactionKind, amount::format_plain};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{AppState, FormField},
    ui::{
        components::{card::Card, input::render_input, money},
        theme::Theme,
    },
};

/// Height of the form card (three rows plus borders).
pub const FORM_HEIGHT: u16 = 5;
/// Height of the totals card (three lines plus borders).
pub const TOTALS_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(TOTALS_HEIGHT),
        ])
        .split(area);

    render_form(frame, layout[0], state, &theme);
    render_table(frame, layout[1], state, &theme);
    render_totals(frame, layout[2], state, &theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Card::new("New transaction", theme).focused(state.alert.is_none()).block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount + type
            Constraint::Length(1), // Purpose
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    let first = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let focus = state.form.focus;
    let draft = state.ledger.draft();

    render_input(
        frame,
        first[0],
        "Amount",
        &state.form.amount_input,
        "Amount",
        focus == FormField::Amount,
        theme,
    );
    render_selector(frame, first[1], draft.kind, focus == FormField::Kind, theme);
    render_input(
        frame,
        rows[1],
        "Purpose",
        &draft.purpose,
        "Purpose",
        focus == FormField::Purpose,
        theme,
    );
    render_button(frame, rows[2], focus == FormField::Submit, theme);
}

/// Both options side by side, the selected one bracketed.
fn render_selector(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: TransactionKind,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = vec![Span::styled("Type: ", Style::default().fg(theme.text_muted))];
    for (i, kind) in TransactionKind::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if *kind == selected {
            let color = if focused { theme.accent } else { theme.text };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            spans.push(Span::styled("[", style));
            spans.push(Span::styled(kind.label(), style));
            spans.push(Span::styled("]", style));
        } else {
            spans.push(Span::styled(
                format!(" {} ", kind.label()),
                Style::default().fg(theme.text_muted),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_button(frame: &mut Frame<'_>, area: Rect, focused: bool, theme: &Theme) {
    let style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.text)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[ Add Transaction ]", style)),
        area,
    );
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let header = Row::new(["Type", "Amount", "Purpose"]).style(
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows = state
        .ledger
        .transactions()
        .iter()
        .map(|tx| transaction_row(tx, theme))
        .collect::<Vec<_>>();

    let mut table_state = TableState::default();
    if !rows.is_empty() {
        table_state.select(Some(state.selected));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Card::new("Transactions", theme).block())
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
    .highlight_symbol("» ");

    frame.render_stateful_widget(table, area, &mut table_state);
}

fn transaction_row(tx: &Transaction, theme: &Theme) -> Row<'static> {
    let color = match tx.kind {
        TransactionKind::Credit => theme.positive,
        TransactionKind::Debit => theme.negative,
    };
    Row::new(vec![
        Cell::from(tx.kind.as_str()).style(Style::default().fg(color)),
        Cell::from(format_plain(tx.amount)),
        Cell::from(tx.purpose.clone()),
    ])
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let totals = state.ledger.totals();
    let lines = vec![
        money::total_line("Credits", totals.credits, theme),
        money::total_line("Debits", totals.debits, theme),
        money::balance_line("Balance", totals.balance, theme),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Card::new("Total", theme).block()),
        area,
    );
}
