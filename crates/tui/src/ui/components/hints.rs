use ratatui::{style::Style, text::Span};

use crate::{app::FormField, ui::theme::Theme};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Separator span between hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for the focused control.
pub fn field_hints(focus: FormField) -> Vec<KeyHint> {
    let mut hints = vec![KeyHint::new("Tab", "next")];
    match focus {
        FormField::Kind => {
            hints.push(KeyHint::new("←→", "type"));
            hints.push(KeyHint::new("c/d", "credit/debit"));
        }
        FormField::Submit => hints.push(KeyHint::new("Space", "add")),
        FormField::Amount | FormField::Purpose => {}
    }
    hints.push(KeyHint::new("Enter", "add"));
    hints.push(KeyHint::new("↑↓", "rows"));
    hints
}

/// Hints while the notification is open.
pub fn alert_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Enter", "ok"), KeyHint::new("Esc", "dismiss")]
}

pub fn global_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Ctrl+C", "quit")]
}
