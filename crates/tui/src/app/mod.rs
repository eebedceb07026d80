use crossterm::event::{self, Event, KeyEventKind};
use ledger::{Ledger, TransactionKind, amount};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// Controls of the input row, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Kind,
    Purpose,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [Self::Amount, Self::Kind, Self::Purpose, Self::Submit];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct FormState {
    pub focus: FormField,
    /// Raw text of the amount control; the draft holds its numeric value.
    pub amount_input: String,
}

#[derive(Debug)]
pub struct AppState {
    pub title: String,
    pub ledger: Ledger,
    pub form: FormState,
    /// Blocking notification. While set, only dismiss and quit are handled.
    pub alert: Option<String>,
    pub selected: usize,
}

impl AppState {
    fn new(config: &AppConfig) -> Self {
        let ledger = Ledger::with_default_kind(config.default_kind);
        let amount_input = amount::format_plain(ledger.draft().amount);
        Self {
            title: config.title.clone(),
            ledger,
            form: FormState {
                focus: FormField::Amount,
                amount_input,
            },
            alert: None,
            selected: 0,
        }
    }

    fn select_next(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.ledger.len() - 1);
    }

    fn select_prev(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_action(map_key(key));
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.alert.is_some() {
            if matches!(action, AppAction::Submit | AppAction::Cancel) {
                self.state.alert = None;
            }
            return;
        }

        match action {
            AppAction::NextField => {
                self.state.form.focus = self.state.form.focus.next();
            }
            AppAction::PrevField => {
                self.state.form.focus = self.state.form.focus.prev();
            }
            AppAction::Submit => self.submit(),
            AppAction::Backspace => self.backspace(),
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Left | AppAction::Right => {
                if self.state.form.focus == FormField::Kind {
                    let kind = self.state.ledger.draft().kind.toggled();
                    self.set_kind(kind);
                }
            }
            AppAction::Input(ch) => self.input(ch),
            AppAction::Cancel | AppAction::Quit | AppAction::None => {}
        }
    }

    fn input(&mut self, ch: char) {
        match self.state.form.focus {
            FormField::Amount => {
                if amount::is_amount_char(ch) {
                    self.state.form.amount_input.push(ch);
                    self.sync_amount();
                }
            }
            FormField::Kind => match ch {
                ' ' => {
                    let kind = self.state.ledger.draft().kind.toggled();
                    self.set_kind(kind);
                }
                'c' | 'C' => self.set_kind(TransactionKind::Credit),
                'd' | 'D' => self.set_kind(TransactionKind::Debit),
                _ => {}
            },
            FormField::Purpose => {
                if !ch.is_control() {
                    let mut purpose = self.state.ledger.draft().purpose.clone();
                    purpose.push(ch);
                    self.update_ledger(|ledger| ledger.set_purpose(purpose));
                }
            }
            FormField::Submit => {
                if ch == ' ' {
                    self.submit();
                }
            }
        }
    }

    fn backspace(&mut self) {
        match self.state.form.focus {
            FormField::Amount => {
                self.state.form.amount_input.pop();
                self.sync_amount();
            }
            FormField::Purpose => {
                let mut purpose = self.state.ledger.draft().purpose.clone();
                purpose.pop();
                self.update_ledger(|ledger| ledger.set_purpose(purpose));
            }
            FormField::Kind | FormField::Submit => {}
        }
    }

    fn submit(&mut self) {
        match self.state.ledger.add_transaction() {
            Ok(ledger) => {
                self.state.ledger = ledger;
                self.state.form.amount_input =
                    amount::format_plain(self.state.ledger.draft().amount);
                self.state.selected = self.state.ledger.len().saturating_sub(1);
            }
            Err(err) => {
                tracing::debug!(%err, input = %self.state.form.amount_input, "submission rejected");
                self.state.alert = Some(err.to_string());
            }
        }
    }

    fn set_kind(&mut self, kind: TransactionKind) {
        self.update_ledger(|ledger| ledger.set_kind(kind));
    }

    fn sync_amount(&mut self) {
        let value = amount::parse_amount(&self.state.form.amount_input);
        self.update_ledger(|ledger| ledger.set_amount(value));
    }

    fn update_ledger(&mut self, transition: impl FnOnce(Ledger) -> Ledger) {
        let current = std::mem::take(&mut self.state.ledger);
        self.state.ledger = transition(current);
    }
}
