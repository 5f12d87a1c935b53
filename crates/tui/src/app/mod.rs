use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use engine::{DELETE_PROMPT, DeleteOutcome, EntryId, Field, Ledger, SaveOutcome, SubmitOutcome};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// Which pane receives keys while no row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

/// An open delete prompt. While it is shown, keys only answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub message: String,
    pub index: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: Ledger,
    pub focus: Focus,
    pub form_field: Field,
    pub edit_field: Field,
    pub selected: usize,
    pub confirm: Option<ConfirmState>,
    pub status: Option<Status>,
    pub currency_symbol: String,
}

impl AppState {
    pub fn is_editing(&self) -> bool {
        self.ledger.editing_index().is_some()
    }

    fn clamp_selection(&mut self) {
        let len = self.ledger.entries().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn select_entry(&mut self, id: EntryId) {
        if let Some(position) = self.ledger.store().position_of(id) {
            self.selected = position;
        }
    }

    fn select_next(&mut self) {
        let len = self.ledger.entries().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            level,
        });
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ledger = Ledger::builder().timezone(config.tz()?).build();
        Ok(Self::with_ledger(&config, ledger))
    }

    pub fn with_ledger(config: &AppConfig, ledger: Ledger) -> Self {
        let state = AppState {
            ledger,
            focus: Focus::Form,
            form_field: Field::Account,
            edit_field: Field::Account,
            selected: 0,
            confirm: None,
            status: None,
            currency_symbol: config.currency_symbol.clone(),
        };

        Self {
            state,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.confirm.is_some() {
            self.handle_confirm(action);
        } else if self.state.is_editing() {
            self.handle_edit(action);
        } else {
            match self.state.focus {
                Focus::Form => self.handle_form(action),
                Focus::List => self.handle_list(action),
            }
        }
    }

    fn handle_form(&mut self, action: AppAction) {
        let field = self.state.form_field;
        let ledger = &mut self.state.ledger;
        match action {
            AppAction::NextField => self.state.form_field = field.next(),
            AppAction::PrevField => self.state.form_field = field.previous(),
            AppAction::Input(ch) => ledger.push_char(field, ch),
            AppAction::Backspace => ledger.pop_char(field),
            AppAction::Left if field == Field::Date => ledger.adjust_date(-1),
            AppAction::Right if field == Field::Date => ledger.adjust_date(1),
            AppAction::Submit => {
                if let SubmitOutcome::Added(id) = ledger.submit() {
                    self.state.form_field = Field::Account;
                    self.state.select_entry(id);
                    self.state.set_status(StatusLevel::Success, "Entry added");
                }
            }
            AppAction::Cancel | AppAction::Down => {
                self.state.focus = Focus::List;
                self.state.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_list(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.state.select_next(),
            AppAction::Submit | AppAction::Input('e') => self.start_edit(),
            AppAction::Input('a') | AppAction::NextField | AppAction::Cancel => {
                self.state.focus = Focus::Form;
            }
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn start_edit(&mut self) {
        let index = self.state.selected;
        match self.state.ledger.start_edit(index) {
            Ok(()) => {
                self.state.edit_field = Field::Account;
                self.state.status = None;
            }
            Err(err) => debug!(%err, "edit not started"),
        }
    }

    fn handle_edit(&mut self, action: AppAction) {
        let field = self.state.edit_field;
        let ledger = &mut self.state.ledger;
        let result = match action {
            AppAction::NextField => {
                self.state.edit_field = field.next();
                Ok(())
            }
            AppAction::PrevField => {
                self.state.edit_field = field.previous();
                Ok(())
            }
            AppAction::Input(ch) => ledger.push_edit_char(field, ch),
            AppAction::Backspace => ledger.pop_edit_char(field),
            AppAction::Left if field == Field::Date => ledger.adjust_edit_date(-1),
            AppAction::Right if field == Field::Date => ledger.adjust_edit_date(1),
            AppAction::Submit => {
                if let SaveOutcome::Saved(id) = ledger.save_edit() {
                    self.state.select_entry(id);
                    self.state.set_status(StatusLevel::Success, "Entry saved");
                }
                Ok(())
            }
            AppAction::Cancel => {
                ledger.cancel_edit();
                Ok(())
            }
            AppAction::Delete => {
                if let Some(index) = ledger.editing_index() {
                    self.state.confirm = Some(ConfirmState {
                        message: DELETE_PROMPT.to_string(),
                        index,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            debug!(%err, "edit key ignored");
        }
    }

    fn handle_confirm(&mut self, action: AppAction) {
        let answer = match action {
            AppAction::Submit | AppAction::Input('y' | 'Y') => true,
            AppAction::Cancel | AppAction::Input('n' | 'N') => false,
            _ => return,
        };
        self.state.confirm = None;

        if let DeleteOutcome::Deleted(_) = self.state.ledger.delete(&mut |_: &str| answer) {
            self.state.clamp_selection();
            self.state.focus = Focus::List;
            self.state.set_status(StatusLevel::Info, "Entry deleted");
        }
    }
}
