use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::{
    Confirm, CreateForm, DeleteOutcome, Draft, Editor, Entry, Field, LedgerStore, ResultEngine,
    SaveOutcome, SubmitOutcome, date,
};

/// Owns the store, the create form and the editing slot, so every mutation
/// goes through one place.
///
/// Each method maps to one user intent. Renderers read [`entries`],
/// [`editing_index`] and the two drafts.
///
/// [`entries`]: Ledger::entries
/// [`editing_index`]: Ledger::editing_index
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    create: CreateForm,
    editor: Editor,
}

impl Ledger {
    /// Return a builder for `Ledger`.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Subscribe to the full entry list after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Entry]) + 'static) {
        self.store.subscribe(subscriber);
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editor.editing_index()
    }

    pub fn create_draft(&self) -> &Draft {
        self.create.draft()
    }

    pub fn edit_draft(&self) -> Option<&Draft> {
        self.editor.session().map(|session| session.draft())
    }

    pub fn today(&self) -> NaiveDate {
        self.create.today()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.create.update_field(field, value);
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        self.create.push_char(field, ch);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.create.pop_char(field);
    }

    pub fn adjust_date(&mut self, delta: i64) {
        self.create.adjust_date(delta);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.create.submit(&mut self.store)
    }

    pub fn start_edit(&mut self, index: usize) -> ResultEngine<()> {
        self.editor.start_edit(index, &self.store)
    }

    pub fn update_edit_field(&mut self, field: Field, value: impl Into<String>) -> ResultEngine<()> {
        self.editor.update_field(field, value)
    }

    pub fn push_edit_char(&mut self, field: Field, ch: char) -> ResultEngine<()> {
        self.editor.push_char(field, ch)
    }

    pub fn pop_edit_char(&mut self, field: Field) -> ResultEngine<()> {
        self.editor.pop_char(field)
    }

    pub fn adjust_edit_date(&mut self, delta: i64) -> ResultEngine<()> {
        self.editor.adjust_date(delta)
    }

    pub fn save_edit(&mut self) -> SaveOutcome {
        self.editor.save(&mut self.store)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    pub fn delete(&mut self, confirm: &mut impl Confirm) -> DeleteOutcome {
        self.editor.delete(&mut self.store, confirm)
    }
}

#[derive(Debug, Default)]
pub struct LedgerBuilder {
    today: Option<NaiveDate>,
    timezone: Option<Tz>,
    entries: Vec<Entry>,
}

impl LedgerBuilder {
    /// Fix "today" instead of reading the clock.
    pub fn today(mut self, today: NaiveDate) -> LedgerBuilder {
        self.today = Some(today);
        self
    }

    /// Zone used to work out "today" from the clock. Defaults to UTC.
    pub fn timezone(mut self, timezone: Tz) -> LedgerBuilder {
        self.timezone = Some(timezone);
        self
    }

    /// Entries present from the start.
    pub fn entry(mut self, entry: Entry) -> LedgerBuilder {
        self.entries.push(entry);
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        let today = self
            .today
            .unwrap_or_else(|| date::today_in(self.timezone.unwrap_or(Tz::UTC)));
        let mut store = LedgerStore::new();
        for entry in self.entries {
            store.add(entry);
        }
        Ledger {
            store,
            create: CreateForm::new(today),
            editor: Editor::new(),
        }
    }
}
