//! Form controllers: the create form and the single-slot editor.
use chrono::NaiveDate;
use tracing::debug;

use crate::{
    Confirm, DELETE_PROMPT, Draft, EngineError, EntryId, Field, LedgerStore, ResultEngine,
};

/// What happened to a commit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EntryId),
    Ignored(EngineError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(EntryId),
    Ignored(EngineError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(EntryId),
    /// The user said no; the edit session is still open.
    Declined,
    Ignored(EngineError),
}

/// The form used to add new entries.
///
/// `today` is fixed when the form is built and is where the date field
/// returns after every successful submit.
#[derive(Clone, Debug)]
pub struct CreateForm {
    draft: Draft,
    today: NaiveDate,
}

impl CreateForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: Draft::with_date(today),
            today,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        self.draft.push_char(field, ch);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.draft.pop_char(field);
    }

    pub fn adjust_date(&mut self, delta: i64) {
        if let Err(err) = self.draft.adjust_date(delta) {
            debug!(%err, "create form: date not adjusted");
        }
    }

    /// Adds the draft to `store` when all three fields are filled in, then
    /// resets the draft. An incomplete draft is kept as is.
    pub fn submit(&mut self, store: &mut LedgerStore) -> SubmitOutcome {
        match self.try_submit(store) {
            Ok(id) => SubmitOutcome::Added(id),
            Err(err) => {
                debug!(%err, "create form: submit ignored");
                SubmitOutcome::Ignored(err)
            }
        }
    }

    fn try_submit(&mut self, store: &mut LedgerStore) -> ResultEngine<EntryId> {
        if let Some(field) = self.draft.first_missing() {
            return Err(EngineError::MissingField(field));
        }
        let entry = self.draft.to_entry()?;
        let id = entry.id;
        store.add(entry);
        self.draft = Draft::with_date(self.today);
        Ok(id)
    }
}

/// An open edit of the entry at `index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    index: usize,
    id: EntryId,
    draft: Draft,
}

impl EditSession {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }
}

/// Holds the single editing slot. At most one row is edited at a time;
/// `None` means every row is being viewed.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    slot: Option<EditSession>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.slot.as_ref()
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.slot.as_ref().map(EditSession::index)
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.editing_index() == Some(index)
    }

    /// Opens row `index` for editing, seeding the draft from the stored
    /// entry. Any other open edit is dropped along with its draft.
    pub fn start_edit(&mut self, index: usize, store: &LedgerStore) -> ResultEngine<()> {
        let entry = store.get(index).ok_or(EngineError::IndexOutOfBounds {
            index,
            len: store.len(),
        })?;
        if let Some(previous) = self.slot.as_ref().filter(|s| s.index != index) {
            debug!(index = previous.index, "edit draft discarded");
        }
        self.slot = Some(EditSession {
            index,
            id: entry.id,
            draft: Draft::from_entry(entry),
        });
        Ok(())
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> ResultEngine<()> {
        self.session_mut()?.draft.update_field(field, value);
        Ok(())
    }

    pub fn push_char(&mut self, field: Field, ch: char) -> ResultEngine<()> {
        self.session_mut()?.draft.push_char(field, ch);
        Ok(())
    }

    pub fn pop_char(&mut self, field: Field) -> ResultEngine<()> {
        self.session_mut()?.draft.pop_char(field);
        Ok(())
    }

    pub fn adjust_date(&mut self, delta: i64) -> ResultEngine<()> {
        self.session_mut()?.draft.adjust_date(delta)
    }

    /// Writes the draft over the edited entry and closes the session.
    ///
    /// Unlike [`CreateForm::submit`] there is no empty-field check: an empty
    /// account is saved as is and an empty balance becomes NaN. The date must
    /// still parse, otherwise the session stays open.
    pub fn save(&mut self, store: &mut LedgerStore) -> SaveOutcome {
        match self.try_save(store) {
            Ok(id) => SaveOutcome::Saved(id),
            Err(err) => {
                debug!(%err, "editor: save ignored");
                SaveOutcome::Ignored(err)
            }
        }
    }

    fn try_save(&mut self, store: &mut LedgerStore) -> ResultEngine<EntryId> {
        let session = self.slot.as_ref().ok_or(EngineError::NotEditing)?;
        let mut entry = session.draft.to_entry()?;
        let index = session.index;
        // The row keeps its id only if it still holds the entry being edited.
        if store.get(index).is_some_and(|current| current.id == session.id) {
            entry.id = session.id;
        }
        let id = entry.id;
        self.slot = None;
        store
            .replace_at(index, entry)
            .map(|_| id)
            .ok_or(EngineError::IndexOutOfBounds {
                index,
                len: store.len(),
            })
    }

    /// Closes the session, dropping the draft.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Deletes the edited entry once `confirm` agrees. On refusal the
    /// session and its draft are left exactly as they were.
    pub fn delete(&mut self, store: &mut LedgerStore, confirm: &mut impl Confirm) -> DeleteOutcome {
        let Some(index) = self.editing_index() else {
            return DeleteOutcome::Ignored(EngineError::NotEditing);
        };
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(index, "delete declined");
            return DeleteOutcome::Declined;
        }
        self.slot = None;
        match store.remove_at(index) {
            Some(removed) => DeleteOutcome::Deleted(removed.id),
            None => DeleteOutcome::Ignored(EngineError::IndexOutOfBounds {
                index,
                len: store.len(),
            }),
        }
    }

    fn session_mut(&mut self) -> ResultEngine<&mut EditSession> {
        self.slot.as_mut().ok_or(EngineError::NotEditing)
    }
}
