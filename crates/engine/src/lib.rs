//! In-memory ledger of account balances.
//!
//! The crate keeps entries sorted newest first and exposes the two form
//! controllers that feed it: [`CreateForm`] for new entries and [`Editor`],
//! the single editing slot. [`Ledger`] bundles all three behind one owner.
pub use balance::{Balance, DEFAULT_CURRENCY_SYMBOL};
pub use confirm::{Confirm, DELETE_PROMPT};
pub use draft::{Draft, Field};
pub use entry::{Entry, EntryId};
pub use error::EngineError;
pub use forms::{CreateForm, DeleteOutcome, EditSession, Editor, SaveOutcome, SubmitOutcome};
pub use ledger::{Ledger, LedgerBuilder};
pub use store::LedgerStore;

mod balance;
mod confirm;
pub mod date;
mod draft;
mod entry;
mod error;
mod forms;
mod ledger;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
