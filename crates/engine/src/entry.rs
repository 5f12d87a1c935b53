//! The module contains the `Entry` type, one balance recorded for an account
//! on a given day.
use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Balance, date};

/// Opaque identifier assigned when an entry is created.
///
/// Ledger operations are addressed by position; the id is only a stable key
/// for renderers and for [`LedgerStore::position_of`](crate::LedgerStore::position_of).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An account balance as of a calendar date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub account: String,
    pub balance: Balance,
    #[serde(with = "date::iso")]
    pub date: NaiveDate,
}

impl Entry {
    pub fn new(account: impl Into<String>, balance: impl Into<Balance>, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            account: account.into(),
            balance: balance.into(),
            date,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.account,
            self.balance,
            date::format_iso(self.date)
        )
    }
}
