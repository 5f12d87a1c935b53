//! Uncommitted form input.
//!
//! A [`Draft`] is three free-text fields. Keystrokes are never validated;
//! validation happens once, when a form controller commits the draft.
use core::fmt;

use crate::{Balance, Entry, EngineError, ResultEngine, date};

/// The fields of a draft, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Account,
    Balance,
    Date,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Account, Field::Balance, Field::Date];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Account => Self::Balance,
            Self::Balance => Self::Date,
            Self::Date => Self::Account,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Account => Self::Date,
            Self::Balance => Self::Account,
            Self::Date => Self::Balance,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Balance => "Balance",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub account: String,
    pub balance: String,
    pub date: String,
}

impl Draft {
    pub fn with_date(date: chrono::NaiveDate) -> Self {
        Self {
            account: String::new(),
            balance: String::new(),
            date: date::format_iso(date),
        }
    }

    /// Seeds a draft from a committed entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            account: entry.account.clone(),
            balance: entry.balance.to_draft_text(),
            date: date::format_iso(entry.date),
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Account => &self.account,
            Field::Balance => &self.balance,
            Field::Date => &self.date,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Account => &mut self.account,
            Field::Balance => &mut self.balance,
            Field::Date => &mut self.date,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        self.field_mut(field).push(ch);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    /// Moves the date field by `delta` days. Leaves the draft untouched when
    /// the current text is not a valid date.
    pub fn adjust_date(&mut self, delta: i64) -> ResultEngine<()> {
        let current = date::parse_iso(&self.date)?;
        let shifted = date::shift_days(current, delta)
            .ok_or_else(|| EngineError::InvalidDate(format!("{} {delta:+} days", self.date)))?;
        self.date = date::format_iso(shifted);
        Ok(())
    }

    /// First empty field, if any.
    #[must_use]
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.field(*field).is_empty())
    }

    /// Builds the entry this draft describes. Only the date has to be valid;
    /// the balance goes through the lenient parse.
    pub fn to_entry(&self) -> ResultEngine<Entry> {
        let date = date::parse_iso(&self.date)?;
        Ok(Entry::new(
            self.account.clone(),
            Balance::parse_lenient(&self.balance),
            date,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn update_field_assigns_without_validation() {
        let mut draft = Draft::default();
        draft.update_field(Field::Balance, "not a number");
        draft.update_field(Field::Date, "whenever");
        assert_eq!(draft.balance, "not a number");
        assert_eq!(draft.date, "whenever");
    }

    #[test]
    fn keystroke_editing() {
        let mut draft = Draft::default();
        for ch in "Chq".chars() {
            draft.push_char(Field::Account, ch);
        }
        draft.pop_char(Field::Account);
        draft.pop_char(Field::Balance);
        assert_eq!(draft.account, "Ch");
        assert_eq!(draft.balance, "");
    }

    #[test]
    fn adjust_date_across_leap_and_non_leap_february() {
        let mut draft = Draft::with_date(day(2024, 2, 28));
        draft.adjust_date(1).unwrap();
        assert_eq!(draft.date, "2024-02-29");

        let mut draft = Draft::with_date(day(2023, 2, 28));
        draft.adjust_date(1).unwrap();
        assert_eq!(draft.date, "2023-03-01");

        draft.adjust_date(-1).unwrap();
        assert_eq!(draft.date, "2023-02-28");
    }

    #[test]
    fn adjust_date_leaves_garbage_untouched() {
        let mut draft = Draft::default();
        draft.update_field(Field::Date, "soon");
        assert!(draft.adjust_date(1).is_err());
        assert_eq!(draft.date, "soon");
    }

    #[test]
    fn first_missing_follows_focus_order() {
        let mut draft = Draft::with_date(day(2024, 1, 10));
        assert_eq!(draft.first_missing(), Some(Field::Account));
        draft.update_field(Field::Account, "Checking");
        assert_eq!(draft.first_missing(), Some(Field::Balance));
        draft.update_field(Field::Balance, "1");
        assert_eq!(draft.first_missing(), None);
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(Field::Date.next(), Field::Account);
        assert_eq!(Field::Account.previous(), Field::Date);
    }

    #[test]
    fn from_entry_seeds_every_field() {
        let entry = Entry::new("Checking", 100.5, day(2024, 1, 10));
        let draft = Draft::from_entry(&entry);
        assert_eq!(draft.account, "Checking");
        assert_eq!(draft.balance, "100.5");
        assert_eq!(draft.date, "2024-01-10");
    }
}
