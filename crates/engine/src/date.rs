//! Calendar helpers. Dates are plain calendar days written as ISO 8601
//! `YYYY-MM-DD` everywhere they are shown or typed.
use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{EngineError, ResultEngine};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_iso(text: &str) -> ResultEngine<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .map_err(|_| EngineError::InvalidDate(trimmed.to_string()))
}

#[must_use]
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Moves `date` by `delta` calendar days, crossing month and year
/// boundaries. `None` only past the representable range.
#[must_use]
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let days = Days::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// The current calendar day in `tz`.
#[must_use]
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Serde adapter writing dates as ISO strings.
pub mod iso {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso(&raw).map_err(D::Error::custom)
    }
}
