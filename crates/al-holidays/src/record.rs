//! Holiday records and the year payload format.
//!
//! The holiday API answers `GET /v1/holidays/{year}` with one JSON object
//! keyed by ISO date:
//!
//! ```json
//! {
//!   "2024-10-01": { "date": "2024-10-01", "name": "国庆节", "isOffDay": true },
//!   "2024-10-12": { "date": "2024-10-12", "name": "国庆节", "isOffDay": false }
//! }
//! ```
//!
//! The object key is the record's date.  The inner `date` field is optional
//! and, when present, must name the same day.  A payload is accepted whole or
//! not at all.

use std::collections::HashMap;

use al_core::errors::{Error, Result};
use al_time::Date;
use serde::{Deserialize, Serialize};

/// How a day is treated by the official holiday schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// Ordinary working day.
    #[default]
    None,
    /// Named public holiday.
    Holiday,
    /// Unnamed day off, usually a plain weekend.
    RestDay,
    /// Mandated working day, usually a weekend swapped for a holiday.
    WorkDay,
}

impl HolidayType {
    /// Return `true` for [`Holiday`](Self::Holiday) and
    /// [`RestDay`](Self::RestDay).
    pub fn is_day_off(&self) -> bool {
        matches!(self, HolidayType::Holiday | HolidayType::RestDay)
    }
}

/// One entry of the official schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    /// Civil date the entry applies to.
    pub date: Date,
    /// Holiday name; may be empty.
    pub name: String,
    /// `true` for a day off, `false` for a mandated working day.
    pub is_off_day: bool,
}

/// Every record of one year, keyed by date.
pub type YearRecords = HashMap<Date, HolidayRecord>;

#[derive(Debug, Deserialize)]
struct RecordPayload {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "isOffDay")]
    is_off_day: bool,
}

/// Parse the response body for `year`.
///
/// Records are keyed by the object key.  A missing or `null` name becomes the
/// empty string.
///
/// # Errors
/// [`Error::Parse`] if the body is blank, is not a JSON object of records,
/// holds no records, carries any key or `date` that is not `yyyy-MM-dd`, or
/// has a `date` naming a different day than its key.
pub fn parse_year_payload(year: u16, body: &str) -> Result<YearRecords> {
    let parse_error = |reason: String| Error::Parse { year, reason };

    if body.trim().is_empty() {
        return Err(parse_error("empty body".into()));
    }

    let raw: HashMap<String, RecordPayload> =
        serde_json::from_str(body).map_err(|e| parse_error(e.to_string()))?;
    if raw.is_empty() {
        return Err(parse_error("no records".into()));
    }

    let mut records = YearRecords::with_capacity(raw.len());
    for (key, entry) in raw {
        let date =
            Date::parse_iso(&key).map_err(|e| parse_error(format!("record {key:?}: {e}")))?;
        if let Some(text) = entry.date.as_deref() {
            let inner = Date::parse_iso(text)
                .map_err(|e| parse_error(format!("record {key:?}: {e}")))?;
            if inner != date {
                return Err(parse_error(format!(
                    "record {key:?} carries date {text:?}"
                )));
            }
        }
        records.insert(
            date,
            HolidayRecord {
                date,
                name: entry.name.unwrap_or_default(),
                is_off_day: entry.is_off_day,
            },
        );
    }
    Ok(records)
}
