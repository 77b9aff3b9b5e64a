//! One cell of the month grid.

use al_holidays::HolidayType;
use al_time::Date;
use serde::Serialize;

/// Everything the view layer needs to draw one day.
///
/// Built fresh for every grid and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// Day of month (1–31).
    pub day: u8,
    /// The date itself.
    pub date: Date,
    /// `true` for days of the displayed month, `false` for the padding
    /// before and after it.
    pub is_current_month: bool,
    /// `true` if `date` equals the caller's reference day.
    pub is_today: bool,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Short lunisolar annotation; empty outside the supported range.
    pub lunar_text: String,
    /// Official schedule classification.
    pub holiday_type: HolidayType,
    /// Holiday name; empty when there is none.
    pub holiday_name: String,
}
