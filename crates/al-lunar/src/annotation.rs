//! One-line day annotations and full lunisolar labels.

use al_time::Date;

use crate::festivals::{civil_festival, floating_civil_festival, lunar_festival, solar_term};
use crate::lunisolar::LunarDate;
use crate::names::{day_name, month_name};

/// Short text shown under a day number.
///
/// The first rule that matches wins:
///
/// 1. fixed civil festival (`国庆节`);
/// 2. floating civil festival (`清明节`, `母亲节`, `父亲节`);
/// 3. approximate solar term (`立春`);
/// 4. fixed lunisolar festival (`中秋`), matched on the folded month;
/// 5. the lunisolar month name on the first day of a month (`六月`);
/// 6. the lunisolar day name (`初七`).
///
/// Dates outside the lunisolar table still receive rules 1–3 and otherwise
/// annotate as the empty string.  Never fails.
pub fn annotate(date: Date) -> String {
    if let Some(name) = civil_festival(date)
        .or_else(|| floating_civil_festival(date))
        .or_else(|| solar_term(date))
    {
        return name.to_string();
    }

    let Ok(lunar) = LunarDate::from_date(date) else {
        return String::new();
    };

    if let Some(name) = lunar_festival(lunar.month(), lunar.day()) {
        return name.to_string();
    }
    if lunar.day() == 1 {
        month_name(lunar.month()).to_string()
    } else {
        day_name(lunar.day()).to_string()
    }
}

/// Full lunisolar label such as `农历2017年闰六月初一`; empty outside the
/// supported range.
pub fn full_lunar_label(date: Date) -> String {
    LunarDate::from_date(date)
        .map(|lunar| lunar.to_string())
        .unwrap_or_default()
}
