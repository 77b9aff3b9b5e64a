//! Header and clock-panel text.

use al_time::{Date, YearMonth};

/// Grid header, e.g. `2024年10月`.
pub fn month_title(month: YearMonth) -> String {
    format!("{:04}年{:02}月", month.year(), month.month())
}

/// Clock-panel date line, e.g. `2024年10月12日 星期六`.
pub fn date_line(date: Date) -> String {
    let (y, m, d) = date.ymd();
    format!("{y:04}年{m:02}月{d:02}日 {}", date.weekday().chinese_name())
}
