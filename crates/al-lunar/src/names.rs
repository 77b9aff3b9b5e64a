//! Display names for lunisolar months and days.

/// Month names, 正月 through 腊月.  The eleventh and twelfth months are
/// called 冬月 and 腊月.
pub const LUNAR_MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Day names, 初一 through 三十.
#[rustfmt::skip]
pub const LUNAR_DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Name of month `month` (1–12); empty when out of range.
pub fn month_name(month: u8) -> &'static str {
    LUNAR_MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}

/// Name of day `day` (1–30); empty when out of range.
pub fn day_name(day: u8) -> &'static str {
    LUNAR_DAY_NAMES
        .get((day as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}
