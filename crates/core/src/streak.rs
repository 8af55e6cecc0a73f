//! Daily-streak continuity across calendar day boundaries.

use chrono::NaiveDate;

/// The next streak value after completing a daily mission on `today`, given
/// the date of the previous daily completion.
///
/// - never completed a daily: streak starts at 1
/// - same day: unchanged (a second daily neither extends nor breaks)
/// - yesterday: continuation, +1
/// - gap of two or more days, or a future date (clock skew): reset to 1
///
/// Only daily-type completions go through this; other mission types never
/// touch the streak.
pub fn advance_streak(current: i32, last_daily: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(last) = last_daily else {
        return 1;
    };

    match today.signed_duration_since(last).num_days() {
        0 => current,
        1 => current + 1,
        _ => 1,
    }
}
