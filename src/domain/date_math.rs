use crate::domain::date_range::DateRange;
use crate::error::PickerResult;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

/// Strictly before `today`. The caller supplies `today` from its clock.
pub fn is_past(day: NaiveDate, today: NaiveDate) -> bool {
    day < today
}

/// Strictly after `today`.
pub fn is_future(day: NaiveDate, today: NaiveDate) -> bool {
    day > today
}

/// Every day from `start` to `end` inclusive, ascending.
pub fn enumerate_range(start: NaiveDate, end: NaiveDate) -> PickerResult<Vec<NaiveDate>> {
    Ok(DateRange::new(start, end)?.days().collect())
}

pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    // Only December of the last representable year has no following month.
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Number of whole calendar months from `from`'s month to `to`'s month.
/// Negative when `to` is in an earlier month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let from = i64::from(from.year()) * 12 + i64::from(from.month0());
    let to = i64::from(to.year()) * 12 + i64::from(to.month0());
    to - from
}

/// Get the Sunday on or before `date`, if chrono can represent it.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let days_since_sunday = date.weekday().num_days_from_sunday();
    date.checked_sub_signed(Duration::days(i64::from(days_since_sunday)))
}

/// Get the Saturday on or after `date`, if chrono can represent it.
pub fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    let days_until_saturday = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_signed(Duration::days(i64::from(days_until_saturday)))
}

/// Whether the Sunday-to-Saturday weeks around `month` are all representable.
/// False only for the first and last months chrono knows about.
pub fn has_whole_weeks(month: NaiveDate) -> bool {
    week_start(start_of_month(month)).is_some() && week_end(end_of_month(month)).is_some()
}

/// Column order of the grid: Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];
