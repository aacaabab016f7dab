use crate::domain::availability::Availability;
use crate::domain::date_math::{
    WEEKDAYS, end_of_month, is_future, is_past, is_same_month, start_of_month, week_end,
    week_start,
};
use crate::domain::date_range::DateRange;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Everything needed to classify a day. Rebuilt for every view.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    pub selected: &'a [NaiveDate],
    pub hovered: &'a [NaiveDate],
    pub availability: &'a Availability,
    pub today: NaiveDate,
    pub allow_past: bool,
    pub allow_future: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayClass {
    pub date: NaiveDate,
    /// Filler day from the previous or next month.
    pub outside_month: bool,
    pub selected: bool,
    pub hovered: bool,
    pub disabled: bool,
    /// Before today while past days are not allowed.
    pub past: bool,
    /// After today while future days are not allowed.
    pub future: bool,
}

impl DayClass {
    /// Whether a renderer should forward clicks for this day. Hovers are
    /// forwarded for every in-month day.
    pub fn is_actionable(&self) -> bool {
        !(self.outside_month || self.disabled || self.past || self.future)
    }
}

/// Complete Sunday-to-Saturday weeks covering `month`, including the
/// filler days of the neighbouring months.
///
/// Filler days chrono cannot represent are left out, so the very first and
/// very last months of its calendar come back short. Month lists never
/// contain those two, see `has_whole_weeks`.
pub fn days_for_month(month: NaiveDate) -> Vec<NaiveDate> {
    let first = start_of_month(month);
    let last = end_of_month(month);
    DateRange::spanning(
        week_start(first).unwrap_or(first),
        week_end(last).unwrap_or(last),
    )
    .days()
    .collect()
}

pub fn classify_day(day: NaiveDate, month: NaiveDate, context: &DayContext<'_>) -> DayClass {
    DayClass {
        date: day,
        outside_month: !is_same_month(day, month),
        selected: context.selected.contains(&day),
        hovered: context.hovered.contains(&day),
        disabled: context.availability.is_disabled(day),
        past: is_past(day, context.today) && !context.allow_past,
        future: is_future(day, context.today) && !context.allow_future,
    }
}

/// Rows of seven for rendering.
pub fn weeks<T: Clone>(days: &[T]) -> Vec<Vec<T>> {
    days.chunks(7).map(<[T]>::to_vec).collect()
}

/// Column labels for a grid: the weekdays of its first row.
pub fn weekday_header(days: &[NaiveDate]) -> Vec<Weekday> {
    if days.len() >= 7 {
        days[..7].iter().map(|d| d.weekday()).collect()
    } else {
        WEEKDAYS.to_vec()
    }
}

/// One month of the view, classified and split into weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: NaiveDate,
    pub weekdays: Vec<Weekday>,
    pub weeks: Vec<Vec<DayClass>>,
}

impl MonthGrid {
    pub fn build(month: NaiveDate, context: &DayContext<'_>) -> Self {
        let month = start_of_month(month);
        let days = days_for_month(month);
        let classes: Vec<DayClass> = days
            .iter()
            .map(|&day| classify_day(day, month, context))
            .collect();

        Self {
            month,
            weekdays: weekday_header(&days),
            weeks: weeks(&classes),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = &DayClass> {
        self.weeks.iter().flatten()
    }

    /// Classification of an in-month day.
    pub fn day(&self, date: NaiveDate) -> Option<&DayClass> {
        self.days().find(|d| d.date == date && !d.outside_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date_math::has_whole_weeks;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context<'a>(
        selected: &'a [NaiveDate],
        hovered: &'a [NaiveDate],
        availability: &'a Availability,
    ) -> DayContext<'a> {
        DayContext {
            selected,
            hovered,
            availability,
            today: date(2024, 3, 15),
            allow_past: true,
            allow_future: true,
        }
    }

    #[test]
    fn test_days_for_month_fills_whole_weeks() {
        // March 2024 starts on a Friday and ends on a Sunday
        let days = days_for_month(date(2024, 3, 1));
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days.len(), 42);
        assert_eq!(days[0], date(2024, 2, 25));
        assert_eq!(days[0].weekday(), Weekday::Sun);
        assert_eq!(*days.last().unwrap(), date(2024, 4, 6));
        assert_eq!(days.last().unwrap().weekday(), Weekday::Sat);
    }

    #[test]
    fn test_days_for_month_without_filler() {
        // February 2015 runs Sunday 1st to Saturday 28th
        let days = days_for_month(date(2015, 2, 10));
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], date(2015, 2, 1));
    }

    #[test]
    fn test_days_for_month_at_the_calendar_bounds() {
        let first = days_for_month(NaiveDate::MIN);
        assert!(first[0] >= NaiveDate::MIN);
        assert_eq!(first.last().unwrap().weekday(), Weekday::Sat);
        assert_eq!(first.iter().filter(|d| is_same_month(**d, NaiveDate::MIN)).count(), 31);

        let last = days_for_month(NaiveDate::MAX);
        assert_eq!(last[0].weekday(), Weekday::Sun);
        assert_eq!(*last.last().unwrap(), NaiveDate::MAX);
        assert_eq!(last.iter().filter(|d| is_same_month(**d, NaiveDate::MAX)).count(), 31);
        assert_eq!(last.len() % 7 == 0, has_whole_weeks(NaiveDate::MAX));
    }

    #[test]
    fn test_classify_outside_and_selection() {
        let availability = Availability::new().with_disabled([date(2024, 3, 7)]);
        let selected = [date(2024, 3, 10)];
        let hovered = [date(2024, 3, 6), date(2024, 3, 7)];
        let ctx = context(&selected, &hovered, &availability);
        let month = date(2024, 3, 1);

        assert!(classify_day(date(2024, 2, 29), month, &ctx).outside_month);
        assert!(classify_day(date(2024, 3, 10), month, &ctx).selected);
        let seventh = classify_day(date(2024, 3, 7), month, &ctx);
        assert!(seventh.hovered);
        assert!(seventh.disabled);
        assert!(!seventh.is_actionable());
        assert!(classify_day(date(2024, 3, 8), month, &ctx).is_actionable());
    }

    #[test]
    fn test_past_and_future_gated_by_config() {
        let availability = Availability::new();
        let mut ctx = context(&[], &[], &availability);
        let month = date(2024, 3, 1);

        assert!(!classify_day(date(2024, 3, 1), month, &ctx).past);
        ctx.allow_past = false;
        ctx.allow_future = false;
        assert!(classify_day(date(2024, 3, 1), month, &ctx).past);
        assert!(classify_day(date(2024, 3, 20), month, &ctx).future);
        let today = classify_day(date(2024, 3, 15), month, &ctx);
        assert!(!today.past && !today.future);
    }

    #[test]
    fn test_month_grid_rows() {
        let availability = Availability::new();
        let ctx = context(&[], &[], &availability);
        let grid = MonthGrid::build(date(2024, 3, 20), &ctx);

        assert_eq!(grid.month, date(2024, 3, 1));
        assert_eq!(grid.weeks.len(), 6);
        assert!(grid.weeks.iter().all(|w| w.len() == 7));
        assert_eq!(grid.weekdays, WEEKDAYS.to_vec());
        assert_eq!(grid.days().filter(|d| !d.outside_month).count(), 31);
        assert!(grid.day(date(2024, 3, 31)).is_some());
        assert!(grid.day(date(2024, 4, 1)).is_none());
    }
}
