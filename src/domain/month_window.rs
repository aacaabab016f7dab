use crate::domain::date_math::{has_whole_weeks, months_between, start_of_month};
use crate::error::{PickerError, PickerResult};
use chrono::{Months, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

fn default_visible_months() -> usize {
    1
}

fn default_true() -> bool {
    true
}

/// Bounds and paging of the picker. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindowConfig {
    pub first_month: NaiveDate,
    pub last_month: NaiveDate,
    #[serde(default = "default_visible_months")]
    pub visible_months: usize,
    #[serde(default = "default_true")]
    pub allow_past: bool,
    #[serde(default = "default_true")]
    pub allow_future: bool,
}

impl MonthWindowConfig {
    pub fn new(first_month: NaiveDate, last_month: NaiveDate) -> Self {
        Self {
            first_month,
            last_month,
            visible_months: default_visible_months(),
            allow_past: true,
            allow_future: true,
        }
    }

    pub fn with_visible_months(mut self, visible_months: usize) -> Self {
        self.visible_months = visible_months;
        self
    }

    pub fn with_past(mut self, allow_past: bool) -> Self {
        self.allow_past = allow_past;
        self
    }

    pub fn with_future(mut self, allow_future: bool) -> Self {
        self.allow_future = allow_future;
        self
    }

    /// Reports degenerate settings. Engines still accept them: an inverted
    /// window simply has no months.
    pub fn validate(&self) -> PickerResult<()> {
        if start_of_month(self.first_month) > start_of_month(self.last_month) {
            return Err(PickerError::InvalidConfiguration {
                first_month: self.first_month,
                last_month: self.last_month,
            });
        }
        if self.visible_months == 0 {
            return Err(PickerError::InvalidVisibleMonths {
                visible_months: self.visible_months,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Next,
    Prev,
}

/// One entry per month from `first` to `last` inclusive, each on the 1st.
///
/// Months whose grid would run past chrono's calendar are dropped, which can
/// only happen to its very first and very last month.
pub fn build_month_list(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let last = start_of_month(last);
    let mut months = Vec::new();
    let mut month = Some(start_of_month(first));

    while let Some(current) = month.filter(|m| *m <= last) {
        if has_whole_weeks(current) {
            months.push(current);
        } else {
            debug!("Dropping {} from the month list: grid out of range", current);
        }
        month = current.checked_add_months(Months::new(1));
    }

    months
}

/// Largest valid left edge of the window.
pub fn max_month_index(month_count: usize, visible_months: usize) -> usize {
    month_count.saturating_sub(visible_months)
}

/// Where the window should open: on the earliest selected day if there is
/// one, otherwise on the first month for past-only pickers, otherwise on
/// the month of `today`.
pub fn initial_month_index(
    months: &[NaiveDate],
    selected: &[NaiveDate],
    allow_future: bool,
    visible_months: usize,
    today: NaiveDate,
) -> usize {
    let Some(&first) = months.first() else {
        return 0;
    };

    let target = match selected.iter().min() {
        Some(&earliest) => earliest,
        None if !allow_future => return 0,
        None => today,
    };

    let max = max_month_index(months.len(), visible_months) as i64;
    months_between(first, target).clamp(0, max) as usize
}

/// The months shown from `current_index`, never more than `visible_months`.
pub fn visible_slice(
    months: &[NaiveDate],
    current_index: usize,
    visible_months: usize,
) -> &[NaiveDate] {
    let start = current_index.min(months.len());
    let end = start.saturating_add(visible_months).min(months.len());
    &months[start..end]
}

pub fn next_index(current_index: usize, month_count: usize, visible_months: usize) -> usize {
    current_index
        .saturating_add(1)
        .min(max_month_index(month_count, visible_months))
}

pub fn prev_index(current_index: usize) -> usize {
    current_index.saturating_sub(1)
}

/// The full month list plus the left edge of what is currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthWindow {
    months: Vec<NaiveDate>,
    visible_months: usize,
    current_index: usize,
}

impl MonthWindow {
    pub fn new(config: &MonthWindowConfig, selected: &[NaiveDate], today: NaiveDate) -> Self {
        if let Err(e) = config.validate() {
            warn!("Degenerate month window: {}", e);
        }

        let months = build_month_list(config.first_month, config.last_month);
        let visible_months = config.visible_months.max(1);
        let current_index = initial_month_index(
            &months,
            selected,
            config.allow_future,
            visible_months,
            today,
        );

        Self {
            months,
            visible_months,
            current_index,
        }
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn visible_months(&self) -> usize {
        self.visible_months
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible(&self) -> &[NaiveDate] {
        visible_slice(&self.months, self.current_index, self.visible_months)
    }

    pub fn can_go_prev(&self) -> bool {
        self.months.len() > self.visible_months && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.months.len() > self.visible_months
            && self.current_index < max_month_index(self.months.len(), self.visible_months)
    }

    pub fn navigate(&mut self, direction: NavDirection) -> usize {
        let previous = self.current_index;
        self.current_index = match direction {
            NavDirection::Next => {
                next_index(self.current_index, self.months.len(), self.visible_months)
            }
            NavDirection::Prev => prev_index(self.current_index),
        };
        debug!(
            "Navigate {:?}: month index {} -> {}",
            direction, previous, self.current_index
        );
        self.current_index
    }

    /// Moves the window onto `selected` (or today) as on first open.
    pub fn recenter(
        &mut self,
        selected: &[NaiveDate],
        allow_future: bool,
        today: NaiveDate,
    ) -> usize {
        self.current_index = initial_month_index(
            &self.months,
            selected,
            allow_future,
            self.visible_months,
            today,
        );
        self.current_index
    }
}
