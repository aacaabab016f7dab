use crate::error::{PickerError, PickerResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive span of days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> PickerResult<Self> {
        if end < start {
            return Err(PickerError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range between two days given in either order.
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        (0..=(end - start).num_days()).map(move |i| start + Duration::days(i))
    }
}
