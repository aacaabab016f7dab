use chrono::NaiveDate;

/// Errors raised by the picker core.
///
/// None of these are transient. A host that sees one should log it and
/// rebuild the engine from a corrected configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// A day range was requested whose end comes before its start.
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The configured first month lies after the last month.
    #[error("invalid configuration: first month {first_month} is after last month {last_month}")]
    InvalidConfiguration {
        first_month: NaiveDate,
        last_month: NaiveDate,
    },

    /// At least one month has to be visible.
    #[error("invalid configuration: visible months must be >= 1, got {visible_months}")]
    InvalidVisibleMonths { visible_months: usize },
}

pub type PickerResult<T> = std::result::Result<T, PickerError>;
