use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which days may be picked.
///
/// A day is selectable when it is not disabled and, if any allowed days are
/// listed, it is one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub disabled: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub allowed: BTreeSet<NaiveDate>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled.extend(dates);
        self
    }

    pub fn with_allowed(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.allowed.extend(dates);
        self
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled.contains(&date) || (!self.allowed.is_empty() && !self.allowed.contains(&date))
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.is_disabled(date)
    }

    /// Drops explicitly disabled days. The allowed list is not consulted
    /// here: emitted selections only ever exclude the disabled set.
    pub fn without_disabled(&self, dates: impl IntoIterator<Item = NaiveDate>) -> Vec<NaiveDate> {
        dates
            .into_iter()
            .filter(|date| !self.disabled.contains(date))
            .collect()
    }
}
