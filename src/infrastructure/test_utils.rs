/// Test utilities shared by the engine tests
///
/// Provides a listener that records every emitted selection, so tests can
/// assert on what the host would have received, plus small date helpers.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// use crate::infrastructure::test_utils::test_harness::*;
///
/// #[test]
/// fn my_test() {
///     let recorder = RecordingListener::new();
///     let mut engine = range_engine_for_march();
///     engine.register_listener(recorder.clone());
///
///     engine.on_activate(date(2024, 3, 10)).unwrap();
///     assert_eq!(recorder.last_selection(), Some(vec![date(2024, 3, 10)]));
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::application::SelectionEngine;
    use crate::domain::{Availability, MonthWindowConfig};
    use crate::infrastructure::{SelectionChange, SelectionListener};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// Listener that keeps every change it sees. Clones share the log.
    #[derive(Clone, Default)]
    pub struct RecordingListener {
        changes: Arc<Mutex<Vec<SelectionChange>>>,
    }

    impl RecordingListener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn changes(&self) -> Vec<SelectionChange> {
            self.changes.lock().unwrap().clone()
        }

        pub fn last_selection(&self) -> Option<Vec<NaiveDate>> {
            self.changes
                .lock()
                .unwrap()
                .last()
                .map(|c| c.selected_dates.clone())
        }
    }

    impl SelectionListener for RecordingListener {
        fn on_selection_changed(&self, change: &SelectionChange) -> Result<()> {
            self.changes.lock().unwrap().push(change.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    /// Picker over 2024 with one visible month, today fixed at 2024-03-15
    pub fn year_config() -> MonthWindowConfig {
        MonthWindowConfig::new(date(2024, 1, 1), date(2024, 12, 1))
    }

    pub fn range_engine_for_march() -> SelectionEngine {
        SelectionEngine::new(year_config(), Vec::new(), true, date(2024, 3, 15))
    }

    pub fn engine_with_disabled(disabled: &[NaiveDate]) -> SelectionEngine {
        range_engine_for_march()
            .with_availability(Availability::new().with_disabled(disabled.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;

    #[test]
    fn test_recorder_clones_share_log() {
        let recorder = RecordingListener::new();
        let mut engine = range_engine_for_march();
        engine.register_listener(recorder.clone());

        engine.on_activate(date(2024, 3, 10)).unwrap();
        assert_eq!(recorder.last_selection(), Some(vec![date(2024, 3, 10)]));
        assert_eq!(recorder.changes().len(), 1);
    }

    #[test]
    fn test_disabled_fixture() {
        let engine = engine_with_disabled(&[date(2024, 3, 7)]);
        assert!(engine.availability().is_disabled(date(2024, 3, 7)));
    }
}
