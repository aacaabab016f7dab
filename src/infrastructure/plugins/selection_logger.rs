use crate::infrastructure::{SelectionChange, SelectionListener};
use anyhow::Result;
use log::info;

/// Listener that logs every emitted selection
pub struct SelectionLoggerListener;

impl SelectionListener for SelectionLoggerListener {
    fn on_selection_changed(&self, change: &SelectionChange) -> Result<()> {
        match (change.selected_dates.first(), change.selected_dates.last()) {
            (Some(first), Some(last)) => info!(
                "Selection {:?} via {} - {} day(s), {} .. {}",
                change.transition,
                change.trigger,
                change.selected_dates.len(),
                first,
                last
            ),
            _ => info!(
                "Selection {:?} via {} - cleared",
                change.transition, change.trigger
            ),
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "Selection Logger"
    }
}
