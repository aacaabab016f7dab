use crate::domain::availability::Availability;
use crate::domain::date_math::enumerate_range;
use crate::error::PickerResult;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPhase {
    /// Nothing picked.
    Idle,
    /// Start picked, waiting for the click that closes the range.
    Armed,
    /// A day or range is picked and no click is pending.
    Resting,
}

/// Which rule an activation went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    ClosedRange,
    ToggledOff,
    Started,
}

/// Click bookkeeping of the picker. The committed selection itself belongs
/// to the host; this only echoes what the engine last emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    armed: bool,
    hovered: Vec<NaiveDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn hovered(&self) -> &[NaiveDate] {
        &self.hovered
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.armed, self.start) {
            (true, Some(_)) => SelectionPhase::Armed,
            (_, None) => SelectionPhase::Idle,
            (false, Some(_)) => SelectionPhase::Resting,
        }
    }

    /// Applies a click on `date` and returns the selection to hand to the
    /// host. Disabled days are dropped from what is emitted.
    pub fn activate(
        &mut self,
        date: NaiveDate,
        range_mode: bool,
        availability: &Availability,
    ) -> PickerResult<(Transition, Vec<NaiveDate>)> {
        if let (true, true, Some(start)) = (self.armed, range_mode, self.start) {
            let emitted = availability.without_disabled(span(start, date)?);
            self.hovered.clear();
            self.end = Some(date);
            self.armed = false;
            debug!(
                "Closed range {} .. {} ({} days emitted)",
                start,
                date,
                emitted.len()
            );
            return Ok((Transition::ClosedRange, emitted));
        }

        if !self.armed && self.start == Some(date) && self.end == Some(date) {
            self.start = None;
            self.end = None;
            debug!("Toggled off {}", date);
            return Ok((Transition::ToggledOff, Vec::new()));
        }

        self.start = Some(date);
        // Without range mode a click settles immediately on a single day,
        // so the next click on it can toggle it off.
        self.end = if range_mode { None } else { Some(date) };
        self.armed = range_mode;
        debug!("Started selection at {} (armed: {})", date, self.armed);
        Ok((Transition::Started, availability.without_disabled([date])))
    }

    /// Updates the range preview. Only meaningful while armed in range mode;
    /// returns whether anything changed.
    pub fn hover(&mut self, date: NaiveDate, range_mode: bool) -> PickerResult<bool> {
        let Some(start) = self.start.filter(|_| self.armed && range_mode) else {
            return Ok(false);
        };

        let hovered = span(start, date)?;
        if hovered == self.hovered {
            return Ok(false);
        }
        self.hovered = hovered;
        Ok(true)
    }
}

/// Days between a range start and the day under the pointer, in either order.
fn span(start: NaiveDate, date: NaiveDate) -> PickerResult<Vec<NaiveDate>> {
    enumerate_range(start.min(date), start.max(date))
}
