use crate::domain::{
    Availability, DayContext, MonthGrid, MonthWindow, MonthWindowConfig, NavDirection,
    SelectionPhase, SelectionState, Transition,
};
use crate::error::PickerResult;
use crate::infrastructure::{ListenerRegistry, SelectionChange, SelectionListener};
use chrono::NaiveDate;
use log::{debug, trace};
use serde::Serialize;

/// Outcome of a click on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionChangeResult {
    pub selected_dates: Vec<NaiveDate>,
    pub transition: Transition,
    /// Set only when the activation moved the visible window.
    pub current_month_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverChangeResult {
    pub hovered_dates: Vec<NaiveDate>,
    pub changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationResult {
    pub current_month_index: usize,
}

/// Where a selection handed in by the host came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOrigin {
    /// The host echoed what the engine just emitted.
    Internal,
    /// The host changed the selection on its own.
    External,
    /// Same selection as before and nothing pending.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReconcileResult {
    pub current_month_index: usize,
    pub origin: SelectionOrigin,
}

/// Everything a renderer needs to draw the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub current_month_index: usize,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub phase: SelectionPhase,
    pub selected_dates: Vec<NaiveDate>,
    pub hovered_dates: Vec<NaiveDate>,
    pub months: Vec<MonthGrid>,
}

impl ViewModel {
    pub fn visible_months(&self) -> Vec<NaiveDate> {
        self.months.iter().map(|m| m.month).collect()
    }
}

/// Interaction state machine of the picker.
///
/// The host feeds it clicks, hovers and paging, and tells it whenever the
/// selection it owns changes. Every call runs to completion and leaves a
/// consistent view behind.
#[derive(Debug)]
pub struct SelectionEngine {
    config: MonthWindowConfig,
    range_mode: bool,
    availability: Availability,
    today: NaiveDate,
    window: MonthWindow,
    state: SelectionState,
    /// Last selection known to the host: our own emission or its own value.
    selected: Vec<NaiveDate>,
    /// Set when we emit, consumed by the next reconcile.
    selected_internally: bool,
    listeners: ListenerRegistry,
}

impl SelectionEngine {
    pub fn new(
        config: MonthWindowConfig,
        selected: Vec<NaiveDate>,
        range_mode: bool,
        today: NaiveDate,
    ) -> Self {
        let window = MonthWindow::new(&config, &selected, today);
        debug!(
            "Picker over {} months, opening at index {} (range mode: {})",
            window.months().len(),
            window.current_index(),
            range_mode
        );

        Self {
            config,
            range_mode,
            availability: Availability::default(),
            today,
            window,
            state: SelectionState::new(),
            selected,
            selected_internally: false,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn register_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.listeners.register(listener);
    }

    pub fn config(&self) -> &MonthWindowConfig {
        &self.config
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn is_range_mode(&self) -> bool {
        self.range_mode
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_dates(&self) -> &[NaiveDate] {
        &self.selected
    }

    pub fn current_month_index(&self) -> usize {
        self.window.current_index()
    }

    pub fn months(&self) -> &[NaiveDate] {
        self.window.months()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves "today" forward for long-running hosts. Only affects
    /// past/future classification; the window stays where it is.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn on_activate(&mut self, date: NaiveDate) -> PickerResult<SelectionChangeResult> {
        let index_before = self.window.current_index();
        let (transition, emitted) = self.state.activate(date, self.range_mode, &self.availability)?;

        self.selected_internally = true;
        self.selected = emitted.clone();
        self.listeners.notify(&SelectionChange {
            trigger: date,
            transition,
            selected_dates: emitted.clone(),
        });

        let index_after = self.window.current_index();
        Ok(SelectionChangeResult {
            selected_dates: emitted,
            transition,
            current_month_index: (index_after != index_before).then_some(index_after),
        })
    }

    pub fn on_hover(&mut self, date: NaiveDate) -> PickerResult<HoverChangeResult> {
        let changed = self.state.hover(date, self.range_mode)?;
        if changed {
            trace!(
                "Hover preview now {} day(s) ending at {}",
                self.state.hovered().len(),
                date
            );
        }

        Ok(HoverChangeResult {
            hovered_dates: self.state.hovered().to_vec(),
            changed,
        })
    }

    pub fn on_navigate(&mut self, direction: NavDirection) -> NavigationResult {
        NavigationResult {
            current_month_index: self.window.navigate(direction),
        }
    }

    /// Tells the engine about the selection the host now holds.
    ///
    /// Hosts call this whenever their value changes, including when they
    /// store what the engine just emitted. An echo of our own emission
    /// leaves the window alone; anything else re-centres it on the new
    /// selection. The pending emission flag is consumed either way.
    pub fn reconcile_external_selection(&mut self, selected: Vec<NaiveDate>) -> ReconcileResult {
        let internal = std::mem::take(&mut self.selected_internally);

        let origin = if selected != self.selected {
            SelectionOrigin::External
        } else if internal {
            SelectionOrigin::Internal
        } else {
            SelectionOrigin::Unchanged
        };

        if origin == SelectionOrigin::External {
            self.selected = selected;
            self.window
                .recenter(&self.selected, self.config.allow_future, self.today);
        }

        debug!(
            "Reconciled {} selected day(s) as {:?}, month index {}",
            self.selected.len(),
            origin,
            self.window.current_index()
        );

        ReconcileResult {
            current_month_index: self.window.current_index(),
            origin,
        }
    }

    /// Classifies every visible day. Recomputed on each call.
    pub fn view_model(&self) -> ViewModel {
        let context = DayContext {
            selected: &self.selected,
            hovered: self.state.hovered(),
            availability: &self.availability,
            today: self.today,
            allow_past: self.config.allow_past,
            allow_future: self.config.allow_future,
        };

        let months: Vec<MonthGrid> = self
            .window
            .visible()
            .iter()
            .map(|&month| MonthGrid::build(month, &context))
            .collect();
        trace!("Built view model with {} month grid(s)", months.len());

        ViewModel {
            current_month_index: self.window.current_index(),
            can_go_prev: self.window.can_go_prev(),
            can_go_next: self.window.can_go_next(),
            phase: self.state.phase(),
            selected_dates: self.selected.clone(),
            hovered_dates: self.state.hovered().to_vec(),
            months,
        }
    }
}
