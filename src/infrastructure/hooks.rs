use crate::domain::Transition;
use anyhow::Result;
use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use std::fmt;

/// Payload handed to listeners each time the engine emits a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionChange {
    /// Day whose activation produced the change
    pub trigger: NaiveDate,
    pub transition: Transition,
    pub selected_dates: Vec<NaiveDate>,
}

/// Trait for hosts that want to receive emitted selections
pub trait SelectionListener: Send + Sync {
    /// Called after the engine has committed a new selection
    fn on_selection_changed(&self, change: &SelectionChange) -> Result<()>;

    /// Human-readable name for this listener
    fn name(&self) -> &str;
}

/// Registry for managing selection listeners
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a new listener
    pub fn register<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Notify every listener, in registration order
    pub fn notify(&self, change: &SelectionChange) {
        for listener in &self.listeners {
            if let Err(e) = listener.on_selection_changed(change) {
                // Continue with other listeners even if one fails
                warn!("Listener '{}' failed: {:#}", listener.name(), e);
            }
        }
    }

    /// List all registered listeners
    pub fn list_listeners(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list_listeners()).finish()
    }
}
