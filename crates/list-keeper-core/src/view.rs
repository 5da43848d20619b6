//! View refresh contract
//!
//! The controller never draws anything. It tells the view which surface went
//! stale and the view reads the new state back through the controller.

/// A UI surface that must be redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The list selector options or its selected value
    Selector,
    /// The heading showing the active list name
    Title,
    /// The whole item list of the active list
    Items,
    /// One item's text changed
    Item(u32),
    /// One item's row should go away
    ItemRemoved(u32),
    /// Enabled state of the delete-list trigger
    DeleteToggle,
}

pub trait ViewSink {
    fn refresh(&mut self, what: Refresh);
}

/// View that keeps every refresh it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Vec<Refresh>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Refresh] {
        &self.events
    }

    /// Hand over everything recorded so far
    pub fn take(&mut self) -> Vec<Refresh> {
        std::mem::take(&mut self.events)
    }
}

impl ViewSink for RecordingView {
    fn refresh(&mut self, what: Refresh) {
        self.events.push(what);
    }
}
