//! Application Context
//!
//! The controller plus one version signal per UI surface, provided via the
//! Leptos Context API.

use leptos::prelude::*;
use list_keeper_core::{ListController, ListResult, Outcome, RecordingView, Refresh};

use crate::platform::{BrowserDialogs, BrowserStore};

/// Controller wired to the browser. Refresh notices are recorded while it is
/// borrowed and turned into signal updates afterwards.
pub type BrowserController = ListController<BrowserStore, BrowserDialogs, RecordingView>;

/// Version counters, bumped whenever the controller marks a surface stale
#[derive(Clone, Copy)]
pub struct Surfaces {
    pub selector: RwSignal<u32>,
    pub title: RwSignal<u32>,
    pub items: RwSignal<u32>,
    pub delete_toggle: RwSignal<u32>,
}

impl Surfaces {
    fn new() -> Self {
        Self {
            selector: RwSignal::new(0),
            title: RwSignal::new(0),
            items: RwSignal::new(0),
            delete_toggle: RwSignal::new(0),
        }
    }

    fn bump(&self, what: Refresh) {
        let signal = match what {
            Refresh::Selector => self.selector,
            Refresh::Title => self.title,
            Refresh::Items | Refresh::Item(_) | Refresh::ItemRemoved(_) => self.items,
            Refresh::DeleteToggle => self.delete_toggle,
        };
        signal.try_update(|v| *v += 1);
    }
}

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<BrowserController, LocalStorage>,
    pub surfaces: Surfaces,
}

impl AppContext {
    pub fn new(controller: BrowserController) -> Self {
        let ctx = Self {
            controller: StoredValue::new_local(controller),
            surfaces: Surfaces::new(),
        };
        ctx.flush();
        ctx
    }

    /// Read controller state.
    ///
    /// Not reactive by itself: track the matching surface signal first.
    pub fn read<R>(&self, f: impl FnOnce(&BrowserController) -> R) -> R {
        self.controller.with_value(f)
    }

    /// Run an operation, then redraw the surfaces it marked stale
    pub fn dispatch<R>(&self, op: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        let result = self.controller.try_update_value(op);
        self.flush();
        result
    }

    /// `dispatch` for list operations. Failures were already logged by the
    /// controller.
    pub fn run(&self, op: impl FnOnce(&mut BrowserController) -> ListResult<Outcome>) -> Option<Outcome> {
        self.dispatch(op).and_then(Result::ok)
    }

    /// Page-unload hook
    pub fn teardown(&self) {
        self.dispatch(|controller| controller.teardown());
    }

    fn flush(&self) {
        let pending = self
            .controller
            .try_update_value(|controller| controller.view_mut().take())
            .unwrap_or_default();
        for what in pending {
            self.surfaces.bump(what);
        }
    }
}
