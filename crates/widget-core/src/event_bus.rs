//! Event bus between the exchange driver and the app shell.
//!
//! Single-threaded (WASM), interior mutability via RefCell. Events are
//! buffered and drained by the app on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use widget_types::event::WidgetEvent;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<WidgetEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: WidgetEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the app each frame.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }
}

/// Level the app logs a drained event at. `complete_send` logs failures at
/// `error`; their events stay at `debug`.
pub fn event_log_level(event: &WidgetEvent) -> log::Level {
    match event {
        WidgetEvent::ChannelSwitched { .. } => log::Level::Info,
        _ => log::Level::Debug,
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
