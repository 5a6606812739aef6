//! Message exchange: turns a draft into a backend request and the answer
//! (or the failure) into a transcript entry.
//!
//! Flow for one user turn:
//! 1. `ChatWidget::submit` runs `begin_send` and hands back a `PendingExchange`
//! 2. the caller spawns `PendingExchange::run` with a `ChatPort`
//! 3. `run` awaits the port, then applies `complete_send` if the mount is
//!    still alive; a reply for an unmounted widget is dropped
//!
//! At most one exchange is in flight per session: `begin_send` refuses while
//! `awaiting_reply` is set, so a second submit yields `None`.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use widget_types::{
    channel::Channel,
    config::MountOptions,
    event::WidgetEvent,
    session::Session,
};
use crate::event_bus::EventBus;
use crate::ports::{ChatPort, ChatRequest, RequestContext};
use crate::session::{begin_send, complete_send, create_session, set_draft, switch_channel};

/// Enter submits; Shift+Enter is reserved for a newline.
pub fn is_submit_keystroke(enter: bool, shift: bool) -> bool {
    enter && !shift
}

/// Build the wire request for `text` from the session's current state.
pub fn build_request(session: &Session, text: impl Into<String>) -> ChatRequest {
    ChatRequest {
        message: text.into(),
        session_id: session.id.clone(),
        channel: session.channel,
        context: RequestContext {
            page: session.page_context.clone(),
        },
    }
}

/// One mounted widget. Owns its session exclusively; dropping the widget
/// is the unmount.
pub struct ChatWidget {
    session: Rc<RefCell<Session>>,
    event_bus: EventBus,
}

impl ChatWidget {
    pub fn mount(options: &MountOptions, event_bus: EventBus) -> Self {
        let session = create_session(options);
        log::info!(
            "Widget mounted: session={} channel={} page={}",
            session.id,
            session.channel,
            session.page_context
        );
        Self {
            session: Rc::new(RefCell::new(session)),
            event_bus,
        }
    }

    /// Read access for rendering. Do not hold across an await.
    pub fn session(&self) -> Ref<'_, Session> {
        self.session.borrow()
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        transition(&self.session, |s| (set_draft(s, text), ()));
    }

    /// Start a send from the current draft. `None` when the guard refuses
    /// (blank draft or a reply still pending).
    pub fn submit(&self) -> Option<PendingExchange> {
        let text = transition(&self.session, begin_send)?;
        let request = build_request(&self.session.borrow(), text);
        self.event_bus.emit(WidgetEvent::SendStarted {
            session_id: request.session_id.clone(),
        });
        Some(PendingExchange {
            request,
            target: Rc::downgrade(&self.session),
            event_bus: self.event_bus.clone(),
        })
    }

    /// Keyboard entry point: submits on a bare Enter, ignores everything else.
    pub fn on_keystroke(&self, enter: bool, shift: bool) -> Option<PendingExchange> {
        if is_submit_keystroke(enter, shift) {
            self.submit()
        } else {
            None
        }
    }

    /// Returns true if the channel actually changed.
    pub fn switch_channel(&self, channel: Channel) -> bool {
        let from = self.session.borrow().channel;
        let to = transition(&self.session, |s| {
            let next = switch_channel(s, channel);
            let to = next.channel;
            (next, to)
        });
        if from == to {
            return false;
        }
        self.event_bus.emit(WidgetEvent::ChannelSwitched { from, to });
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Reply appended
    Replied,
    /// Fallback appended
    Failed,
    /// The widget was unmounted before the reply arrived
    Discarded,
}

/// A request that has been recorded in the transcript but not yet sent.
pub struct PendingExchange {
    pub request: ChatRequest,
    target: Weak<RefCell<Session>>,
    event_bus: EventBus,
}

impl PendingExchange {
    /// Send the request and fold the result back into the session.
    ///
    /// Must be spawned via `wasm_bindgen_futures::spawn_local` in the browser.
    /// Never returns an error: failures become the fallback reply.
    pub async fn run(self, port: &dyn ChatPort) -> ExchangeOutcome {
        let session_id = self.request.session_id.clone();
        log::debug!("POST {} session={}", port.endpoint(), session_id);
        let result = port.send(self.request).await;

        let Some(cell) = self.target.upgrade() else {
            log::debug!("Discarding reply for unmounted session {}", session_id);
            self.event_bus.emit(WidgetEvent::ReplyDiscarded { session_id });
            return ExchangeOutcome::Discarded;
        };

        let (event, outcome) = match &result {
            Ok(reply) => (
                WidgetEvent::ReplyReceived {
                    session_id,
                    source_count: reply.knowledge_sources.as_ref().map_or(0, Vec::len),
                },
                ExchangeOutcome::Replied,
            ),
            Err(e) => (
                WidgetEvent::ReplyFailed {
                    session_id,
                    reason: e.to_string(),
                },
                ExchangeOutcome::Failed,
            ),
        };
        transition(&cell, |s| (complete_send(s, result), ()));
        self.event_bus.emit(event);
        outcome
    }
}

/// Apply a by-value reducer to the session behind the cell. The session is
/// moved out for the call, so `f` must not touch the cell.
fn transition<T>(cell: &RefCell<Session>, f: impl FnOnce(Session) -> (Session, T)) -> T {
    let mut slot = cell.borrow_mut();
    let (next, out) = f(std::mem::take(&mut *slot));
    *slot = next;
    out
}
