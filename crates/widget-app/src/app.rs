//! Main egui application: one mounted widget plus the optional channel toggle.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, Color32, Frame};

use widget_core::event_bus::{event_log_level, EventBus};
use widget_core::exchange::{ChatWidget, PendingExchange};
use widget_core::ports::ChatPort;
use widget_platform::http::HttpChatClient;
use widget_types::config::{ApiConfig, MountOptions};
use widget_types::event::WidgetEvent;
use widget_ui::panels::{channel_toggle, chat};
use widget_ui::state::{ViewOptions, WidgetView};
use widget_ui::theme;

/// Typing-dots animation step
const TYPING_REPAINT: Duration = Duration::from_millis(300);

pub struct WidgetApp {
    widget: ChatWidget,
    event_bus: EventBus,
    chat: Rc<dyn ChatPort>,
    view_options: ViewOptions,
    /// Text box contents; mirrored into the session on change
    draft: String,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, api: ApiConfig, mount: MountOptions) -> Self {
        let event_bus = EventBus::new();
        let widget = ChatWidget::mount(&mount, event_bus.clone());
        let chat: Rc<dyn ChatPort> = Rc::new(HttpChatClient::new(&api));
        log::info!("Chat endpoint: {}", chat.endpoint());

        Self {
            widget,
            event_bus,
            chat,
            view_options: ViewOptions::from(&mount),
            draft: String::new(),
            first_frame: true,
        }
    }

    /// Run one exchange in the background and repaint when it lands.
    fn dispatch(&self, pending: PendingExchange, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = pending.run(chat.as_ref()).await;
            log::debug!("Exchange finished: {:?}", outcome);
            ctx.request_repaint();
        });
    }
}

fn log_event(event: &WidgetEvent) {
    let level = event_log_level(event);
    match event {
        WidgetEvent::ChannelSwitched { from, to } => {
            log::log!(level, "Channel switched: {} -> {}", from, to)
        }
        other => log::log!(level, "{:?}", other),
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            events.iter().for_each(log_event);
            ctx.request_repaint();
        }

        let page_context = self.widget.session().page_context.clone();
        let view = WidgetView::project(&self.widget.session(), &self.view_options, chrono::Local::now());
        if view.typing {
            ctx.request_repaint_after(TYPING_REPAINT);
        }

        CentralPanel::default()
            .frame(Frame::default().fill(Color32::WHITE).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let input = chat::chat_panel(ui, &view, &mut self.draft);
                    if input.draft_changed {
                        self.widget.set_draft(self.draft.clone());
                    }
                    if input.wants_submit() {
                        if let Some(pending) = self.widget.submit() {
                            self.draft.clear();
                            self.dispatch(pending, ctx);
                        }
                    }

                    if let Some(active) = view.toggle {
                        ui.add_space(16.0);
                        if let Some(channel) =
                            channel_toggle::channel_toggle(ui, active, &page_context)
                        {
                            self.widget.switch_channel(channel);
                        }
                    }
                });
            });
    }
}
