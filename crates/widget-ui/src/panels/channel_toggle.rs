//! SMS / WhatsApp switcher shown under the widget when the host page asks for it.

use egui::{self, Color32, CornerRadius, RichText, Stroke, Vec2};
use widget_types::channel::{Channel, TOGGLE_CHANNELS};

use crate::presentation::resolve;
use crate::theme::*;

/// Returns the channel the visitor picked this frame, if any.
pub fn channel_toggle(ui: &mut egui::Ui, active: Channel, page_context: &str) -> Option<Channel> {
    let mut picked = None;

    egui::Frame::default()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, TOGGLE_IDLE))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(DEVICE_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Switch Communication Channel")
                        .color(NAVY)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    for channel in TOGGLE_CHANNELS {
                        let selected = channel == active;
                        let (fill, text) = if selected {
                            (resolve(channel, page_context).send.active_fill.base(), Color32::WHITE)
                        } else {
                            (TOGGLE_IDLE, SLATE)
                        };
                        let button = egui::Button::new(
                            RichText::new(channel.label()).color(text).strong(),
                        )
                        .fill(fill)
                        .corner_radius(CornerRadius::same(20))
                        .min_size(Vec2::new(120.0, 36.0));

                        if ui.add(button).clicked() && !selected {
                            log::debug!("Channel toggle: {} -> {}", active, channel);
                            picked = Some(channel);
                        }
                    }
                });
            });
        });

    picked
}
