//! Chat surface: device bezel, channel header, transcript and input row.

use egui::{
    self, Align, Align2, Color32, CornerRadius, FontId, Frame, Layout, Margin, Mesh, RichText,
    ScrollArea, Sense, Shadow, Shape, Stroke, Vec2, pos2, vec2,
};
use widget_core::exchange::is_submit_keystroke;

use crate::presentation::{
    Avatar, Backdrop, BubbleStyle, Fill, Gradient, HeaderLayout, HeaderStyle, InputStyle,
    SendAffordance, Watermark,
};
use crate::state::{RowView, WidgetView};
use crate::theme::*;

const BACKDROP_SPACING: f32 = 20.0;

/// What the visitor did to the input row this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatInput {
    pub draft_changed: bool,
    pub send_clicked: bool,
    pub enter: bool,
    pub shift: bool,
}

impl ChatInput {
    pub fn wants_submit(&self) -> bool {
        self.send_clicked || is_submit_keystroke(self.enter, self.shift)
    }
}

/// Render the widget. `draft` is edited in place; the caller pushes it into
/// the session when `draft_changed` is set.
pub fn chat_panel(ui: &mut egui::Ui, view: &WidgetView, draft: &mut String) -> ChatInput {
    let style = &view.style;

    painted(
        ui,
        &style.bezel,
        DEVICE_ROUNDING,
        Frame::default().inner_margin(12.0),
        |ui| {
            ui.set_width(DEVICE_WIDTH);
            let container = &style.container;
            painted(
                ui,
                &container.fill,
                CornerRadius::same(container.corner_radius),
                Frame::default().inner_margin(container.padding),
                |ui| {
                    let backdrop_slot = ui.painter().add(Shape::Noop);

                    header(ui, &style.header);
                    transcript(ui, view);
                    ui.add_space(8.0);
                    let input = input_row(ui, view, draft);

                    let area = ui.min_rect();
                    ui.painter().set(backdrop_slot, backdrop(area, container.backdrop));
                    if let Some(mark) = &container.watermark {
                        watermark(ui, area, mark);
                    }
                    input
                },
            )
        },
    )
}

/// Show `frame` with `fill` painted behind it. Gradients go through a mesh.
fn painted<R>(
    ui: &mut egui::Ui,
    fill: &Fill,
    radius: CornerRadius,
    frame: Frame,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    match fill {
        Fill::Solid(color) => frame.fill(*color).corner_radius(radius).show(ui, add_contents).inner,
        Fill::Gradient(gradient) => {
            let slot = ui.painter().add(Shape::Noop);
            let shown = frame.corner_radius(radius).show(ui, add_contents);
            ui.painter()
                .set(slot, gradient_shape(shown.response.rect, gradient, radius));
            shown.inner
        }
    }
}

/// Rounded base in the middle stop, with the gradient laid over the part of
/// the rect that the corners don't touch.
fn gradient_shape(rect: egui::Rect, gradient: &Gradient, radius: CornerRadius) -> Shape {
    let base = Fill::Gradient(*gradient).base();
    let inset = f32::from(radius.nw.max(radius.ne).max(radius.sw).max(radius.se));
    let band = rect.shrink2(vec2(inset, 0.0));

    let mut mesh = Mesh::default();
    let stops = gradient.stops;
    if stops.len() >= 2 && band.width() > 0.0 {
        let last = (stops.len() - 1) as f32;
        for (i, color) in stops.iter().enumerate() {
            let x = band.left() + band.width() * (i as f32 / last);
            mesh.colored_vertex(pos2(x, band.top()), *color);
            mesh.colored_vertex(pos2(x, band.bottom()), *color);
        }
        for i in 0..(stops.len() as u32 - 1) {
            let at = i * 2;
            mesh.add_triangle(at, at + 1, at + 2);
            mesh.add_triangle(at + 1, at + 3, at + 2);
        }
    }

    Shape::Vec(vec![Shape::rect_filled(rect, radius, base), Shape::mesh(mesh)])
}

fn backdrop(area: egui::Rect, backdrop: Backdrop) -> Shape {
    match backdrop {
        Backdrop::Plain => Shape::Noop,
        Backdrop::Dots(color) => {
            let mut dots = Vec::new();
            let mut y = area.top() + BACKDROP_SPACING / 2.0;
            while y < area.bottom() {
                let mut x = area.left() + BACKDROP_SPACING / 2.0;
                while x < area.right() {
                    dots.push(Shape::circle_filled(pos2(x, y), 1.0, color));
                    x += BACKDROP_SPACING;
                }
                y += BACKDROP_SPACING;
            }
            Shape::Vec(dots)
        }
        Backdrop::Rules(color) => {
            let mut rules = Vec::new();
            let mut y = area.top() + BACKDROP_SPACING;
            while y < area.bottom() {
                rules.push(Shape::hline(area.x_range(), y, Stroke::new(1.0, color)));
                y += BACKDROP_SPACING;
            }
            Shape::Vec(rules)
        }
    }
}

fn watermark(ui: &egui::Ui, area: egui::Rect, mark: &Watermark) {
    let painter = ui.painter();
    painter.text(
        area.center(),
        Align2::CENTER_CENTER,
        mark.text,
        FontId::proportional(f32::from(mark.size)),
        mark.color,
    );
    if let Some(footer) = mark.footer {
        painter.text(
            pos2(area.center().x, area.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            footer,
            FontId::proportional(9.0),
            mark.color,
        );
    }
}

fn header(ui: &mut egui::Ui, header: &HeaderStyle) {
    match header.layout {
        HeaderLayout::Caption => {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(header.display_title())
                        .color(header.title_color)
                        .small()
                        .strong(),
                );
            });
            ui.add_space(12.0);
        }
        HeaderLayout::Contact => {
            let fill = header.bar.unwrap_or(Fill::Solid(Color32::TRANSPARENT));
            painted(
                ui,
                &fill,
                CornerRadius::ZERO,
                Frame::default().inner_margin(Margin::symmetric(16, 12)),
                |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if let Some(avatar) = &header.avatar {
                            avatar_badge(ui, avatar);
                        }
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(header.display_title())
                                    .color(header.title_color)
                                    .strong(),
                            );
                            if let Some(subtitle) = header.subtitle {
                                ui.label(
                                    RichText::new(subtitle)
                                        .color(header.subtitle_color)
                                        .small(),
                                );
                            }
                        });
                    });
                },
            );
            if let Some(divider) = header.divider {
                divider_line(ui, divider);
            }
        }
    }
}

fn avatar_badge(ui: &mut egui::Ui, avatar: &Avatar) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 18.0, avatar.fill.base());
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        avatar.glyph,
        FontId::proportional(13.0),
        avatar.glyph_color,
    );
}

fn divider_line(ui: &mut egui::Ui, color: Color32) {
    let rect = ui.available_rect_before_wrap();
    ui.painter()
        .hline(rect.x_range(), rect.top(), Stroke::new(1.0, color));
    ui.add_space(1.0);
}

fn transcript(ui: &mut egui::Ui, view: &WidgetView) {
    let layout = &view.style.transcript;
    let height = f32::from(layout.height);

    ScrollArea::vertical()
        .max_height(height)
        .min_scrolled_height(height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            Frame::default()
                .inner_margin(f32::from(layout.inset))
                .show(ui, |ui| {
                    for row in &view.rows {
                        render_row(ui, row);
                        ui.add_space(6.0);
                    }
                    if view.typing {
                        typing_indicator(ui, &view.style.agent_bubble);
                    }
                });
        });
}

fn render_row(ui: &mut egui::Ui, row: &RowView) {
    let align = if row.align_right() { Align::Max } else { Align::Min };

    ui.with_layout(Layout::top_down(align), |ui| {
        if let Some(sender) = &row.sender {
            ui.label(RichText::new(sender).color(SENDER_LABEL).small().strong());
        }

        let max_width = ui.available_width() * f32::from(row.bubble.max_width_pct) / 100.0;
        painted(
            ui,
            &row.bubble.fill,
            row.bubble.corners,
            bubble_frame(&row.bubble),
            |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&row.text).color(row.bubble.text));
                if let Some(citation) = &row.citation {
                    ui.label(
                        RichText::new(citation)
                            .color(row.bubble.text.gamma_multiply(0.7))
                            .small()
                            .italics(),
                    );
                }
            },
        );

        if let Some(time) = &row.time {
            ui.label(RichText::new(time).color(IDLE_TEXT).small());
        }
    });
}

fn bubble_frame(bubble: &BubbleStyle) -> Frame {
    let mut frame = Frame::default().inner_margin(bubble.padding);
    if let Some(border) = bubble.border {
        frame = frame.stroke(Stroke::new(1.0, border));
    }
    if let Some(color) = bubble.shadow {
        frame = frame.shadow(Shadow {
            offset: [0, 2],
            blur: 6,
            spread: 0,
            color,
        });
    }
    frame
}

fn typing_indicator(ui: &mut egui::Ui, bubble: &BubbleStyle) {
    let phase = (ui.input(|i| i.time) * 3.0) as usize % 3;
    let dots = "•".repeat(phase + 1);

    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        painted(ui, &bubble.fill, bubble.corners, bubble_frame(bubble), |ui| {
            ui.label(RichText::new(format!("{dots:<3}")).color(bubble.text).strong());
        });
    });
}

fn input_row(ui: &mut egui::Ui, view: &WidgetView, draft: &mut String) -> ChatInput {
    let input_style = &view.style.input;
    let send = &view.style.send;
    let mut out = ChatInput::default();

    if let Some(divider) = input_style.bar_divider {
        divider_line(ui, divider);
    }

    Frame::default()
        .fill(input_style.bar.unwrap_or(Color32::TRANSPARENT))
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let send_width = match send.affordance {
                    SendAffordance::Labeled => 64.0,
                    SendAffordance::IconOnly => 36.0,
                };

                let response = ui
                    .scope(|ui| {
                        input_visuals(ui, input_style);
                        let width = ui.available_width() - send_width - 8.0;
                        ui.add(
                            egui::TextEdit::singleline(draft)
                                .hint_text(view.placeholder.as_str())
                                .text_color(input_style.text)
                                .background_color(input_style.fill)
                                .margin(Margin::symmetric(14, 8))
                                .desired_width(width)
                                .font(FontId::proportional(14.0)),
                        )
                    })
                    .inner;

                out.draft_changed = response.changed();
                if response.lost_focus() {
                    let (enter, shift) =
                        ui.input(|i| (i.key_pressed(egui::Key::Enter), i.modifiers.shift));
                    out.enter = enter;
                    out.shift = shift;
                    if enter {
                        response.request_focus();
                    }
                }

                let (fill, text) = if view.send_enabled {
                    (send.active_fill.base(), send.active_text)
                } else {
                    (send.disabled_fill, send.disabled_text)
                };
                let button = egui::Button::new(RichText::new(view.send_label).color(text).strong())
                    .fill(fill)
                    .corner_radius(CornerRadius::same(18))
                    .min_size(Vec2::new(send_width, 36.0));
                out.send_clicked = ui.add_enabled(view.send_enabled, button).clicked();
            });
        });

    out
}

fn input_visuals(ui: &mut egui::Ui, input: &InputStyle) {
    let stroke = Stroke::new(1.0, input.border.unwrap_or(Color32::TRANSPARENT));
    let radius = CornerRadius::same(input.corner_radius);
    let widgets = &mut ui.visuals_mut().widgets;
    for state in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
        state.bg_stroke = stroke;
        state.corner_radius = radius;
    }
}
