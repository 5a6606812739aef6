//! Brand palette and per-channel brand colors

use egui::{Color32, CornerRadius, Stroke, Vec2};

/// Premultiply at compile time; `alpha` is 0–255.
pub const fn translucent(r: u8, g: u8, b: u8, alpha: u8) -> Color32 {
    let a = alpha as u16;
    Color32::from_rgba_premultiplied(
        (r as u16 * a / 255) as u8,
        (g as u16 * a / 255) as u8,
        (b as u16 * a / 255) as u8,
        alpha,
    )
}

// ProVision brand
pub const GOLD: Color32 = Color32::from_rgb(0xFF, 0xC7, 0x2C);
pub const NAVY: Color32 = Color32::from_rgb(0x14, 0x28, 0x57);
pub const SLATE: Color32 = Color32::from_rgb(0x1C, 0x25, 0x40);
pub const CLOUD: Color32 = Color32::from_rgb(0xF5, 0xF7, 0xFB);
pub const MIST: Color32 = Color32::from_rgb(0xE8, 0xEC, 0xF7);
pub const MUTED: Color32 = Color32::from_rgb(0x8D, 0x97, 0xAF);
pub const SENDER_LABEL: Color32 = Color32::from_rgb(0x71, 0x7C, 0x99);

// Channel brands
pub const IMESSAGE_BLUE: Color32 = Color32::from_rgb(0x00, 0x7A, 0xFF);
pub const SMS_GREY: Color32 = Color32::from_rgb(0xE5, 0xE5, 0xEA);
pub const WHATSAPP_TEAL: Color32 = Color32::from_rgb(0x07, 0x5E, 0x54);
pub const WHATSAPP_GREEN: Color32 = Color32::from_rgb(0x25, 0xD3, 0x66);
pub const WHATSAPP_BUBBLE: Color32 = Color32::from_rgb(0xDC, 0xF8, 0xC6);
pub const WHATSAPP_PAPER: Color32 = Color32::from_rgb(0xEC, 0xE5, 0xDD);
pub const MESSENGER_BLUE: Color32 = Color32::from_rgb(0x00, 0x84, 0xFF);
pub const MESSENGER_DEEP: Color32 = Color32::from_rgb(0x00, 0x66, 0xCC);
pub const INSTAGRAM_BLUE: Color32 = Color32::from_rgb(0x37, 0x97, 0xF0);
pub const INSTAGRAM_LINE: Color32 = Color32::from_rgb(0xDB, 0xDB, 0xDB);
pub const INDIGO: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);
pub const VIOLET: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
pub const NIGHT: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);
pub const NIGHT_RAISED: Color32 = Color32::from_rgb(0x1E, 0x29, 0x3B);
pub const FROST: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);
pub const STEEL: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);

/// Instagram's warm gradient, left to right
pub const INSTAGRAM_STOPS: [Color32; 5] = [
    Color32::from_rgb(0xF0, 0x94, 0x33),
    Color32::from_rgb(0xE6, 0x68, 0x3C),
    Color32::from_rgb(0xDC, 0x27, 0x43),
    Color32::from_rgb(0xCC, 0x23, 0x66),
    Color32::from_rgb(0xBC, 0x18, 0x88),
];

// Send control when disabled
pub const IDLE_FILL: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
pub const IDLE_TEXT: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

// Channel toggle
pub const TOGGLE_IDLE: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);

pub const DEVICE_ROUNDING: CornerRadius = CornerRadius::same(42);
pub const DEVICE_WIDTH: f32 = 420.0;
pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(16);

/// Apply the light site theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = Color32::WHITE;
    style.visuals.window_fill = Color32::WHITE;
    style.visuals.extreme_bg_color = Color32::WHITE;
    style.visuals.override_text_color = Some(SLATE);

    style.visuals.widgets.inactive.bg_fill = TOGGLE_IDLE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, SLATE);
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(0xE3, 0xF2, 0xFD);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, NAVY);
    style.visuals.widgets.active.bg_fill = GOLD;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, NAVY);

    style.visuals.selection.bg_fill = GOLD.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, NAVY);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
