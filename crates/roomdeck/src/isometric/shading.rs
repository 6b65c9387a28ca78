use egui::{Color32, Stroke};

pub const LEFT_SHADE: f32 = 0.70;
pub const RIGHT_SHADE: f32 = 0.85;
pub const TOP_SHADE: f32 = 1.0;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0b, 0x11, 0x20);
pub const GRID: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const OUTLINE: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);

pub fn outline_stroke() -> Stroke {
    Stroke::new(1.0, OUTLINE)
}

pub fn highlight_stroke() -> Stroke {
    Stroke::new(2.0, HIGHLIGHT)
}

/// Translucent tint laid over a selected item's top face.
pub fn highlight_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(56, 189, 248, 51)
}

/// Scale each channel by `amount`, rounding and clamping to 0..=255.
pub fn shade(color: Color32, amount: f32) -> Color32 {
    let ch = |c: u8| (c as f32 * amount).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(ch(color.r()), ch(color.g()), ch(color.b()))
}
