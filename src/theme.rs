//! Dark space theme for the globe view

use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(12, 12, 12);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);

    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 40);

    // === Status ===
    pub const STATUS_OK: Color32 = Color32::from_rgb(100, 200, 100);
    pub const STATUS_PENDING: Color32 = Color32::from_rgb(200, 200, 100);
    pub const STATUS_ERROR: Color32 = Color32::from_rgb(200, 100, 100);

    // === Scene fallbacks when textures are missing ===
    pub const OCEAN: Color32 = Color32::from_rgb(18, 52, 96);
    pub const STAR: Color32 = Color32::from_rgb(220, 220, 230);

    /// Marker and pulse base colour (0xff0000)
    pub const MARKER: Color32 = Color32::from_rgb(255, 0, 0);
}

/// Marker colour at a given opacity in 0..=1
pub fn marker_color(opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(colors::MARKER.r(), colors::MARKER.g(), colors::MARKER.b(), alpha)
}

pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    // Tooltips
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
