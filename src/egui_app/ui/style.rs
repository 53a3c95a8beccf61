use egui::{
    Color32, Frame, Margin, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_warm: Color32,
    pub accent_amber: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 12, 14),
        bg_secondary: Color32::from_rgb(24, 25, 28),
        bg_tertiary: Color32::from_rgb(40, 42, 46),
        panel_outline: Color32::from_rgb(70, 72, 78),
        text_primary: Color32::from_rgb(214, 211, 205),
        text_muted: Color32::from_rgb(150, 146, 140),
        accent_warm: Color32::from_rgb(234, 179, 8),
        accent_amber: Color32::from_rgb(252, 211, 77),
        error_fill: Color32::from_rgb(64, 20, 20),
        error_text: Color32::from_rgb(248, 113, 113),
    }
}

/// Flat, square-cornered visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error_text;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_warm);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        set_rectilinear(widget, palette);
    }
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent_warm);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn panel_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(palette().bg_secondary)
        .stroke(panel_border())
        .inner_margin(Margin::same(16))
}
