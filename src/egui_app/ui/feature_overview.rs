use super::EguiApp;
use super::style;
use crate::features::FEATURES;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_feature_overview(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Feature Overview").size(18.0).strong());
        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("feature_overview_scroll")
            .show(ui, |ui| {
                for spec in &FEATURES {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{}:", spec.label)).strong());
                        ui.label(RichText::new(spec.description).color(palette.text_muted));
                    });
                    ui.separator();
                }
            });
    }
}
