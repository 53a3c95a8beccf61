use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, RESULT_PLACEHOLDER, ResultView};
use crate::features::FeatureKey;
use eframe::egui::{self, RichText};

const INPUT_WIDTH: f32 = 260.0;

impl EguiApp {
    /// Render the feature inputs, the submit button and the result area.
    pub(super) fn render_prediction_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("Input Battery Cycle Features")
                .size(20.0)
                .strong()
                .color(palette.accent_warm),
        );
        ui.separator();
        ui.add_space(8.0);

        let mut submit_requested = false;
        egui::Grid::new("feature_inputs")
            .num_columns(2)
            .spacing([24.0, 14.0])
            .show(ui, |ui| {
                for (index, key) in FeatureKey::ALL.into_iter().enumerate() {
                    submit_requested |= self.render_feature_input(ui, key);
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(16.0);
        let enabled = view_model::submit_enabled(&self.controller.ui.form);
        let label = if enabled {
            "PREDICT REMAINING USEFUL LIFE"
        } else {
            "PREDICTING…"
        };
        let button = egui::Button::new(
            RichText::new(label)
                .strong()
                .color(egui::Color32::BLACK),
        )
        .fill(palette.accent_warm)
        .min_size(egui::vec2(ui.available_width(), 44.0));
        if ui.add_enabled(enabled, button).clicked() {
            submit_requested = true;
        }
        if submit_requested {
            self.controller.submit_prediction();
        }

        ui.add_space(16.0);
        self.render_result(ui);
    }

    /// Returns true when Enter was pressed in the field.
    fn render_feature_input(&mut self, ui: &mut egui::Ui, key: FeatureKey) -> bool {
        let spec = key.spec();
        let mut submit = false;
        ui.vertical(|ui| {
            ui.label(RichText::new(spec.label).strong());
            let mut buffer = self.controller.ui.form.draft.get(key).to_string();
            let response = ui
                .add(
                    egui::TextEdit::singleline(&mut buffer)
                        .id_salt(spec.key)
                        .hint_text("Enter value")
                        .desired_width(INPUT_WIDTH),
                )
                .on_hover_text(spec.unit);
            if response.changed() {
                self.controller.input_changed(key, buffer);
            }
            submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        });
        submit
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let view = view_model::result_view(&self.controller.ui.form);
        egui::Frame::new()
            .fill(palette.bg_primary)
            .stroke(style::panel_border())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Predicted RUL").size(20.0).strong());
                ui.separator();
                ui.vertical_centered(|ui| match &view {
                    ResultView::Loading => {
                        ui.add(egui::Spinner::new().size(32.0));
                    }
                    ResultView::Prediction { cycles } => {
                        ui.label(RichText::new(cycles).size(44.0).strong());
                        ui.label(
                            RichText::new("Remaining Cycles")
                                .size(16.0)
                                .color(palette.accent_amber),
                        );
                    }
                    ResultView::Error { banner } => {
                        egui::Frame::new()
                            .fill(palette.error_fill)
                            .stroke(egui::Stroke::new(1.0, palette.error_text))
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.label(RichText::new(banner).color(palette.error_text));
                            });
                    }
                    ResultView::Placeholder => {
                        ui.label(RichText::new(RESULT_PLACEHOLDER).color(palette.text_muted));
                    }
                });
            });
    }
}
