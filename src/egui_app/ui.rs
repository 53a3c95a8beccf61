//! egui renderer for the application UI.

mod feature_overview;
mod prediction_panel;
pub mod style;

use std::sync::Arc;
use std::time::Duration;

use crate::egui_app::controller::EguiController;
use crate::prediction_service::PredictionService;
use eframe::egui::{self, RichText};

/// Smallest window that still fits the two-column form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// How often the UI wakes to collect a pending prediction.
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and fire the startup warm-up request.
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        let controller = EguiController::new(service);
        controller.start_warm_up();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("RUL Prediction Engine").size(30.0).strong());
        ui.label(
            RichText::new(
                "Estimate the Remaining Useful Life (RUL) of NMC-LCO 18650 Li-ion batteries \
                 based on cycle-level degradation features.",
            )
            .color(palette.text_muted),
        );
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        egui::TopBottomPanel::top("header")
            .frame(style::panel_frame())
            .show(ctx, |ui| self.render_header(ui));
        egui::SidePanel::right("feature_overview")
            .resizable(false)
            .default_width(340.0)
            .frame(style::panel_frame())
            .show(ctx, |ui| self.render_feature_overview(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("prediction_scroll")
                .show(ui, |ui| self.render_prediction_panel(ui));
        });

        if self.controller.is_prediction_in_progress() {
            ctx.request_repaint_after(JOB_POLL_INTERVAL);
        }
    }
}
