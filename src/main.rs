#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based RUL predictor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use rul_predictor::config;
use rul_predictor::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use rul_predictor::logging;
use rul_predictor::prediction_service::HttpPredictionService;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1280.0, 820.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = build_app(config::load());
    eframe::run_native(
        "RUL Predictor",
        native_options,
        Box::new(move |_cc| Ok(app)),
    )?;
    Ok(())
}

fn build_app(config: Result<config::AppConfig, config::ConfigError>) -> Box<dyn eframe::App> {
    match config {
        Ok(config) => {
            tracing::info!("Using prediction service at {}", config.base_url);
            let service = HttpPredictionService::new(&config.base_url);
            Box::new(EguiApp::new(Arc::new(service)))
        }
        Err(err) => {
            tracing::error!("Failed to load config: {err}");
            Box::new(LaunchError {
                message: err.to_string(),
            })
        }
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}
