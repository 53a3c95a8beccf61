//! Library exports for the RUL predictor app and its tests.
/// Application directory resolution.
pub mod app_dirs;
/// Startup configuration loading.
pub mod config;
/// Prediction form UI, controller and state.
pub mod egui_app;
/// Battery feature metadata and draft values.
pub mod features;
mod http_client;
/// Tracing setup.
pub mod logging;
/// Client for the remote prediction service.
pub mod prediction_service;
