//! Prediction form: state, controller, view projections and egui renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
