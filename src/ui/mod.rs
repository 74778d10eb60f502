//! UI layer - egui views and application state.

pub mod app;
pub mod theme;
pub mod views;
