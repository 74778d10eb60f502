//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (config files, OS keychain,
//! the story-generation HTTP client).

pub mod app_config;
pub mod host;
pub mod story;
