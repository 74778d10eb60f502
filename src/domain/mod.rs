//! Domain types for the StoryWeave application
//! Defines the core data structures and business objects used throughout the application.

pub mod error;
pub mod story;

pub use error::*;
pub use story::*;
