//! Error types

mod widget;

pub use widget::*;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, WidgetError>;
