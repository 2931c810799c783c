//! Column kinds and column configuration.

mod descriptor;
mod error_display;
mod kind;

pub use descriptor::ColumnDescriptor;
pub use error_display::ErrorDisplay;
pub use kind::*;
