//! Repeatable "tabular input" widget for server-rendered forms.
//!
//! Resolves raw widget options into an immutable configuration, renders the
//! rows plus a cloneable row template, and merges the widget's client-side
//! bootstrap into a page-wide script registry without disturbing scripts
//! emitted by other code.

pub mod attributes;
pub mod column;
pub mod config;
pub mod error;
pub mod html;
pub mod options;
pub mod render;
pub mod scripts;
pub mod widget;

pub use error::{Result, WidgetError};
pub use widget::{RenderOutput, TabularInput, TabularInputBuilder, WidgetDefinition};

pub mod prelude {
    pub use crate::attributes::{ClientValidation, FormBinding, OptionBag, StaticBinding};
    pub use crate::column::{ColumnDescriptor, ColumnKind, ErrorDisplay};
    pub use crate::config::WidgetConfig;
    pub use crate::error::{Result, WidgetError};
    pub use crate::options::{ButtonOptions, ButtonPlacement, ButtonPosition, IconSource};
    pub use crate::render::{ListRenderer, RendererKind, TableRenderer};
    pub use crate::scripts::{PageScripts, ScriptPosition, ScriptRegistry};
    pub use crate::widget::{RenderOutput, RowValues, TabularInput, WidgetDefinition};
}
