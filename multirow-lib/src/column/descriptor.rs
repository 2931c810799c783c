//! Column configuration.

use indexmap::IndexMap;
use serde_json::Value;

use super::{ColumnKind, ErrorDisplay};
use crate::attributes::OptionBag;
use crate::error::{Result, WidgetError};

/// One column of a tabular input.
///
/// # Examples
///
/// ```
/// use multirow_lib::column::{ColumnDescriptor, ColumnKind, ErrorDisplay};
///
/// let columns = vec![
///     ColumnDescriptor::new("title", ColumnKind::TextInput).title("Title"),
///     ColumnDescriptor::new("id", ColumnKind::Hidden),
///     ColumnDescriptor::new("qty", ColumnKind::TextInput)
///         .attribute_option("required", true)
///         .error_display(ErrorDisplay::Inline),
/// ];
/// assert_eq!(columns[2].attribute_options["required"], true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Attribute name; the last segment of each row's field name.
    pub name: String,
    /// Header text.
    pub title: Option<String>,
    pub kind: ColumnKind,
    /// Model the attribute belongs to, for client validation lookup.
    pub model: Option<String>,
    /// Value used when a row has none.
    pub default_value: Option<Value>,
    /// Client validation options that override the form binding's.
    pub attribute_options: OptionBag,
    /// Extra HTML attributes for the input element.
    pub input_options: IndexMap<String, String>,
    pub error_display: ErrorDisplay,
}

impl ColumnDescriptor {
    /// Create a column.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            title: None,
            kind,
            model: None,
            default_value: None,
            attribute_options: OptionBag::new(),
            input_options: IndexMap::new(),
            error_display: ErrorDisplay::default(),
        }
    }

    /// Set the header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Bind the column to a model attribute.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the value used for rows without one.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Add a client validation option.
    pub fn attribute_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attribute_options.insert(key.into(), value.into());
        self
    }

    /// Add an HTML attribute to the input element.
    pub fn input_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_options.insert(name.into(), value.into());
        self
    }

    /// Set how validation errors are shown.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Checks the column can be turned into form field names.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WidgetError::invalid("columns", "column name must not be empty"));
        }
        if self.name.contains(['[', ']', '{', '}']) {
            return Err(WidgetError::invalid(
                format!("columns.{}", self.name),
                "column name must not contain brackets or braces",
            ));
        }
        if self.name.contains(['\'', '"', '\\', '<', '>']) {
            return Err(WidgetError::invalid(
                format!("columns.{}", self.name),
                "column name must not contain quotes, backslashes or angle brackets",
            ));
        }
        Ok(())
    }

    /// Header label: the title, or the name when untitled.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
