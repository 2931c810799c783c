//! Serializable widget definitions, as read from configuration files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TabularInput;
use crate::attributes::OptionBag;
use crate::column::{ColumnDescriptor, ColumnKind, ErrorDisplay, Items};
use crate::error::{Result, WidgetError};
use crate::options::WidgetOptions;
use crate::render::RendererKind;

/// A widget as written in a definition file.
///
/// # Example
///
/// ```
/// use multirow_lib::WidgetDefinition;
///
/// let definition: WidgetDefinition = serde_json::from_str(r#"{
///     "id": "w0",
///     "name": "items",
///     "min": 0,
///     "columns": [{"name": "title", "title": "Title"}]
/// }"#).unwrap();
///
/// let widget = definition.build().unwrap();
/// assert!(widget.options().rows.allow_empty_list());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input_id: Option<String>,
    /// Model applied to columns that do not name their own.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub renderer: RendererKind,
    #[serde(flatten)]
    pub options: WidgetOptions,
    pub columns: Vec<ColumnDefinition>,
}

impl WidgetDefinition {
    /// Resolves the definition into a widget.
    pub fn build(self) -> Result<TabularInput> {
        let mut builder = TabularInput::builder(self.id, self.name)
            .options(self.options)
            .renderer(self.renderer);
        if let Some(input_id) = self.input_id {
            builder = builder.input_id(input_id);
        }
        if let Some(model) = self.model {
            builder = builder.model(model);
        }
        for column in self.columns {
            builder = builder.column(ColumnDescriptor::try_from(column)?);
        }
        builder.build()
    }
}

impl TryFrom<WidgetDefinition> for TabularInput {
    type Error = WidgetError;

    fn try_from(definition: WidgetDefinition) -> Result<Self> {
        definition.build()
    }
}

/// A column as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDefinition {
    pub name: String,
    pub title: Option<String>,
    /// Kind tag; `text` when absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Choices for `dropdown` and `radio-list`.
    pub items: Items,
    /// Client plugin for `plugin` columns.
    pub plugin: Option<String>,
    pub plugin_options: OptionBag,
    pub model: Option<String>,
    pub default_value: Option<Value>,
    pub attribute_options: OptionBag,
    pub input_options: IndexMap<String, String>,
    pub error_display: ErrorDisplay,
}

impl TryFrom<ColumnDefinition> for ColumnDescriptor {
    type Error = WidgetError;

    fn try_from(definition: ColumnDefinition) -> Result<Self> {
        let kind = ColumnKind::from_tag(
            definition.kind.as_deref().unwrap_or("text"),
            definition.items,
            definition.plugin,
            definition.plugin_options,
        )
        .map_err(|err| match err {
            WidgetError::InvalidConfiguration { message, .. } => {
                WidgetError::invalid(format!("columns.{}.type", definition.name), message)
            }
            other => other,
        })?;

        Ok(Self {
            name: definition.name,
            title: definition.title,
            kind,
            model: definition.model,
            default_value: definition.default_value,
            attribute_options: definition.attribute_options,
            input_options: definition.input_options,
            error_display: definition.error_display,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_definition_defaults_to_text() {
        let column: ColumnDefinition = serde_json::from_str(r#"{"name": "title"}"#).unwrap();
        let column = ColumnDescriptor::try_from(column).unwrap();
        assert_eq!(column.kind, ColumnKind::TextInput);
        assert_eq!(column.error_display, ErrorDisplay::Below);
    }

    #[test]
    fn test_column_definition_plugin() {
        let column: ColumnDefinition = serde_json::from_str(
            r#"{"name": "due", "type": "plugin", "plugin": "datepicker", "pluginOptions": {"autoclose": true}}"#,
        )
        .unwrap();
        let column = ColumnDescriptor::try_from(column).unwrap();
        assert_eq!(column.kind.tag(), "plugin");
    }

    #[test]
    fn test_unknown_column_type() {
        let column: ColumnDefinition =
            serde_json::from_str(r#"{"name": "due", "type": "calendar"}"#).unwrap();
        let err = ColumnDescriptor::try_from(column).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'columns.due.type': unknown column type 'calendar'"
        );
    }

    #[test]
    fn test_widget_definition_flattens_options() {
        let definition: WidgetDefinition = serde_json::from_str(
            r#"{
                "id": "w1",
                "name": "Order[items]",
                "model": "Item",
                "renderer": "list",
                "max": 3,
                "addButtonPosition": "footer",
                "columns": [{"name": "title"}, {"name": "qty", "model": "Line"}]
            }"#,
        )
        .unwrap();
        assert_eq!(definition.options.max, Some(3));

        let widget = definition.build().unwrap();
        assert_eq!(widget.options().rows.max(), 3);
        assert_eq!(widget.columns()[0].model.as_deref(), Some("Item"));
        assert_eq!(widget.columns()[1].model.as_deref(), Some("Line"));
        assert_eq!(widget.input_id(), "order-items");
    }
}
