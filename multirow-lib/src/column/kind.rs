//! Input kinds a column can render.

use indexmap::IndexMap;
use serde_json::Value;

use crate::attributes::OptionBag;
use crate::error::{Result, WidgetError};
use crate::html::Tag;
use crate::options::{Icon, IconSource};
use crate::scripts::{ScriptPosition, ScriptRegistry};

/// Choice list for select and radio inputs: value → label.
pub type Items = IndexMap<String, String>;

/// What a column renders for each row.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    TextInput,
    TextArea,
    Hidden,
    DropDown { items: Items },
    Checkbox,
    RadioList { items: Items },
    /// Read-only value, no form input.
    Static,
    /// Grip used to drag rows. Requires sortable rows.
    DragHandle,
    /// Text input enhanced by a client-side plugin.
    ///
    /// Registers `jQuery('#id').plugin(options);` in the ready bucket for
    /// every rendered element.
    Plugin { plugin: String, options: OptionBag },
}

impl ColumnKind {
    /// Builds a kind from its definition tag.
    ///
    /// `items` is used by the choice kinds and `plugin`/`options` by the
    /// plugin kind.
    pub fn from_tag(
        tag: &str,
        items: Items,
        plugin: Option<String>,
        options: OptionBag,
    ) -> Result<Self> {
        Ok(match tag {
            "text" => Self::TextInput,
            "textarea" => Self::TextArea,
            "hidden" => Self::Hidden,
            "dropdown" => Self::DropDown { items },
            "checkbox" => Self::Checkbox,
            "radio-list" => Self::RadioList { items },
            "static" => Self::Static,
            "drag-handle" => Self::DragHandle,
            "plugin" => {
                let plugin = plugin.filter(|p| !p.is_empty()).ok_or_else(|| {
                    WidgetError::invalid("type", "plugin columns need a plugin name")
                })?;
                Self::Plugin { plugin, options }
            }
            other => {
                return Err(WidgetError::invalid(
                    "type",
                    format!("unknown column type '{}'", other),
                ));
            }
        })
    }

    /// Definition tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TextInput => "text",
            Self::TextArea => "textarea",
            Self::Hidden => "hidden",
            Self::DropDown { .. } => "dropdown",
            Self::Checkbox => "checkbox",
            Self::RadioList { .. } => "radio-list",
            Self::Static => "static",
            Self::DragHandle => "drag-handle",
            Self::Plugin { .. } => "plugin",
        }
    }

    /// Returns `true` if the kind submits a form value.
    pub fn has_input(&self) -> bool {
        !matches!(self, Self::Static | Self::DragHandle)
    }

    /// Returns `true` if the kind is rendered without a visible cell.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn is_drag_handle(&self) -> bool {
        matches!(self, Self::DragHandle)
    }

    /// Renders the input element for one row.
    ///
    /// Plugin kinds register their initializer in `registry`.
    pub fn render(&self, input: &InputContext<'_>, registry: &mut dyn ScriptRegistry) -> Result<String> {
        let value = input.value.map(value_to_string).unwrap_or_default();
        let element = |name: &'static str| {
            Tag::new(name)
                .attr("id", input.id.as_str())
                .attr("name", input.name.as_str())
                .attrs(input.options)
        };

        let markup = match self {
            Self::TextInput => element("input")
                .attr("type", "text")
                .class("form-control")
                .attr("value", value)
                .render(),
            Self::Hidden => element("input")
                .attr("type", "hidden")
                .attr("value", value)
                .render(),
            Self::TextArea => element("textarea")
                .class("form-control")
                .text(&value)
                .render(),
            Self::DropDown { items } => {
                let mut select = element("select").class("form-control");
                for (option_value, label) in items {
                    let mut option = Tag::new("option").attr("value", option_value.as_str());
                    if *option_value == value {
                        option = option.attr("selected", "selected");
                    }
                    select = select.raw(&option.text(label).render());
                }
                select.render()
            }
            Self::Checkbox => {
                let hidden = Tag::new("input")
                    .attr("type", "hidden")
                    .attr("name", input.name.as_str())
                    .attr("value", "0")
                    .render();
                let mut checkbox = element("input").attr("type", "checkbox").attr("value", "1");
                if is_checked(input.value) {
                    checkbox = checkbox.attr("checked", "checked");
                }
                format!("{}{}", hidden, checkbox.render())
            }
            Self::RadioList { items } => {
                let mut list = Tag::new("div").attr("id", input.id.as_str()).attrs(input.options);
                for (option_value, label) in items {
                    let mut radio = Tag::new("input")
                        .attr("type", "radio")
                        .attr("name", input.name.as_str())
                        .attr("value", option_value.as_str());
                    if *option_value == value {
                        radio = radio.attr("checked", "checked");
                    }
                    let label = Tag::new("label")
                        .raw(&radio.render())
                        .text(" ")
                        .text(label)
                        .render();
                    list = list.raw(&Tag::new("div").class("radio").raw(&label).render());
                }
                list.render()
            }
            Self::Static => Tag::new("p")
                .class("form-control-static")
                .attrs(input.options)
                .text(&value)
                .render(),
            Self::DragHandle => drag_handle(input.icons),
            Self::Plugin { plugin, options } => {
                let script = format!(
                    "jQuery('#{}').{}({});",
                    input.id,
                    plugin,
                    serde_json::to_string(options)?
                );
                registry.append(ScriptPosition::Ready, script);
                element("input")
                    .attr("type", "text")
                    .class("form-control")
                    .attr("value", value)
                    .render()
            }
        };
        Ok(markup)
    }
}

/// Per-row data an input is rendered with.
#[derive(Debug, Clone)]
pub struct InputContext<'a> {
    /// Form field name.
    pub name: String,
    /// Element id.
    pub id: String,
    pub value: Option<&'a Value>,
    /// Extra HTML attributes for the input element.
    pub options: &'a IndexMap<String, String>,
    pub icons: IconSource,
}

/// Markup of the element rows are dragged by.
pub fn drag_handle(icons: IconSource) -> String {
    Tag::new("span")
        .class("drag-handle")
        .raw(&icons.markup(Icon::DragHandle))
        .render()
}

/// Renders a JSON value as a form field value.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => String::from(if *b { "1" } else { "0" }),
        other => other.to_string(),
    }
}

fn is_checked(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        _ => false,
    }
}
