//! Row and list markup renderers.

mod list;
mod table;

pub use list::ListRenderer;
pub use table::TableRenderer;

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::{ColumnDescriptor, InputContext};
use crate::error::{Result, WidgetError};
use crate::html::{Tag, element_id, input_name};
use crate::options::{ButtonPosition, ResolvedButton, ResolvedOptions};
use crate::scripts::ScriptRegistry;

/// Submitted or stored values of one row, keyed by column name.
pub type RowValues = IndexMap<String, Value>;

/// Which row is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIndex {
    /// A concrete row.
    Index(usize),
    /// The cloneable template; holds the `{placeholder}` used as index.
    Template(String),
}

impl RowIndex {
    fn as_name_segment(&self) -> String {
        match self {
            Self::Index(i) => i.to_string(),
            Self::Template(placeholder) => placeholder.clone(),
        }
    }
}

/// Widget state a renderer works from.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Root element id.
    pub id: &'a str,
    /// Form field name prefix.
    pub name: &'a str,
    /// Id of the list-level input.
    pub input_id: &'a str,
    pub columns: &'a [ColumnDescriptor],
    pub options: &'a ResolvedOptions,
}

/// Produces the markup for a tabular input.
pub trait Renderer {
    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Renders one row.
    fn render_row(
        &self,
        ctx: &RenderContext<'_>,
        index: &RowIndex,
        values: Option<&RowValues>,
        registry: &mut dyn ScriptRegistry,
    ) -> Result<String>;

    /// Wraps already rendered rows with the list chrome.
    fn render_list(&self, ctx: &RenderContext<'_>, rows: &str) -> Result<String>;

    /// Selector, relative to the widget root, of the element whose children
    /// are the draggable rows.
    fn sortable_container(&self) -> Result<&'static str> {
        Err(WidgetError::unsupported(self.name(), "sortable rows"))
    }
}

/// Built-in renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    #[default]
    Table,
    List,
}

impl RendererKind {
    /// The renderer implementation.
    pub fn renderer(self) -> Arc<dyn Renderer + Send + Sync> {
        match self {
            Self::Table => Arc::new(TableRenderer),
            Self::List => Arc::new(ListRenderer),
        }
    }
}

/// A rendered input cell before it is wrapped by the renderer.
pub(crate) struct Cell<'a> {
    pub column: &'a ColumnDescriptor,
    pub id: String,
    pub markup: String,
}

/// Renders the inputs of every column for one row.
pub(crate) fn render_inputs<'a>(
    ctx: &RenderContext<'a>,
    index: &RowIndex,
    values: Option<&RowValues>,
    registry: &mut dyn ScriptRegistry,
) -> Result<Vec<Cell<'a>>> {
    let segment = index.as_name_segment();
    let mut cells = Vec::with_capacity(ctx.columns.len());

    for column in ctx.columns {
        let name = input_name(ctx.name, &segment, &column.name);
        let id = element_id(&name);
        let value = values
            .and_then(|row| row.get(&column.name))
            .or(column.default_value.as_ref());

        let input = InputContext {
            name,
            id: id.clone(),
            value,
            options: &column.input_options,
            icons: ctx.options.icon_source,
        };
        let mut markup = column.kind.render(&input, registry)?;
        if column.kind.has_input() {
            if let Some(block) = column.error_display.error_block() {
                markup.push_str(&block);
            }
        }
        cells.push(Cell { column, id, markup });
    }

    Ok(cells)
}

/// Markup of a resolved button.
pub(crate) fn button(button: &ResolvedButton) -> String {
    Tag::new("div")
        .class(&button.css_class)
        .attrs(&button.attributes)
        .raw(&button.label)
        .render()
}

/// Buttons shown in a row's action cell.
///
/// The template and lists that may be empty always get a remove button.
/// Otherwise rows up to the minimum cannot be removed, and the last of them
/// carries the add button when it is placed in rows.
pub(crate) fn action_buttons(ctx: &RenderContext<'_>, index: &RowIndex) -> String {
    let options = ctx.options;
    let min = options.rows.min() as usize;

    let action = match index {
        RowIndex::Template(_) => Some(&options.remove_button),
        _ if min == 0 => Some(&options.remove_button),
        RowIndex::Index(i) => {
            let number = i + 1;
            if number < min {
                None
            } else if number == min {
                options.placement.in_row().then_some(&options.add_button)
            } else {
                Some(&options.remove_button)
            }
        }
    };

    let mut markup = String::new();
    if let Some(clone) = &options.clone_button {
        markup.push_str(&button(clone));
    }
    if let Some(action) = action {
        markup.push_str(&button(action));
    }
    markup
}

/// Whether the action cell sits at the start of the row.
pub(crate) fn actions_at_begin(options: &ResolvedOptions) -> bool {
    options.placement.contains(ButtonPosition::RowBegin)
}

/// Whether the renderer adds its own drag handle cell to each row.
///
/// Sortable widgets without a drag handle column get one in front.
pub(crate) fn implicit_drag_cell(ctx: &RenderContext<'_>) -> bool {
    ctx.options.sortable && !ctx.columns.iter().any(|c| c.kind.is_drag_handle())
}

/// Hidden input submitted when the list has no rows.
pub(crate) fn empty_list_input(ctx: &RenderContext<'_>) -> String {
    if !ctx.options.rows.allow_empty_list() {
        return String::new();
    }
    Tag::new("input")
        .attr("type", "hidden")
        .attr("id", ctx.input_id)
        .attr("name", ctx.name)
        .attr("value", "")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnKind;
    use crate::options::{ButtonOptions, OneOrMany, WidgetOptions};

    fn resolve(min: i64, position: Option<ButtonPosition>, clone: bool) -> ResolvedOptions {
        WidgetOptions {
            min: Some(min),
            add_button_position: position.map(OneOrMany::One),
            add_button_options: ButtonOptions::default().label("add"),
            remove_button_options: ButtonOptions::default().label("remove"),
            clone_button_options: clone.then(|| ButtonOptions::default().label("clone")),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    fn context<'a>(options: &'a ResolvedOptions, columns: &'a [ColumnDescriptor]) -> RenderContext<'a> {
        RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns,
            options,
        }
    }

    #[test]
    fn test_action_buttons_min_two_row_placement() {
        let options = resolve(2, None, false);
        let ctx = context(&options, &[]);

        assert_eq!(action_buttons(&ctx, &RowIndex::Index(0)), "");
        assert!(action_buttons(&ctx, &RowIndex::Index(1)).contains(">add<"));
        assert!(action_buttons(&ctx, &RowIndex::Index(2)).contains(">remove<"));
        assert!(action_buttons(&ctx, &RowIndex::Template("{p}".into())).contains(">remove<"));
    }

    #[test]
    fn test_action_buttons_header_placement() {
        let options = resolve(1, Some(ButtonPosition::Header), false);
        let ctx = context(&options, &[]);
        assert_eq!(action_buttons(&ctx, &RowIndex::Index(0)), "");
    }

    #[test]
    fn test_action_buttons_empty_list_and_clone() {
        let options = resolve(0, None, true);
        let ctx = context(&options, &[]);
        let markup = action_buttons(&ctx, &RowIndex::Index(0));
        assert!(markup.contains(">clone<"));
        assert!(markup.contains(">remove<"));
    }

    #[test]
    fn test_render_inputs_uses_defaults_and_error_block() {
        let options = resolve(1, None, false);
        let columns = vec![
            ColumnDescriptor::new("title", ColumnKind::TextInput).default_value("untitled"),
            ColumnDescriptor::new("note", ColumnKind::Static),
        ];
        let ctx = context(&options, &columns);

        let mut registry = crate::scripts::PageScripts::new();
        let cells = render_inputs(&ctx, &RowIndex::Index(3), None, &mut registry).unwrap();
        assert_eq!(cells[0].id, "items-3-title");
        assert!(cells[0].markup.contains("value=\"untitled\""));
        assert!(cells[0].markup.ends_with("<div class=\"help-block help-block-error\"></div>"));
        assert!(!cells[1].markup.contains("help-block"));
    }
}
