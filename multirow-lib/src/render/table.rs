//! Table layout: one `<tr>` per row, one cell per visible column.

use log::trace;

use super::{
    RenderContext, Renderer, RowIndex, RowValues, action_buttons, actions_at_begin, button,
    empty_list_input, implicit_drag_cell, render_inputs,
};
use crate::column::drag_handle;
use crate::error::Result;
use crate::html::Tag;
use crate::options::ButtonPosition;
use crate::scripts::ScriptRegistry;

/// Renders rows as table rows. Supports drag-reordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    fn header(&self, ctx: &RenderContext<'_>) -> String {
        let options = ctx.options;
        let header_button = options.placement.contains(ButtonPosition::Header);
        let has_titles = ctx.columns.iter().any(|c| c.title.is_some());
        if !header_button && !has_titles {
            return String::new();
        }

        let action_cell = {
            let cell = Tag::new("th").class("list-cell__button");
            if header_button {
                cell.raw(&button(&options.add_button)).render()
            } else {
                cell.render()
            }
        };

        let mut row = String::new();
        if implicit_drag_cell(ctx) {
            row.push_str(&Tag::new("th").class("list-cell__drag").render());
        }
        if actions_at_begin(options) {
            row.push_str(&action_cell);
        }
        for column in ctx.columns.iter().filter(|c| !c.kind.is_hidden()) {
            row.push_str(
                &Tag::new("th")
                    .class(&format!("list-cell__{}", column.name))
                    .text(column.title.as_deref().unwrap_or_default())
                    .render(),
            );
        }
        if !actions_at_begin(options) {
            row.push_str(&action_cell);
        }

        Tag::new("thead")
            .raw(&Tag::new("tr").raw(&row).render())
            .render()
    }

    fn footer(&self, ctx: &RenderContext<'_>) -> String {
        let options = ctx.options;
        if !options.placement.contains(ButtonPosition::Footer) {
            return String::new();
        }

        let mut span = ctx.columns.iter().filter(|c| !c.kind.is_hidden()).count() + 1;
        if implicit_drag_cell(ctx) {
            span += 1;
        }
        let cell = Tag::new("td")
            .class("list-cell__button")
            .attr("colspan", span.to_string())
            .raw(&button(&options.add_button));
        Tag::new("tfoot")
            .raw(&Tag::new("tr").raw(&cell.render()).render())
            .render()
    }
}

impl Renderer for TableRenderer {
    fn name(&self) -> &'static str {
        "table"
    }

    fn render_row(
        &self,
        ctx: &RenderContext<'_>,
        index: &RowIndex,
        values: Option<&RowValues>,
        registry: &mut dyn ScriptRegistry,
    ) -> Result<String> {
        trace!("Rendering table row {:?} of {}", index, ctx.id);
        let options = ctx.options;
        let cells = render_inputs(ctx, index, values, registry)?;

        let hidden: String = cells
            .iter()
            .filter(|cell| cell.column.kind.is_hidden())
            .map(|cell| cell.markup.as_str())
            .collect();

        let mut visible: Vec<String> = cells
            .iter()
            .filter(|cell| !cell.column.kind.is_hidden())
            .map(|cell| {
                if cell.column.kind.is_drag_handle() {
                    return Tag::new("td")
                        .class(&format!("list-cell__{}", cell.column.name))
                        .class("list-cell__drag")
                        .raw(&cell.markup)
                        .render();
                }
                let group = Tag::new("div")
                    .class("form-group")
                    .class(&format!("field-{}", cell.id))
                    .raw(&cell.markup);
                Tag::new("td")
                    .class(&format!("list-cell__{}", cell.column.name))
                    .raw(&group.render())
                    .render()
            })
            .collect();

        let actions = Tag::new("td")
            .class("list-cell__button")
            .raw(&action_buttons(ctx, index))
            .render();

        // Hidden inputs ride inside the first visible cell.
        let mut hidden_placed = hidden.is_empty();
        if let Some(first) = visible.first_mut().filter(|_| !hidden_placed) {
            if let Some(pos) = first.find('>') {
                first.insert_str(pos + 1, &hidden);
                hidden_placed = true;
            }
        }

        let mut row = String::new();
        if implicit_drag_cell(ctx) {
            let mut handle = Tag::new("td")
                .class("list-cell__drag")
                .raw(&drag_handle(options.icon_source));
            if !hidden_placed {
                handle = handle.raw(&hidden);
                hidden_placed = true;
            }
            row.push_str(&handle.render());
        }
        if actions_at_begin(options) {
            row.push_str(&actions);
        }
        for cell in &visible {
            row.push_str(cell);
        }
        if !actions_at_begin(options) {
            row.push_str(&actions);
        }
        if !hidden_placed {
            row.push_str(&Tag::new("td").raw(&hidden).render());
        }

        Ok(Tag::new("tr")
            .class("multiple-input-list__item")
            .raw(&row)
            .render())
    }

    fn render_list(&self, ctx: &RenderContext<'_>, rows: &str) -> Result<String> {
        let table = Tag::new("table")
            .class("multiple-input-list table table-condensed table-renderer")
            .raw(&self.header(ctx))
            .raw(&Tag::new("tbody").raw(rows).render())
            .raw(&self.footer(ctx));

        Ok(Tag::new("div")
            .attr("id", ctx.id)
            .class("multiple-input")
            .raw(&empty_list_input(ctx))
            .raw(&table.render())
            .render())
    }

    fn sortable_container(&self) -> Result<&'static str> {
        Ok("table.multiple-input-list > tbody")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDescriptor, ColumnKind};
    use crate::options::{OneOrMany, WidgetOptions};
    use crate::scripts::PageScripts;

    fn options(sortable: bool, positions: Vec<ButtonPosition>) -> crate::options::ResolvedOptions {
        WidgetOptions {
            sortable,
            add_button_position: Some(OneOrMany::Many(positions)),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", ColumnKind::Hidden),
            ColumnDescriptor::new("title", ColumnKind::TextInput).title("Title"),
        ]
    }

    #[test]
    fn test_row_places_hidden_inputs_in_first_cell() {
        let options = options(false, vec![]);
        let columns = columns();
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &columns,
            options: &options,
        };

        let row = TableRenderer
            .render_row(&ctx, &RowIndex::Index(0), None, &mut PageScripts::new())
            .unwrap();
        assert!(row.starts_with(
            "<tr class=\"multiple-input-list__item\"><td class=\"list-cell__title\"><input id=\"items-0-id\""
        ));
        assert!(row.contains("field-items-0-title"));
        assert!(row.ends_with("</td></tr>"));
    }

    #[test]
    fn test_row_begin_and_drag_handle() {
        let options = options(true, vec![ButtonPosition::RowBegin]);
        let columns = columns();
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &columns,
            options: &options,
        };

        let row = TableRenderer
            .render_row(&ctx, &RowIndex::Index(0), None, &mut PageScripts::new())
            .unwrap();
        let drag = row.find("list-cell__drag").unwrap();
        let button = row.find("list-cell__button").unwrap();
        let title = row.find("list-cell__title").unwrap();
        assert!(drag < button && button < title);
    }

    #[test]
    fn test_drag_handle_column_replaces_leading_cell() {
        let options = options(true, vec![]);
        let columns = vec![
            ColumnDescriptor::new("title", ColumnKind::TextInput).title("Title"),
            ColumnDescriptor::new("grip", ColumnKind::DragHandle),
        ];
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &columns,
            options: &options,
        };

        let row = TableRenderer
            .render_row(&ctx, &RowIndex::Index(0), None, &mut PageScripts::new())
            .unwrap();
        assert_eq!(row.matches("drag-handle").count(), 1);
        assert!(row.find("list-cell__title").unwrap() < row.find("list-cell__grip").unwrap());
        assert!(row.contains("<td class=\"list-cell__grip list-cell__drag\"><span class=\"drag-handle\">"));

        let markup = TableRenderer.render_list(&ctx, "").unwrap();
        assert_eq!(markup.matches("<th").count(), 3);
    }

    #[test]
    fn test_list_header_and_footer() {
        let options = options(false, vec![ButtonPosition::Header, ButtonPosition::Footer]);
        let columns = columns();
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &columns,
            options: &options,
        };

        let markup = TableRenderer.render_list(&ctx, "<tr></tr>").unwrap();
        assert!(markup.starts_with("<div id=\"w0\" class=\"multiple-input\"><table"));
        assert!(markup.contains("<th class=\"list-cell__title\">Title</th>"));
        assert!(markup.contains("<tbody><tr></tr></tbody>"));
        assert!(markup.contains("colspan=\"2\""));
        assert!(!markup.contains("list-cell__id"));
    }
}
