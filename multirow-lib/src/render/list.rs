//! Stacked layout: each row is a block of labelled form groups.

use super::{
    RenderContext, Renderer, RowIndex, RowValues, action_buttons, actions_at_begin, button,
    empty_list_input, render_inputs,
};
use crate::error::Result;
use crate::html::Tag;
use crate::options::ButtonPosition;
use crate::scripts::ScriptRegistry;

/// Renders rows as stacked blocks. Has no drag-reorder support.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl Renderer for ListRenderer {
    fn name(&self) -> &'static str {
        "list"
    }

    fn render_row(
        &self,
        ctx: &RenderContext<'_>,
        index: &RowIndex,
        values: Option<&RowValues>,
        registry: &mut dyn ScriptRegistry,
    ) -> Result<String> {
        let cells = render_inputs(ctx, index, values, registry)?;

        let mut groups = String::new();
        for cell in &cells {
            if cell.column.kind.is_hidden() {
                groups.push_str(&cell.markup);
                continue;
            }
            let mut group = Tag::new("div")
                .class(&format!("list-cell__{}", cell.column.name))
                .class("form-group")
                .class(&format!("field-{}", cell.id));
            if let Some(title) = &cell.column.title {
                group = group.raw(
                    &Tag::new("label")
                        .class("control-label")
                        .attr("for", cell.id.as_str())
                        .text(title)
                        .render(),
                );
            }
            groups.push_str(&group.raw(&cell.markup).render());
        }

        let actions = Tag::new("div")
            .class("list-cell__button")
            .raw(&action_buttons(ctx, index))
            .render();

        let content = if actions_at_begin(ctx.options) {
            format!("{}{}", actions, groups)
        } else {
            format!("{}{}", groups, actions)
        };

        Ok(Tag::new("div")
            .class("multiple-input-list__item")
            .raw(&content)
            .render())
    }

    fn render_list(&self, ctx: &RenderContext<'_>, rows: &str) -> Result<String> {
        let options = ctx.options;
        let add_block = |class: &str| {
            Tag::new("div")
                .class(class)
                .raw(&button(&options.add_button))
                .render()
        };

        let mut list = Tag::new("div").class("multiple-input-list list-renderer");
        if options.placement.contains(ButtonPosition::Header) {
            list = list.raw(&add_block("list-renderer__header"));
        }
        list = list.raw(
            &Tag::new("div")
                .class("multiple-input-list__body")
                .raw(rows)
                .render(),
        );
        if options.placement.contains(ButtonPosition::Footer) {
            list = list.raw(&add_block("list-renderer__footer"));
        }

        Ok(Tag::new("div")
            .attr("id", ctx.id)
            .class("multiple-input")
            .raw(&empty_list_input(ctx))
            .raw(&list.render())
            .render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDescriptor, ColumnKind};
    use crate::options::WidgetOptions;
    use crate::scripts::PageScripts;

    #[test]
    fn test_row_labels_and_hidden_inputs() {
        let options = WidgetOptions::default().resolve().unwrap();
        let columns = vec![
            ColumnDescriptor::new("id", ColumnKind::Hidden),
            ColumnDescriptor::new("title", ColumnKind::TextInput).title("Title"),
        ];
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &columns,
            options: &options,
        };

        let row = ListRenderer
            .render_row(&ctx, &RowIndex::Index(0), None, &mut PageScripts::new())
            .unwrap();
        assert!(row.starts_with("<div class=\"multiple-input-list__item\"><input id=\"items-0-id\""));
        assert!(row.contains("<label class=\"control-label\" for=\"items-0-title\">Title</label>"));
    }

    #[test]
    fn test_list_empty_input_and_header() {
        let options = WidgetOptions {
            min: Some(0),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        let ctx = RenderContext {
            id: "w0",
            name: "items",
            input_id: "items",
            columns: &[],
            options: &options,
        };

        let markup = ListRenderer.render_list(&ctx, "").unwrap();
        assert!(markup.contains("<input type=\"hidden\" id=\"items\" name=\"items\" value=\"\">"));
        assert!(markup.contains("list-renderer__header"));
    }

    #[test]
    fn test_sortable_unsupported() {
        let err = ListRenderer.sortable_container().unwrap_err();
        assert_eq!(err.to_string(), "Renderer 'list' does not support sortable rows");
    }
}
