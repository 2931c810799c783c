//! The tabular input widget.

mod definition;

pub use definition::*;
pub use crate::render::RowValues;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::attributes::{FormBinding, collect_attributes};
use crate::column::ColumnDescriptor;
use crate::config::{WidgetConfig, bootstrap_line, index_placeholder, sortable_line};
use crate::error::{Result, WidgetError};
use crate::html::{element_id, input_name};
use crate::options::{ButtonOptions, ButtonPosition, OneOrMany, ResolvedOptions, WidgetOptions};
use crate::render::{RenderContext, Renderer, RendererKind, RowIndex};
use crate::scripts::{CapturedScripts, RegistrySnapshot, ScriptRegistry};

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Widget markup including all current rows.
    pub markup: String,
    /// The payload embedded in the bootstrap line.
    pub config: WidgetConfig,
    /// Scripts the template added outside the ready bucket. They stay in
    /// the registry and run once before the bootstrap.
    pub prelude: Vec<String>,
    /// Ready scripts the template added. They were moved out of the
    /// registry; the client replays them for every new row.
    pub deferred: Vec<String>,
    /// Lines appended to the registry's ready bucket.
    pub bootstrap: Vec<String>,
}

/// A repeatable group of form inputs.
///
/// Options are resolved once by [`TabularInputBuilder::build`]; rendering
/// never changes them.
///
/// # Example
///
/// ```
/// use multirow_lib::prelude::*;
///
/// let widget = TabularInput::builder("w0", "items")
///     .column(ColumnDescriptor::new("title", ColumnKind::TextInput))
///     .min(0)
///     .build()
///     .unwrap();
///
/// let mut scripts = PageScripts::new();
/// let output = widget.render(&[], &mut scripts, None).unwrap();
///
/// assert_eq!(output.config.index_placeholder, "multiple_index_w0");
/// assert_eq!(scripts.scripts(ScriptPosition::Ready).len(), 1);
/// ```
#[derive(Clone)]
pub struct TabularInput {
    id: String,
    name: String,
    input_id: String,
    columns: Vec<ColumnDescriptor>,
    options: ResolvedOptions,
    renderer: Arc<dyn Renderer + Send + Sync>,
}

impl fmt::Debug for TabularInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabularInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("input_id", &self.input_id)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

impl TabularInput {
    /// Start building a widget with a root element id and a field name prefix.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> TabularInputBuilder {
        TabularInputBuilder::new(id, name)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the input carrying list-level errors.
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Token the client replaces with a row index.
    pub fn index_placeholder(&self) -> String {
        index_placeholder(&self.id)
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            id: &self.id,
            name: &self.name,
            input_id: &self.input_id,
            columns: &self.columns,
            options: &self.options,
        }
    }

    /// Renders the widget and registers its client bootstrap.
    ///
    /// `rows` holds existing values; the list is padded with empty rows up
    /// to the minimum. Scripts registered while rendering the row template
    /// are captured into the payload: ready scripts are moved out of the
    /// registry, the rest stay. On error the registry is rolled back to its
    /// state before the call.
    pub fn render(
        &self,
        rows: &[RowValues],
        registry: &mut dyn ScriptRegistry,
        binding: Option<&dyn FormBinding>,
    ) -> Result<RenderOutput> {
        let sortable_container = if self.options.sortable {
            Some(self.renderer.sortable_container()?)
        } else {
            None
        };

        let start = RegistrySnapshot::take(registry);
        let result = self.render_into(rows, registry, binding, sortable_container);
        if let Err(err) = &result {
            warn!("Render of {} failed, rolling back scripts: {}", self.id, err);
            start.restore(registry);
        }
        result
    }

    fn render_into(
        &self,
        rows: &[RowValues],
        registry: &mut dyn ScriptRegistry,
        binding: Option<&dyn FormBinding>,
        sortable_container: Option<&str>,
    ) -> Result<RenderOutput> {
        let ctx = self.context();
        let limits = self.options.rows;

        if rows.len() > limits.max() as usize {
            debug!(
                "{} has {} rows, more than the maximum of {}",
                self.id,
                rows.len(),
                limits.max()
            );
        }

        let count = rows.len().max(limits.min() as usize);
        let mut body = String::new();
        for i in 0..count {
            body.push_str(&self.renderer.render_row(&ctx, &RowIndex::Index(i), rows.get(i), registry)?);
        }

        let before = RegistrySnapshot::take(registry);
        let placeholder = format!("{{{}}}", self.index_placeholder());
        let template = self
            .renderer
            .render_row(&ctx, &RowIndex::Template(placeholder), None, registry)?;
        let captured = CapturedScripts::capture(&before, registry);

        let attributes = collect_attributes(&self.name, &self.columns, binding);
        let config = WidgetConfig::assemble(
            &self.id,
            &self.input_id,
            &limits,
            attributes,
            &captured,
            template,
        );

        let mut bootstrap = vec![bootstrap_line(&config)?];
        if let Some(container) = sortable_container {
            bootstrap.push(sortable_line(&self.id, container));
        }
        let markup = self.renderer.render_list(&ctx, &body)?;

        captured.commit(registry, &bootstrap);
        debug!(
            "Rendered {} with {} rows, {} prelude and {} deferred scripts",
            self.id,
            count,
            config.prelude_scripts.len(),
            config.deferred_scripts.len()
        );

        Ok(RenderOutput {
            markup,
            prelude: config.prelude_scripts.clone(),
            deferred: config.deferred_scripts.clone(),
            config,
            bootstrap,
        })
    }
}

/// Builder for [`TabularInput`].
pub struct TabularInputBuilder {
    id: String,
    name: String,
    input_id: Option<String>,
    model: Option<String>,
    columns: Vec<ColumnDescriptor>,
    options: WidgetOptions,
    renderer: Arc<dyn Renderer + Send + Sync>,
}

impl TabularInputBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input_id: None,
            model: None,
            columns: Vec::new(),
            options: WidgetOptions::default(),
            renderer: RendererKind::default().renderer(),
        }
    }

    /// Add a column.
    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// Add several columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Model for columns that do not name their own.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the id of the list-level input.
    pub fn input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Replace all raw options.
    pub fn options(mut self, options: WidgetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.options.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.options.max = Some(max);
        self
    }

    pub fn allow_empty_list(mut self, allow: bool) -> Self {
        self.options.allow_empty_list = allow;
        self
    }

    pub fn add_button_position(mut self, positions: impl IntoIterator<Item = ButtonPosition>) -> Self {
        self.options.add_button_position = Some(OneOrMany::Many(positions.into_iter().collect()));
        self
    }

    pub fn add_button(mut self, options: ButtonOptions) -> Self {
        self.options.add_button_options = options;
        self
    }

    pub fn remove_button(mut self, options: ButtonOptions) -> Self {
        self.options.remove_button_options = options;
        self
    }

    /// Render a clone button in each row.
    pub fn clone_button(mut self, options: ButtonOptions) -> Self {
        self.options.clone_button_options = Some(options);
        self
    }

    /// Enable drag-reordering.
    pub fn sortable(mut self) -> Self {
        self.options.sortable = true;
        self
    }

    /// Use a built-in renderer.
    pub fn renderer(mut self, kind: RendererKind) -> Self {
        self.renderer = kind.renderer();
        self
    }

    /// Use a custom renderer.
    pub fn custom_renderer(mut self, renderer: impl Renderer + Send + Sync + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Resolves options and validates columns.
    ///
    /// Every configuration and capability error is reported here, before
    /// anything touches a script registry.
    pub fn build(self) -> Result<TabularInput> {
        if self.id.is_empty()
            || !self
                .id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(WidgetError::invalid(
                "id",
                format!("'{}' is not a usable element id", self.id),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(WidgetError::invalid("name", "field name must not be empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '[' | ']'))
        {
            return Err(WidgetError::invalid(
                "name",
                format!("'{}' is not a usable field name", self.name),
            ));
        }
        if self.columns.is_empty() {
            return Err(WidgetError::invalid("columns", "at least one column is required"));
        }

        let mut columns = self.columns;
        let mut element_ids = HashSet::new();
        for column in &columns {
            column.validate()?;
            if !element_ids.insert(element_id(&input_name(&self.name, "0", &column.name))) {
                return Err(WidgetError::invalid(
                    format!("columns.{}", column.name),
                    "column name collides with another column's element id",
                ));
            }
        }
        if let Some(model) = &self.model {
            for column in columns.iter_mut().filter(|c| c.model.is_none()) {
                column.model = Some(model.clone());
            }
        }

        let options = self.options.resolve()?;
        let has_drag_handle = columns.iter().any(|c| c.kind.is_drag_handle());
        if has_drag_handle && !options.sortable {
            return Err(WidgetError::invalid(
                "sortable",
                "drag handle columns need sortable rows",
            ));
        }
        if options.sortable {
            self.renderer.sortable_container()?;
        }

        let input_id = self.input_id.unwrap_or_else(|| element_id(&self.name));
        debug!(
            "Built {} ({} columns, min {}, max {}, renderer {})",
            self.id,
            columns.len(),
            options.rows.min(),
            options.rows.max(),
            self.renderer.name()
        );

        Ok(TabularInput {
            id: self.id,
            name: self.name,
            input_id,
            columns,
            options,
            renderer: self.renderer,
        })
    }
}
