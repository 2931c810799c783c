//! Client bootstrap payload.

mod bootstrap;

pub use bootstrap::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attributes::OptionBag;
use crate::options::RowCountPolicy;
use crate::scripts::CapturedScripts;

/// Placeholder token for a widget, without braces.
pub fn index_placeholder(widget_id: &str) -> String {
    format!("multiple_index_{}", widget_id)
}

/// The payload handed to the client-side controller.
///
/// Field names are the wire contract with the client and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Root element id.
    pub id: String,
    /// Id of the input that carries list-level errors.
    pub input_id: String,
    /// Row markup with `{indexPlaceholder}` where the row index goes.
    pub template: String,
    /// Scripts that run once before the widget initializes.
    #[serde(rename = "jsInit")]
    pub prelude_scripts: Vec<String>,
    /// Scripts the client runs for every row it adds.
    #[serde(rename = "jsTemplates")]
    pub deferred_scripts: Vec<String>,
    pub max: u32,
    pub min: u32,
    /// Client validation options keyed by client identifier.
    pub attributes: IndexMap<String, OptionBag>,
    pub index_placeholder: String,
}

impl WidgetConfig {
    /// Assembles the payload from resolved widget state.
    pub fn assemble(
        id: &str,
        input_id: &str,
        rows: &RowCountPolicy,
        attributes: IndexMap<String, OptionBag>,
        scripts: &CapturedScripts,
        template: String,
    ) -> Self {
        Self {
            id: id.to_string(),
            input_id: input_id.to_string(),
            template,
            prelude_scripts: scripts.prelude_scripts(),
            deferred_scripts: scripts.deferred_scripts(),
            max: rows.max(),
            min: rows.min(),
            attributes,
            index_placeholder: index_placeholder(id),
        }
    }
}
