//! Input documents: a widget definition plus the page state to render into.

use std::fs;
use std::path::Path;

use multirow_lib::WidgetDefinition;
use multirow_lib::attributes::StaticBinding;
use multirow_lib::render::RowValues;
use multirow_lib::scripts::PageScripts;
use serde::Deserialize;

use crate::error::CliError;

/// Everything needed for one render.
///
/// ```json
/// {
///   "widget": { "id": "w0", "name": "items", "columns": [{"name": "title"}] },
///   "rows": [{"title": "Desk"}],
///   "validation": { "Item": { "title": { "required": true } } },
///   "scripts": { "head": { "jquery": "/* ... */" } }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct Document {
    pub widget: WidgetDefinition,
    #[serde(default)]
    pub rows: Vec<RowValues>,
    /// Client validation options the surrounding form would provide.
    #[serde(default)]
    pub validation: Option<StaticBinding>,
    /// Scripts already registered on the page.
    #[serde(default)]
    pub scripts: PageScripts,
}

impl Document {
    /// Reads and parses a document from disk.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
