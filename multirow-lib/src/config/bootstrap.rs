//! Bootstrap script lines.

use super::WidgetConfig;
use crate::error::Result;

/// Serializes the payload for embedding inside a `<script>` element.
pub fn payload_json(config: &WidgetConfig) -> Result<String> {
    Ok(serde_json::to_string(config)?.replace("</", "<\\/"))
}

/// Statement that constructs the client controller on the widget root.
pub fn bootstrap_line(config: &WidgetConfig) -> Result<String> {
    Ok(format!(
        "jQuery('#{}').multipleInput({});",
        config.id,
        payload_json(config)?
    ))
}

/// Statement that enables drag-reordering inside `container`.
pub fn sortable_line(id: &str, container: &str) -> String {
    format!(
        "jQuery('#{} {}').sortable({{handle: '.drag-handle', axis: 'y'}});",
        id, container
    )
}
