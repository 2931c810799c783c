//! Widget construction and render errors

/// Errors raised while building or rendering a tabular input.
///
/// Both configuration and capability errors surface before the script
/// registry is touched, so a failed widget never leaves the page half
/// mutated.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// An option or column definition cannot be resolved.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// The option or column the problem was found in.
        field: String,
        /// Human-readable description.
        message: String,
    },

    /// A renderer was asked for a step it does not implement.
    #[error("Renderer '{renderer}' does not support {operation}")]
    UnsupportedOperation {
        /// Renderer name.
        renderer: &'static str,
        /// The rendering step that was requested.
        operation: &'static str,
    },

    /// The client payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WidgetError {
    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new unsupported operation error.
    pub fn unsupported(renderer: &'static str, operation: &'static str) -> Self {
        Self::UnsupportedOperation { renderer, operation }
    }

    /// Returns `true` if this error came from option or column resolution.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
