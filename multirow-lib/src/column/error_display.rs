use serde::{Deserialize, Serialize};

use crate::html::Tag;

/// Where a column renders its client validation error block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Error block after the input (default).
    #[default]
    Below,
    /// Error block next to the input, on the same line.
    Inline,
    /// No error block; the client only toggles the cell's error class.
    None,
}

impl ErrorDisplay {
    /// Empty error container the client fills in, if any.
    pub fn error_block(self) -> Option<String> {
        match self {
            Self::Below => Some(Tag::new("div").class("help-block help-block-error").render()),
            Self::Inline => Some(
                Tag::new("span")
                    .class("help-inline help-block-error")
                    .render(),
            ),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_block() {
        assert_eq!(
            ErrorDisplay::Below.error_block().as_deref(),
            Some("<div class=\"help-block help-block-error\"></div>")
        );
        assert!(ErrorDisplay::Inline.error_block().unwrap().starts_with("<span"));
        assert_eq!(ErrorDisplay::None.error_block(), None);
    }
}
