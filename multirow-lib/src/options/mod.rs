//! Widget option resolution.
//!
//! Raw options arrive under-specified and possibly contradictory. They are
//! resolved once, when the widget is built, into a [`ResolvedOptions`] value
//! that is never mutated afterwards.

mod buttons;
mod row_count;

pub use buttons::*;
pub use row_count::*;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw widget options as supplied by the caller or a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    /// Minimum number of rows.
    pub min: Option<i64>,
    /// Maximum number of rows.
    pub max: Option<i64>,
    /// Whether the list may be submitted empty.
    pub allow_empty_list: bool,
    /// Where to render the add button.
    pub add_button_position: Option<OneOrMany<ButtonPosition>>,
    pub add_button_options: ButtonOptions,
    pub remove_button_options: ButtonOptions,
    /// Options for the clone button. The button is only rendered when set.
    pub clone_button_options: Option<ButtonOptions>,
    /// Enable drag-reordering of rows.
    pub sortable: bool,
    pub icon_source: IconSource,
}

impl WidgetOptions {
    /// Resolves raw options.
    ///
    /// Fails only on configuration that cannot be made consistent, such as a
    /// negative minimum.
    pub fn resolve(self) -> Result<ResolvedOptions> {
        let rows = RowCountPolicy::resolve(self.min, self.max, self.allow_empty_list)?;
        let placement = ButtonPlacement::resolve(self.add_button_position, &rows);
        let icons = self.icon_source;

        Ok(ResolvedOptions {
            rows,
            placement,
            add_button: self.add_button_options.resolve(ButtonKind::Add, icons),
            remove_button: self.remove_button_options.resolve(ButtonKind::Remove, icons),
            clone_button: self
                .clone_button_options
                .map(|options| options.resolve(ButtonKind::Clone, icons)),
            sortable: self.sortable,
            icon_source: icons,
        })
    }
}

/// Fully resolved, immutable widget options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub rows: RowCountPolicy,
    pub placement: ButtonPlacement,
    pub add_button: ResolvedButton,
    pub remove_button: ResolvedButton,
    pub clone_button: Option<ResolvedButton>,
    pub sortable: bool,
    pub icon_source: IconSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = WidgetOptions::default().resolve().unwrap();
        assert_eq!(resolved.rows.min(), 1);
        assert!(resolved.placement.contains(ButtonPosition::Row));
        assert!(resolved.clone_button.is_none());
        assert!(!resolved.sortable);
    }

    #[test]
    fn test_resolve_from_json() {
        let options: WidgetOptions = serde_json::from_str(
            r#"{
                "min": 0,
                "max": 4,
                "addButtonPosition": ["header", "footer"],
                "removeButtonOptions": {"cssClass": "btn btn-danger"},
                "cloneButtonOptions": {},
                "iconSource": "font-awesome"
            }"#,
        )
        .unwrap();

        let resolved = options.resolve().unwrap();
        assert!(resolved.rows.allow_empty_list());
        assert_eq!(resolved.rows.max(), 4);
        assert!(resolved.placement.contains(ButtonPosition::Footer));
        assert_eq!(resolved.remove_button.css_class, "btn btn-danger");
        assert_eq!(resolved.remove_button.label, "<i class=\"fa fa-times\"></i>");
        assert_eq!(
            resolved.clone_button.unwrap().css_class,
            ButtonKind::Clone.default_class()
        );
    }

    #[test]
    fn test_resolve_negative_min() {
        let options = WidgetOptions {
            min: Some(-1),
            ..Default::default()
        };
        assert!(options.resolve().unwrap_err().is_configuration());
    }
}
