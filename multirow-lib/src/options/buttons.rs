//! Add/remove/clone button placement and options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::RowCountPolicy;

/// Where the add button (and the row action cell) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonPosition {
    /// In the list header.
    Header,
    /// In the list footer.
    Footer,
    /// In the action cell at the end of each row.
    Row,
    /// In the action cell at the start of each row.
    RowBegin,
}

/// A single value or a list, as accepted in definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Non-empty ordered set of button positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPlacement(Vec<ButtonPosition>);

impl ButtonPlacement {
    /// Normalizes a raw placement, falling back to the row-count default.
    ///
    /// The default is `Header` for lists that may be empty and `Row`
    /// otherwise.
    pub fn resolve(raw: Option<OneOrMany<ButtonPosition>>, rows: &RowCountPolicy) -> Self {
        let mut positions: Vec<ButtonPosition> = Vec::new();
        for position in raw.map(OneOrMany::into_vec).unwrap_or_default() {
            if !positions.contains(&position) {
                positions.push(position);
            }
        }

        if positions.is_empty() {
            positions.push(if rows.min() == 0 {
                ButtonPosition::Header
            } else {
                ButtonPosition::Row
            });
        }

        Self(positions)
    }

    /// Returns `true` if the placement contains `position`.
    pub fn contains(&self, position: ButtonPosition) -> bool {
        self.0.contains(&position)
    }

    /// Returns `true` if the add button lives inside the rows.
    pub fn in_row(&self) -> bool {
        self.contains(ButtonPosition::Row) || self.contains(ButtonPosition::RowBegin)
    }

    /// Iterates positions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ButtonPosition> + '_ {
        self.0.iter().copied()
    }
}

/// Icon set used for default button labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSource {
    #[default]
    Glyphicons,
    FontAwesome,
}

/// Icons the widget can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Add,
    Remove,
    Clone,
    DragHandle,
}

impl IconSource {
    /// CSS class for an icon in this set.
    pub fn class(self, icon: Icon) -> &'static str {
        match (self, icon) {
            (Self::Glyphicons, Icon::Add) => "glyphicon glyphicon-plus",
            (Self::Glyphicons, Icon::Remove) => "glyphicon glyphicon-remove",
            (Self::Glyphicons, Icon::Clone) => "glyphicon glyphicon-duplicate",
            (Self::Glyphicons, Icon::DragHandle) => "glyphicon glyphicon-menu-hamburger",
            (Self::FontAwesome, Icon::Add) => "fa fa-plus",
            (Self::FontAwesome, Icon::Remove) => "fa fa-times",
            (Self::FontAwesome, Icon::Clone) => "fa fa-files-o",
            (Self::FontAwesome, Icon::DragHandle) => "fa fa-bars",
        }
    }

    /// `<i>` markup for an icon in this set.
    pub fn markup(self, icon: Icon) -> String {
        format!("<i class=\"{}\"></i>", self.class(icon))
    }
}

/// The row action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Add,
    Remove,
    Clone,
}

impl ButtonKind {
    /// Class applied when the caller supplies none.
    pub fn default_class(self) -> &'static str {
        match self {
            Self::Add => "btn multiple-input-list__btn js-input-plus",
            Self::Remove => "btn multiple-input-list__btn js-input-remove",
            Self::Clone => "btn multiple-input-list__btn js-input-clone",
        }
    }

    fn icon(self) -> Icon {
        match self {
            Self::Add => Icon::Add,
            Self::Remove => Icon::Remove,
            Self::Clone => Icon::Clone,
        }
    }
}

/// Caller-supplied button options. Unset fields receive defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    /// CSS class list.
    pub css_class: Option<String>,
    /// Button content, either plain text or markup.
    pub label: Option<String>,
    /// Extra HTML attributes.
    pub attributes: IndexMap<String, String>,
}

impl ButtonOptions {
    /// Set the CSS class.
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add an HTML attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Fills missing keys with the defaults for `kind`.
    pub fn resolve(self, kind: ButtonKind, icons: IconSource) -> ResolvedButton {
        ResolvedButton {
            css_class: self
                .css_class
                .unwrap_or_else(|| kind.default_class().to_string()),
            label: self.label.unwrap_or_else(|| icons.markup(kind.icon())),
            attributes: self.attributes,
        }
    }
}

/// Button options with every key present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedButton {
    pub css_class: String,
    pub label: String,
    pub attributes: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(min: i64) -> RowCountPolicy {
        RowCountPolicy::resolve(Some(min), None, false).unwrap()
    }

    #[test]
    fn test_default_placement_header_for_empty_list() {
        let placement = ButtonPlacement::resolve(None, &policy(0));
        assert_eq!(placement.iter().collect::<Vec<_>>(), vec![ButtonPosition::Header]);
    }

    #[test]
    fn test_default_placement_row() {
        let placement = ButtonPlacement::resolve(None, &policy(2));
        assert_eq!(placement.iter().collect::<Vec<_>>(), vec![ButtonPosition::Row]);
    }

    #[test]
    fn test_empty_list_placement_uses_default() {
        let placement = ButtonPlacement::resolve(Some(OneOrMany::Many(vec![])), &policy(1));
        assert!(placement.contains(ButtonPosition::Row));
    }

    #[test]
    fn test_single_and_duplicate_positions() {
        let placement = ButtonPlacement::resolve(Some(ButtonPosition::Footer.into()), &policy(1));
        assert_eq!(placement.iter().collect::<Vec<_>>(), vec![ButtonPosition::Footer]);

        let placement = ButtonPlacement::resolve(
            Some(OneOrMany::Many(vec![
                ButtonPosition::RowBegin,
                ButtonPosition::Header,
                ButtonPosition::RowBegin,
            ])),
            &policy(1),
        );
        assert_eq!(
            placement.iter().collect::<Vec<_>>(),
            vec![ButtonPosition::RowBegin, ButtonPosition::Header]
        );
        assert!(placement.in_row());
    }

    #[test]
    fn test_placement_deserializes_one_or_many() {
        let one: OneOrMany<ButtonPosition> = serde_json::from_str("\"row-begin\"").unwrap();
        assert_eq!(one, OneOrMany::One(ButtonPosition::RowBegin));
        let many: OneOrMany<ButtonPosition> =
            serde_json::from_str("[\"header\", \"footer\"]").unwrap();
        assert_eq!(
            many,
            OneOrMany::Many(vec![ButtonPosition::Header, ButtonPosition::Footer])
        );
    }

    #[test]
    fn test_button_defaults_fill_missing_keys() {
        let button = ButtonOptions::default().resolve(ButtonKind::Add, IconSource::Glyphicons);
        assert_eq!(button.css_class, "btn multiple-input-list__btn js-input-plus");
        assert_eq!(button.label, "<i class=\"glyphicon glyphicon-plus\"></i>");
    }

    #[test]
    fn test_button_keeps_caller_keys() {
        let button = ButtonOptions::default()
            .css_class("btn btn-danger")
            .resolve(ButtonKind::Remove, IconSource::FontAwesome);
        assert_eq!(button.css_class, "btn btn-danger");
        assert_eq!(button.label, "<i class=\"fa fa-times\"></i>");

        let button = ButtonOptions::default()
            .label("Remove")
            .resolve(ButtonKind::Remove, IconSource::FontAwesome);
        assert_eq!(button.css_class, ButtonKind::Remove.default_class());
        assert_eq!(button.label, "Remove");
    }
}
