//! Per-column client validation metadata.
//!
//! Every input column contributes one entry keyed by its index-agnostic
//! client identifier. Options produced by the form binding are merged with
//! the column's own overrides, the column winning on conflicts.

mod binding;

pub use binding::*;

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use crate::column::ColumnDescriptor;
use crate::html::element_id;

/// Loosely typed option bag sent to the client.
pub type OptionBag = Map<String, Value>;

/// Index-agnostic element id of a column: the row id with its index
/// segment left out.
///
/// Nested widget names keep their own indices, so `order[0][items]` and
/// `title` give `order-0-items-title`.
pub fn client_id(widget_name: &str, column: &str) -> String {
    element_id(&format!("{}[{}]", widget_name, column))
}

/// Merges form-level options with column overrides.
pub fn merge_options(base: OptionBag, overrides: &OptionBag) -> OptionBag {
    let mut merged = base;
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Builds the `client identifier → options` map for a widget's columns.
pub fn collect_attributes(
    widget_name: &str,
    columns: &[ColumnDescriptor],
    binding: Option<&dyn FormBinding>,
) -> IndexMap<String, OptionBag> {
    let mut attributes = IndexMap::new();

    for column in columns.iter().filter(|c| c.kind.has_input()) {
        let id = client_id(widget_name, &column.name);

        let base = match (column.model.as_deref(), binding) {
            (Some(model), Some(binding)) => match binding.client_options(model, &column.name) {
                Some(found) if found.attribute == column.name => found.options,
                Some(found) => {
                    debug!(
                        "Discarding client options for '{}', produced for '{}'",
                        column.name, found.attribute
                    );
                    OptionBag::new()
                }
                None => OptionBag::new(),
            },
            _ => OptionBag::new(),
        };

        attributes.insert(id, merge_options(base, &column.attribute_options));
    }

    attributes
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::column::ColumnKind;

    fn bag(value: Value) -> OptionBag {
        match value {
            Value::Object(map) => map,
            _ => OptionBag::new(),
        }
    }

    /// Binding that answers every lookup for a fixed attribute name.
    struct Mismatched;

    impl FormBinding for Mismatched {
        fn client_options(&self, _model: &str, _attribute: &str) -> Option<ClientValidation> {
            Some(ClientValidation::new("other", bag(json!({"required": true}))))
        }
    }

    #[test]
    fn test_client_id() {
        assert_eq!(client_id("items", "name"), "items-name");
        assert_eq!(client_id("order[0][items]", "name"), "order-0-items-name");
        assert_eq!(client_id("items", "Price.0.amount"), "items-price-0-amount");
        assert_eq!(client_id("items", "10"), "items-10");
    }

    #[test]
    fn test_collect_keeps_index_like_column_segments() {
        let columns = vec![
            ColumnDescriptor::new("price.0.amount", ColumnKind::TextInput).attribute_option("min", 0),
            ColumnDescriptor::new("0", ColumnKind::TextInput),
        ];
        let attributes = collect_attributes("items", &columns, None);
        assert_eq!(
            attributes.keys().collect::<Vec<_>>(),
            vec!["items-price-0-amount", "items-0"]
        );
    }

    #[test]
    fn test_merge_precedence() {
        let merged = merge_options(
            bag(json!({"maxlength": 10})),
            &bag(json!({"maxlength": 5, "required": true})),
        );
        assert_eq!(Value::Object(merged), json!({"maxlength": 5, "required": true}));
    }

    #[test]
    fn test_collect_with_binding() {
        let binding = StaticBinding::new().with("Item", "title", bag(json!({"maxlength": 10})));
        let columns = vec![
            ColumnDescriptor::new("title", ColumnKind::TextInput)
                .model("Item")
                .attribute_option("maxlength", 5)
                .attribute_option("required", true),
            ColumnDescriptor::new("note", ColumnKind::Static),
            ColumnDescriptor::new("qty", ColumnKind::TextInput),
        ];

        let attributes = collect_attributes("items", &columns, Some(&binding));
        assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["items-title", "items-qty"]);
        assert_eq!(
            Value::Object(attributes["items-title"].clone()),
            json!({"maxlength": 5, "required": true})
        );
        assert!(attributes["items-qty"].is_empty());
    }

    #[test]
    fn test_collect_without_binding_uses_overrides() {
        let columns = vec![
            ColumnDescriptor::new("title", ColumnKind::TextInput)
                .model("Item")
                .attribute_option("required", true),
        ];
        let attributes = collect_attributes("items", &columns, None);
        assert_eq!(Value::Object(attributes["items-title"].clone()), json!({"required": true}));
    }

    #[test]
    fn test_collect_discards_mismatched_attribute() {
        let columns = vec![
            ColumnDescriptor::new("title", ColumnKind::TextInput)
                .model("Item")
                .attribute_option("maxlength", 5),
        ];
        let attributes = collect_attributes("items", &columns, Some(&Mismatched));
        assert_eq!(Value::Object(attributes["items-title"].clone()), json!({"maxlength": 5}));
    }
}
