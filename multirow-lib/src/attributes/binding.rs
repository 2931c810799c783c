//! Form-level client validation lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::OptionBag;

/// Client validation options produced by a form for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientValidation {
    /// The attribute the options were produced for.
    pub attribute: String,
    pub options: OptionBag,
}

impl ClientValidation {
    /// Create a lookup result.
    pub fn new(attribute: impl Into<String>, options: OptionBag) -> Self {
        Self {
            attribute: attribute.into(),
            options,
        }
    }
}

/// The form a widget is rendered inside.
///
/// Answers which client validation options apply to a model attribute.
/// Lookups have no side effects.
pub trait FormBinding {
    /// Client validation options for `attribute` of `model`, if the
    /// attribute takes part in client validation.
    fn client_options(&self, model: &str, attribute: &str) -> Option<ClientValidation>;
}

/// A [`FormBinding`] backed by a fixed `model → attribute → options` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticBinding {
    models: IndexMap<String, IndexMap<String, OptionBag>>,
}

impl StaticBinding {
    /// Creates an empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add options for one attribute.
    pub fn with(mut self, model: impl Into<String>, attribute: impl Into<String>, options: OptionBag) -> Self {
        self.models
            .entry(model.into())
            .or_default()
            .insert(attribute.into(), options);
        self
    }
}

impl FormBinding for StaticBinding {
    fn client_options(&self, model: &str, attribute: &str) -> Option<ClientValidation> {
        self.models
            .get(model)?
            .get(attribute)
            .map(|options| ClientValidation::new(attribute, options.clone()))
    }
}
