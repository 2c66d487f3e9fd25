mod directives;
mod type_definitions;
mod type_reference;

pub use self::{
    directives::{DirectiveDefinition, DirectiveLocation},
    type_definitions::*,
    type_reference::TypeReference,
};

use crate::{filter::BUILTIN_SCALARS, SchemaError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The schema being documented.
///
/// Types are stored by name and every reference between definitions goes
/// through that name, so the graph can be as cyclic as GraphQL allows without
/// any shared ownership.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    pub types: IndexMap<String, TypeDefinition>,
    pub directives: Vec<DirectiveDefinition>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a schema from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Adds or replaces the definition registered under the type's name.
    pub fn with_type(mut self, definition: impl Into<TypeDefinition>) -> Self {
        self.insert_type(definition);
        self
    }

    pub fn insert_type(&mut self, definition: impl Into<TypeDefinition>) {
        let definition = definition.into();
        self.types.insert(definition.name().to_owned(), definition);
    }

    pub fn with_directive(mut self, directive: DirectiveDefinition) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = Some(name.into());
        self
    }

    pub fn with_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    pub fn with_subscription_type(mut self, name: impl Into<String>) -> Self {
        self.subscription_type = Some(name.into());
        self
    }

    /// Registers the built-in scalars and the `@skip`, `@include` and
    /// `@deprecated` directives, the way a GraphQL server exposes them.
    pub fn with_specified_definitions(mut self) -> Self {
        for name in BUILTIN_SCALARS {
            self.insert_type(ScalarType::new(*name));
        }

        self.directives.extend([
            DirectiveDefinition::skip(),
            DirectiveDefinition::include(),
            DirectiveDefinition::deprecated(),
        ]);

        self
    }

    /// The root operation types that are set, in `query`, `mutation`,
    /// `subscription` order.
    pub fn root_operation_types(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("query", self.query_type.as_deref()),
            ("mutation", self.mutation_type.as_deref()),
            ("subscription", self.subscription_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(operation, name)| Some((operation, name?)))
    }
}
