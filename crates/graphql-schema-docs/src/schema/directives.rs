use super::{ArgumentDefinition, TypeReference};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentDefinition>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeatable: bool,
    #[serde(default)]
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveDefinition {
            name: name.into(),
            arguments: Vec::new(),
            repeatable: false,
            locations: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// `directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT`
    pub fn skip() -> Self {
        Self::conditional("skip")
    }

    /// `directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT`
    pub fn include() -> Self {
        Self::conditional("include")
    }

    /// `directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE`
    pub fn deprecated() -> Self {
        DirectiveDefinition::new("deprecated")
            .with_argument(
                ArgumentDefinition::new("reason", TypeReference::named("String")).with_default_value("No longer supported"),
            )
            .with_location(DirectiveLocation::FieldDefinition)
            .with_location(DirectiveLocation::EnumValue)
    }

    fn conditional(name: &str) -> Self {
        DirectiveDefinition::new(name)
            .with_argument(ArgumentDefinition::new("if", TypeReference::named("Boolean").non_null()))
            .with_location(DirectiveLocation::Field)
            .with_location(DirectiveLocation::FragmentSpread)
            .with_location(DirectiveLocation::InlineFragment)
    }
}

/// https://spec.graphql.org/October2021/#DirectiveLocations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}
