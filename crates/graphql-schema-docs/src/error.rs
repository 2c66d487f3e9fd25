use std::fmt;

/// A default value that does not fit its declared type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("null is not a valid value for {expected}")]
    UnexpectedNull { expected: String },
    #[error("expected a value of type {expected}, found {found}")]
    InvalidValue {
        expected: String,
        found: serde_json::Value,
    },
    #[error("{value:?} is not a value of enum {enum_name}")]
    UnknownEnumValue { enum_name: String, value: String },
    #[error("input object {input_object} has no field named {field}")]
    UnknownInputField { input_object: String, field: String },
    #[error("unknown type {0}")]
    UnknownType(String),
    #[error("{0} is not an input type")]
    NotAnInputType(String),
    #[error("{0} cannot be represented as a 32-bit signed integer")]
    IntOutOfRange(serde_json::Number),
}

/// The reasons a single render call can fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A default value or deprecation reason could not be printed as a literal.
    #[error("invalid literal at {coordinate}: {source}")]
    InvalidLiteral {
        coordinate: String,
        #[source]
        source: LiteralError,
    },
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parsing renderer configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("deserializing schema: {0}")]
    Json(#[from] serde_json::Error),
}
