//! Documentation rendering for GraphQL schemas.
//!
//! The [Renderer] walks a [Schema] and produces SDL-like text for a single
//! named type or for the whole schema. Every token is passed through a
//! [Markup] implementation (HTML spans by default), references to named types
//! become links built by a caller supplied [UrlResolver], descriptions are
//! word-wrapped into comment lines and default values are printed back as
//! GraphQL literals.
//!
//! ```
//! use graphql_schema_docs::*;
//!
//! let schema = Schema::new()
//!     .with_query_type("Query")
//!     .with_type(ObjectType::new("Query").with_field(FieldDefinition::new("hello", TypeReference::named("String"))));
//!
//! let renderer = Renderer::new(RendererConfig::default(), |ty: &TypeDefinition| format!("#{}", ty.name()))
//!     .with_markup(PlainText);
//!
//! let section = renderer.sections(&schema, Target::Type("Query")).unwrap().unwrap();
//!
//! assert_eq!(section.description, "type Query {\n  hello: String\n}");
//! ```

mod config;
mod error;
pub mod filter;
pub mod literal;
pub mod markup;
mod render;
mod resolver;
mod schema;
pub mod wrap;

pub use self::{
    config::RendererConfig,
    error::{ConfigError, LiteralError, RenderError, SchemaError},
    markup::{Html, Markup, PlainText},
    render::{Renderer, Section, Target},
    resolver::UrlResolver,
    schema::*,
};
