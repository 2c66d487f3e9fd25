mod display_utils;
mod schema;
mod types;

use crate::{Html, Markup, RenderError, RendererConfig, Schema, UrlResolver};

/// One documentation section: the configured title and the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
}

/// What to document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// The whole schema: root operation types, user directives and user types.
    Schema,
    /// A single named type of the schema.
    Type(&'a str),
}

/// Renders schema definitions to annotated SDL.
///
/// Holds nothing but its configuration, so one renderer can be shared and
/// used for any number of schemas.
#[derive(Debug, Clone)]
pub struct Renderer<R, M = Html> {
    config: RendererConfig,
    resolver: R,
    markup: M,
}

impl<R> Renderer<R>
where
    R: UrlResolver,
{
    pub fn new(config: RendererConfig, resolver: R) -> Self {
        Renderer {
            config,
            resolver,
            markup: Html,
        }
    }
}

impl<R, M> Renderer<R, M>
where
    R: UrlResolver,
    M: Markup,
{
    /// Use another markup for the rendered tokens.
    pub fn with_markup<N: Markup>(self, markup: N) -> Renderer<R, N> {
        Renderer {
            config: self.config,
            resolver: self.resolver,
            markup,
        }
    }

    /// Documents the target. Returns `None` when the schema has no type of
    /// the requested name.
    pub fn sections(&self, schema: &Schema, target: Target<'_>) -> Result<Option<Section>, RenderError> {
        let description = match target {
            Target::Schema => self.render_schema(schema)?,
            Target::Type(name) => {
                let Some(definition) = schema.get(name) else {
                    tracing::debug!(type_name = name, "no definition to document");
                    return Ok(None);
                };

                self.render_type(schema, definition)?
            }
        };

        Ok(Some(Section {
            title: self.config.title.clone(),
            description,
        }))
    }
}
