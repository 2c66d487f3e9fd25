use super::Renderer;
use crate::{literal::literal, wrap::wrap, ArgumentDefinition, Markup, RenderError, Schema, TypeReference, UrlResolver};
use std::fmt::{self, Write};

/// The reason `@deprecated` uses when none is given.
pub(super) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// The schema coordinate of the element being rendered, used in errors.
#[derive(Debug, Clone, Copy)]
pub(super) enum Coordinate<'a> {
    /// `Type.field`, `Enum.VALUE` or `Input.field`
    Member { parent: &'a str, member: &'a str },
    /// `Type.field(argument:)`
    FieldArgument {
        parent: &'a str,
        field: &'a str,
        argument: &'a str,
    },
    /// `@directive(argument:)`
    DirectiveArgument { directive: &'a str, argument: &'a str },
}

impl fmt::Display for Coordinate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Member { parent, member } => write!(f, "{parent}.{member}"),
            Coordinate::FieldArgument {
                parent,
                field,
                argument,
            } => write!(f, "{parent}.{field}({argument}:)"),
            Coordinate::DirectiveArgument { directive, argument } => write!(f, "@{directive}({argument}:)"),
        }
    }
}

/// Writes ` {`, the members, then `}`. Nothing at all when there are no
/// members.
pub(super) fn write_block<T>(
    out: &mut String,
    members: &[T],
    mut write_member: impl FnMut(&mut String, &T) -> Result<(), RenderError>,
) -> Result<(), RenderError> {
    if members.is_empty() {
        return Ok(());
    }

    out.push_str(" {\n");

    for member in members {
        write_member(out, member)?;
    }

    out.push('}');
    Ok(())
}

impl<R, M> Renderer<R, M>
where
    R: UrlResolver,
    M: Markup,
{
    /// One comment line per wrapped line of the description.
    pub(super) fn write_description(&self, out: &mut String, description: Option<&str>) -> fmt::Result {
        let Some(description) = description else { return Ok(()) };
        let indent = &self.config.indent;

        for line in wrap(description, self.config.description_width.get()) {
            writeln!(out, "{indent}{}", self.markup.comment(&line))?;
        }

        Ok(())
    }

    /// A link to the named type, followed by the marker of the innermost
    /// wrapper only: `[String!]` renders as `String!` and `[String]!` as
    /// `String[]`.
    pub(super) fn type_reference(&self, schema: &Schema, ty: &TypeReference) -> String {
        let mut marker = "";
        let mut current = ty;

        let name = loop {
            match current {
                TypeReference::List(inner) => {
                    marker = "[]";
                    current = inner;
                }
                TypeReference::NonNull(inner) => {
                    marker = "!";
                    current = inner;
                }
                TypeReference::Named(name) => break name,
            }
        };

        format!("{}{marker}", self.type_link(schema, name))
    }

    /// Types the schema does not define are rendered as plain identifiers.
    pub(super) fn type_link(&self, schema: &Schema, name: &str) -> String {
        let Some(definition) = schema.get(name) else {
            tracing::trace!(type_name = name, "reference to an undefined type, not linking");
            return self.markup.identifier(name);
        };

        let url = self.resolver.url_for(definition);
        let title = definition.description().filter(|description| !description.is_empty()).unwrap_or(name);

        self.markup.type_link(name, &url, title)
    }

    /// ` = <literal>` when the argument has a default value.
    pub(super) fn default_value(
        &self,
        schema: &Schema,
        argument: &ArgumentDefinition,
        coordinate: Coordinate<'_>,
    ) -> Result<String, RenderError> {
        let Some(value) = &argument.default_value else {
            return Ok(String::new());
        };

        let literal = literal(value, &argument.ty, schema).map_err(|source| RenderError::InvalidLiteral {
            coordinate: coordinate.to_string(),
            source,
        })?;

        Ok(format!(" = {}", self.markup.string_literal(&literal)))
    }

    /// `(name: Type = default, ...)`, or nothing without arguments.
    pub(super) fn arguments<'a>(
        &self,
        schema: &Schema,
        arguments: &'a [ArgumentDefinition],
        coordinate: impl Fn(&'a str) -> Coordinate<'a>,
    ) -> Result<String, RenderError> {
        if arguments.is_empty() {
            return Ok(String::new());
        }

        let arguments = arguments
            .iter()
            .map(|argument| {
                let default_value = self.default_value(schema, argument, coordinate(&argument.name))?;

                Ok(format!(
                    "{}: {}{default_value}",
                    self.markup.parameter(&argument.name),
                    self.type_reference(schema, &argument.ty)
                ))
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(format!("({})", arguments.join(", ")))
    }

    pub(super) fn deprecation(
        &self,
        schema: &Schema,
        reason: Option<&str>,
        coordinate: Coordinate<'_>,
    ) -> Result<String, RenderError> {
        let Some(reason) = reason else {
            return Ok(String::new());
        };

        let keyword = self.markup.keyword("@deprecated");

        if reason.is_empty() || reason == DEFAULT_DEPRECATION_REASON {
            return Ok(format!(" {keyword}"));
        }

        let reason = literal(
            &serde_json::Value::String(reason.to_owned()),
            &TypeReference::named("String"),
            schema,
        )
        .map_err(|source| RenderError::InvalidLiteral {
            coordinate: coordinate.to_string(),
            source,
        })?;

        Ok(format!(
            " {keyword}({}: {})",
            self.markup.parameter("reason"),
            self.markup.string_literal(&reason)
        ))
    }
}
