use super::{display_utils::Coordinate, Renderer};
use crate::{
    filter::{is_user_directive, is_user_type, locale_cmp},
    DirectiveDefinition, Markup, RenderError, Schema, TypeDefinition, UrlResolver,
};
use itertools::Itertools;
use std::fmt::Write;

impl<R, M> Renderer<R, M>
where
    R: UrlResolver,
    M: Markup,
{
    /// Renders the schema definition, the user directives and the user types
    /// as blocks separated by blank lines. The output ends with a single
    /// newline.
    pub fn render_schema(&self, schema: &Schema) -> Result<String, RenderError> {
        let mut blocks = vec![self.schema_definition(schema)?];

        for directive in schema.directives.iter().filter(|directive| is_user_directive(&directive.name)) {
            blocks.push(self.directive_definition(schema, directive)?);
        }

        let mut types = schema
            .types
            .values()
            .filter(|definition| is_user_type(definition.name()))
            .collect::<Vec<&TypeDefinition>>();

        types.sort_by(|a, b| locale_cmp(a.name(), b.name()));

        for definition in types {
            blocks.push(self.render_type(schema, definition)?);
        }

        tracing::debug!(blocks = blocks.len(), "rendered schema");

        let mut out = blocks.join("\n\n");
        out.push('\n');

        Ok(out)
    }

    /// Always present, listing only the root operation types that are set.
    fn schema_definition(&self, schema: &Schema) -> Result<String, RenderError> {
        let indent = &self.config.indent;
        let mut out = format!("{} {{\n", self.markup.keyword("schema"));

        for (operation, name) in schema.root_operation_types() {
            writeln!(
                out,
                "{indent}{}: {}",
                self.markup.property(operation),
                self.type_link(schema, name)
            )?;
        }

        out.push('}');

        Ok(out)
    }

    fn directive_definition(&self, schema: &Schema, directive: &DirectiveDefinition) -> Result<String, RenderError> {
        let arguments = self.arguments(schema, &directive.arguments, |argument| Coordinate::DirectiveArgument {
            directive: &directive.name,
            argument,
        })?;

        let mut out = format!(
            "{} {}{arguments}",
            self.markup.keyword("directive"),
            self.markup.keyword(&format!("@{}", directive.name))
        );

        if directive.repeatable {
            write!(out, " {}", self.markup.keyword("repeatable"))?;
        }

        if !directive.locations.is_empty() {
            let locations = directive
                .locations
                .iter()
                .map(|location| self.markup.identifier(location.as_str()))
                .join(" | ");

            write!(out, " {} {locations}", self.markup.keyword("on"))?;
        }

        Ok(out)
    }
}
