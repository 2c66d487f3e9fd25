use super::{
    display_utils::{write_block, Coordinate},
    Renderer,
};
use crate::{
    ArgumentDefinition, EnumType, EnumValueDefinition, FieldDefinition, InputObjectType, InterfaceType, Markup,
    ObjectType, RenderError, Schema, TypeDefinition, UnionType, UrlResolver,
};
use itertools::Itertools;
use std::fmt::Write;

impl<R, M> Renderer<R, M>
where
    R: UrlResolver,
    M: Markup,
{
    /// Renders the definition block of one named type, without a trailing
    /// newline.
    pub fn render_type(&self, schema: &Schema, definition: &TypeDefinition) -> Result<String, RenderError> {
        tracing::trace!(type_name = definition.name(), "rendering type definition");

        let mut out = String::new();

        write!(
            out,
            "{} {}",
            self.markup.keyword(definition.keyword()),
            self.markup.identifier(definition.name())
        )?;

        match definition {
            TypeDefinition::Scalar(_) => (),
            TypeDefinition::Object(object) => self.write_object(&mut out, schema, object)?,
            TypeDefinition::Interface(InterfaceType { name, fields, .. }) => {
                self.write_fields(&mut out, schema, name, fields)?;
            }
            TypeDefinition::Union(union) => self.write_union(&mut out, schema, union)?,
            TypeDefinition::Enum(r#enum) => self.write_enum(&mut out, schema, r#enum)?,
            TypeDefinition::InputObject(input_object) => self.write_input_object(&mut out, schema, input_object)?,
        }

        Ok(out)
    }

    fn write_object(&self, out: &mut String, schema: &Schema, object: &ObjectType) -> Result<(), RenderError> {
        if !object.interfaces.is_empty() {
            let interfaces = object
                .interfaces
                .iter()
                .map(|interface| self.type_link(schema, interface))
                .join(", ");

            write!(out, " {} {interfaces}", self.markup.keyword("implements"))?;
        }

        self.write_fields(out, schema, &object.name, &object.fields)
    }

    fn write_fields(
        &self,
        out: &mut String,
        schema: &Schema,
        parent: &str,
        fields: &[FieldDefinition],
    ) -> Result<(), RenderError> {
        let indent = &self.config.indent;

        write_block(out, fields, |out, field| {
            self.write_description(out, field.description.as_deref())?;

            let arguments = self.arguments(schema, &field.arguments, |argument| Coordinate::FieldArgument {
                parent,
                field: &field.name,
                argument,
            })?;

            let deprecation = self.deprecation(
                schema,
                field.deprecation_reason.as_deref(),
                Coordinate::Member {
                    parent,
                    member: &field.name,
                },
            )?;

            writeln!(
                out,
                "{indent}{}{arguments}: {}{deprecation}",
                self.markup.property(&field.name),
                self.type_reference(schema, &field.ty)
            )?;

            Ok(())
        })
    }

    fn write_union(&self, out: &mut String, schema: &Schema, union: &UnionType) -> Result<(), RenderError> {
        if union.members.is_empty() {
            return Ok(());
        }

        let members = union
            .members
            .iter()
            .map(|member| self.type_link(schema, member))
            .join(" | ");

        write!(out, " = {members}")?;

        Ok(())
    }

    fn write_enum(&self, out: &mut String, schema: &Schema, r#enum: &EnumType) -> Result<(), RenderError> {
        let indent = &self.config.indent;

        write_block(out, &r#enum.values, |out, value: &EnumValueDefinition| {
            self.write_description(out, value.description.as_deref())?;

            let deprecation = self.deprecation(
                schema,
                value.deprecation_reason.as_deref(),
                Coordinate::Member {
                    parent: &r#enum.name,
                    member: &value.name,
                },
            )?;

            writeln!(out, "{indent}{}{deprecation}", self.markup.property(&value.name))?;

            Ok(())
        })
    }

    fn write_input_object(
        &self,
        out: &mut String,
        schema: &Schema,
        input_object: &InputObjectType,
    ) -> Result<(), RenderError> {
        let indent = &self.config.indent;

        write_block(out, &input_object.fields, |out, field: &ArgumentDefinition| {
            self.write_description(out, field.description.as_deref())?;

            let default_value = self.default_value(
                schema,
                field,
                Coordinate::Member {
                    parent: &input_object.name,
                    member: &field.name,
                },
            )?;

            writeln!(
                out,
                "{indent}{}: {}{default_value}",
                self.markup.property(&field.name),
                self.type_reference(schema, &field.ty)
            )?;

            Ok(())
        })
    }
}
