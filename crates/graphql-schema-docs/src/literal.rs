//! Printing default values back as GraphQL literals.
//!
//! This happens in two steps: [to_const_value] turns the value into a syntax
//! tree, using the declared type to decide between enum values and strings,
//! to order input object fields and to check the value is well-formed; then
//! [ConstValueDisplay] prints the tree.

use crate::{
    filter::BUILTIN_SCALARS, InputObjectType, LiteralError, Schema, TypeDefinition, TypeReference,
};
use async_graphql_value::{ConstValue, Name};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use std::fmt::{self, Write};

/// Prints `value` as the literal that reads back as `value` for type `ty`.
pub fn literal(value: &Value, ty: &TypeReference, schema: &Schema) -> Result<String, LiteralError> {
    let tree = to_const_value(value, ty, schema)?;

    Ok(ConstValueDisplay(&tree).to_string())
}

pub fn to_const_value(value: &Value, ty: &TypeReference, schema: &Schema) -> Result<ConstValue, LiteralError> {
    match ty {
        TypeReference::NonNull(_) if value.is_null() => Err(LiteralError::UnexpectedNull {
            expected: ty.to_string(),
        }),
        TypeReference::NonNull(inner) => to_const_value(value, inner, schema),
        _ if value.is_null() => Ok(ConstValue::Null),
        TypeReference::List(inner) => match value {
            Value::Array(items) => items
                .iter()
                .map(|item| to_const_value(item, inner, schema))
                .collect::<Result<Vec<_>, _>>()
                .map(ConstValue::List),
            // A single item stands for a list of one.
            item => to_const_value(item, inner, schema),
        },
        TypeReference::Named(name) if BUILTIN_SCALARS.contains(&name.as_str()) => builtin_scalar(value, name),
        TypeReference::Named(name) => match schema.get(name) {
            Some(TypeDefinition::Scalar(_)) => Ok(custom_scalar(value)),
            Some(TypeDefinition::Enum(r#enum)) => match value {
                Value::String(variant) if r#enum.has_value(variant) => Ok(ConstValue::Enum(Name::new(variant))),
                Value::String(variant) => Err(LiteralError::UnknownEnumValue {
                    enum_name: r#enum.name.clone(),
                    value: variant.clone(),
                }),
                other => Err(invalid_value(name, other)),
            },
            Some(TypeDefinition::InputObject(input_object)) => input_object_value(value, input_object, schema),
            Some(TypeDefinition::Object(_) | TypeDefinition::Interface(_) | TypeDefinition::Union(_)) => {
                Err(LiteralError::NotAnInputType(name.clone()))
            }
            None => Err(LiteralError::UnknownType(name.clone())),
        },
    }
}

fn input_object_value(
    value: &Value,
    input_object: &InputObjectType,
    schema: &Schema,
) -> Result<ConstValue, LiteralError> {
    let Value::Object(object) = value else {
        return Err(invalid_value(&input_object.name, value));
    };

    if let Some(unknown) = object
        .keys()
        .find(|key| !input_object.fields.iter().any(|field| &field.name == *key))
    {
        return Err(LiteralError::UnknownInputField {
            input_object: input_object.name.clone(),
            field: unknown.clone(),
        });
    }

    let mut fields = IndexMap::with_capacity(object.len());

    // Declaration order, not the order of the incoming value.
    for field in &input_object.fields {
        match object.get(&field.name) {
            Some(value) => {
                fields.insert(Name::new(&field.name), to_const_value(value, &field.ty, schema)?);
            }
            None if matches!(field.ty, TypeReference::NonNull(_)) && field.default_value.is_none() => {
                return Err(LiteralError::UnexpectedNull {
                    expected: field.ty.to_string(),
                });
            }
            None => (),
        }
    }

    Ok(ConstValue::Object(fields))
}

fn builtin_scalar(value: &Value, name: &str) -> Result<ConstValue, LiteralError> {
    match (name, value) {
        ("Boolean", Value::Bool(b)) => Ok(ConstValue::Boolean(*b)),
        ("Int", Value::Number(number)) => int_value(number)
            .map(|int| ConstValue::Number(int.into()))
            .ok_or_else(|| int_error(name, value, number)),
        ("Float", Value::Number(number)) => Ok(ConstValue::Number(number.clone())),
        ("String", Value::String(s)) => Ok(ConstValue::String(s.clone())),
        // Integer literals beyond the i64 range stay quoted.
        ("ID", Value::String(s)) => Ok(match s.parse::<i64>() {
            Ok(int) if is_integer_literal(s) => ConstValue::Number(int.into()),
            _ => ConstValue::String(s.clone()),
        }),
        ("ID", Value::Number(number)) if number.is_i64() || number.is_u64() => Ok(ConstValue::Number(number.clone())),
        _ => Err(invalid_value(name, value)),
    }
}

/// Integral numbers in the 32-bit signed range, including floats without a
/// fractional part.
fn int_value(number: &Number) -> Option<i32> {
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).ok();
    }

    let float = number.as_f64()?;

    if float.fract() == 0.0 && float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX) {
        Some(float as i32)
    } else {
        None
    }
}

fn int_error(name: &str, value: &Value, number: &Number) -> LiteralError {
    let integral = number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|float| float.fract() == 0.0);

    if integral {
        LiteralError::IntOutOfRange(number.clone())
    } else {
        invalid_value(name, value)
    }
}

/// `-?(0|[1-9][0-9]*)`
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);

    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Custom scalars carry no type information, the literal follows the shape
/// of the value.
fn custom_scalar(value: &Value) -> ConstValue {
    match value {
        Value::Null => ConstValue::Null,
        Value::Bool(b) => ConstValue::Boolean(*b),
        Value::Number(number) => ConstValue::Number(number.clone()),
        Value::String(s) => ConstValue::String(s.clone()),
        Value::Array(items) => ConstValue::List(items.iter().map(custom_scalar).collect()),
        Value::Object(object) => ConstValue::Object(
            object
                .iter()
                .map(|(key, value)| (Name::new(key), custom_scalar(value)))
                .collect(),
        ),
    }
}

fn invalid_value(expected: &str, found: &Value) -> LiteralError {
    LiteralError::InvalidValue {
        expected: expected.to_owned(),
        found: found.clone(),
    }
}

/// Displays a literal syntax tree with GraphQL syntax.
pub struct ConstValueDisplay<'a>(pub &'a ConstValue);

impl fmt::Display for ConstValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ConstValue::Null => f.write_str("null"),
            ConstValue::Number(number) => write_number(number, f),
            ConstValue::String(s) => write_quoted(f, s),
            ConstValue::Boolean(true) => f.write_str("true"),
            ConstValue::Boolean(false) => f.write_str("false"),
            ConstValue::Binary(bytes) => write_quoted(f, &String::from_utf8_lossy(bytes)),
            ConstValue::Enum(name) => f.write_str(name),
            ConstValue::List(items) => {
                f.write_char('[')?;

                let mut items = items.iter().peekable();

                while let Some(item) = items.next() {
                    ConstValueDisplay(item).fmt(f)?;

                    if items.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }

                f.write_char(']')
            }
            ConstValue::Object(fields) => {
                f.write_char('{')?;

                let mut fields = fields.iter().peekable();

                while let Some((name, value)) = fields.next() {
                    write!(f, "{name}: {}", ConstValueDisplay(value))?;

                    if fields.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }

                f.write_char('}')
            }
        }
    }
}

fn write_number(number: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(int) = number.as_i64() {
        write!(f, "{int}")
    } else if let Some(int) = number.as_u64() {
        write!(f, "{int}")
    } else {
        // f64's Display never uses exponents and drops a zero fraction.
        let float = number.as_f64().unwrap_or_default();
        write!(f, "{float}")
    }
}

fn write_quoted(f: &mut impl Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '\r' => f.write_str("\\r"),
            '\n' => f.write_str("\\n"),
            '\t' => f.write_str("\\t"),
            '\u{8}' => f.write_str("\\b"),
            '\u{c}' => f.write_str("\\f"),
            '\\' => f.write_str("\\\\"),
            '"' => f.write_str("\\\""),
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32),
            c => f.write_char(c),
        }?;
    }
    f.write_char('"')
}
