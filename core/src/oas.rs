#![deny(missing_docs)]

//! # OpenAPI Bridge
//!
//! Classifies `utoipa` schema fragments into [`SchemaProperty`] values so the
//! resolver can be driven straight from a parsed OpenAPI document.
//!
//! | Schema                                  | Kind                    |
//! |-----------------------------------------|-------------------------|
//! | `$ref: '#/components/schemas/Pet'`      | model `Pet`             |
//! | `type: array, items: T`                 | array of `T`            |
//! | `type: object, additionalProperties: T` | map of `T`              |
//! | `type: integer` (`int64`)               | `integer` (`long`)      |
//! | `type: number` (`float` / `double`)     | `number` (`float` / `double`) |
//! | `type: string` (`date` / `date-time`)   | `string` (`date` / `DateTime`) |
//! | `type: string, enum: [...]`             | `enum`                  |
//! | free-form `object`, compositions        | `object`                |

use crate::error::{AppError, AppResult};
use crate::property::{SchemaKind, SchemaProperty};
use crate::type_mapping::PrimitiveKind;
use utoipa::openapi::schema::{
    AdditionalProperties, ArrayItems, KnownFormat, Object, Schema, SchemaFormat, SchemaType, Type,
};
use utoipa::openapi::RefOr;

/// Classifies a schema (or reference) as a named property.
pub fn property_from_schema(name: &str, schema: &RefOr<Schema>) -> AppResult<SchemaProperty> {
    let kind = match schema {
        RefOr::Ref(r) => SchemaKind::Model(extract_ref_name(&r.ref_location)),
        RefOr::T(s) => kind_from_schema(name, s)?,
    };
    Ok(SchemaProperty::new(name, kind))
}

/// The properties of an object schema, in document order.
///
/// Schemas without properties (arrays, compositions, free-form objects) yield
/// an empty list.
pub fn model_properties(schema: &Schema) -> AppResult<Vec<SchemaProperty>> {
    match schema {
        Schema::Object(obj) => obj
            .properties
            .iter()
            .map(|(field, field_schema)| property_from_schema(field, field_schema))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

impl SchemaProperty {
    /// See [`property_from_schema`].
    pub fn from_schema(name: &str, schema: &RefOr<Schema>) -> AppResult<Self> {
        property_from_schema(name, schema)
    }
}

/// `#/components/schemas/Pet` -> `Pet`
fn extract_ref_name(ref_location: &str) -> String {
    ref_location
        .rsplit('/')
        .next()
        .unwrap_or(ref_location)
        .to_string()
}

fn kind_from_schema(name: &str, schema: &Schema) -> AppResult<SchemaKind> {
    match schema {
        Schema::Array(arr) => {
            let items = match &arr.items {
                ArrayItems::RefOrSchema(boxed_schema) => property_from_schema(name, boxed_schema)?,
                _ => SchemaProperty::primitive(name, PrimitiveKind::Object),
            };
            Ok(SchemaKind::Array(Box::new(items)))
        }
        Schema::Object(obj) => kind_from_object(name, obj),
        // Inline compositions have no generated class of their own.
        Schema::OneOf(_) | Schema::AnyOf(_) | Schema::AllOf(_) => {
            Ok(SchemaKind::Primitive(PrimitiveKind::Object))
        }
        _ => Err(AppError::UnsupportedSchema(format!(
            "`{}` uses an unknown schema form",
            name
        ))),
    }
}

fn kind_from_object(name: &str, obj: &Object) -> AppResult<SchemaKind> {
    let known_format = match &obj.format {
        Some(SchemaFormat::KnownFormat(f)) => Some(f),
        _ => None,
    };

    let kind = match primary_type(&obj.schema_type) {
        Some(Type::Integer) => match known_format {
            Some(KnownFormat::Int64) => SchemaKind::Primitive(PrimitiveKind::Long),
            _ => SchemaKind::Primitive(PrimitiveKind::Integer),
        },
        Some(Type::Number) => match known_format {
            Some(KnownFormat::Float) => SchemaKind::Primitive(PrimitiveKind::Float),
            Some(KnownFormat::Double) => SchemaKind::Primitive(PrimitiveKind::Double),
            _ => SchemaKind::Other("number".to_string()),
        },
        Some(Type::Boolean) => SchemaKind::Primitive(PrimitiveKind::Boolean),
        Some(Type::String) if has_enum_values(obj) => SchemaKind::Primitive(PrimitiveKind::Enum),
        Some(Type::String) => match known_format {
            Some(KnownFormat::Date) => SchemaKind::Primitive(PrimitiveKind::Date),
            Some(KnownFormat::DateTime) => SchemaKind::Primitive(PrimitiveKind::DateTime),
            Some(KnownFormat::Uuid) => SchemaKind::Other("UUID".to_string()),
            Some(KnownFormat::Binary) => SchemaKind::Other("binary".to_string()),
            Some(KnownFormat::Byte) => SchemaKind::Other("ByteArray".to_string()),
            _ => SchemaKind::Primitive(PrimitiveKind::String),
        },
        // `type: array` written as an object carries no items.
        Some(Type::Array) => SchemaKind::Array(Box::new(SchemaProperty::primitive(
            name,
            PrimitiveKind::Object,
        ))),
        Some(Type::Null) => {
            return Err(AppError::UnsupportedSchema(format!(
                "`{}` is declared as `null` only",
                name
            )))
        }
        _ => map_or_object(name, obj)?,
    };

    Ok(kind)
}

fn map_or_object(name: &str, obj: &Object) -> AppResult<SchemaKind> {
    let values = match obj.additional_properties.as_deref() {
        Some(AdditionalProperties::RefOr(schema)) => property_from_schema(name, schema)?,
        Some(AdditionalProperties::FreeForm(true)) => {
            SchemaProperty::primitive(name, PrimitiveKind::Object)
        }
        _ => return Ok(SchemaKind::Primitive(PrimitiveKind::Object)),
    };
    Ok(SchemaKind::Map(Box::new(values)))
}

/// The declared type, skipping `null` in OpenAPI 3.1 type lists.
fn primary_type(schema_type: &SchemaType) -> Option<&Type> {
    match schema_type {
        SchemaType::Type(t) => Some(t),
        SchemaType::Array(types) => types.iter().find(|t| !matches!(t, Type::Null)),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

fn has_enum_values(obj: &Object) -> bool {
    obj.enum_values.as_ref().is_some_and(|values| !values.is_empty())
}
