#![deny(missing_docs)]

//! # Type Declarations
//!
//! Objective-C declarations for schema properties.
//!
//! Foundation built-ins and user models are reference types and get a `*`;
//! value primitives (`BOOL`, `bool`) do not. Arrays are typed generically only
//! when their items are reference types that are not native primitives:
//!
//! - `array<string>`    -> `NSArray*`
//! - `array<model:Tag>` -> `NSArray<FTTag>*`
//! - `array<map<Tag>>`  -> `NSArray<NSDictionary>*`
//!
//! Maps always use the plain container: `NSDictionary*`.

use crate::config::ResolverConfig;
use crate::models::to_model_type_name;
use crate::property::{SchemaKind, SchemaProperty};
use crate::type_mapping::{ARRAY_INSTANTIATION_TYPE, MAP_INSTANTIATION_TYPE};

/// Marker appended to reference-typed declarations.
pub const POINTER: char = '*';

/// The resolved type name of a property, before pointer decoration.
///
/// The schema type goes through the primitive table (falling back to itself)
/// and then through model naming, so `string` -> `NSString`, `array` ->
/// `NSArray`, `Pet` -> `FTPet`.
pub fn resolve_schema_type_name(config: &ResolverConfig, property: &SchemaProperty) -> String {
    let schema_type = property.schema_type();
    let table = config.type_mapping();

    if let SchemaKind::Other(_) = property.kind {
        if !table.contains(schema_type) {
            tracing::debug!(schema_type, "no type mapping, passing schema type through");
        }
    }

    to_model_type_name(config, table.resolve(schema_type))
}

/// The full declaration of a property, e.g. `NSString*` or `NSArray<FTTag>*`.
pub fn declare_type(config: &ResolverConfig, property: &SchemaProperty) -> String {
    if let SchemaKind::Array(items) = &property.kind {
        let container = resolve_schema_type_name(config, property);
        let items_type = resolve_schema_type_name(config, items);

        if config.is_language_primitive(&items_type) {
            tracing::trace!(property = %property.name, %items_type, "untyped primitive array");
            return format!("{}{}", container, POINTER);
        }

        let items_declaration = declare_type(config, items);
        let items_declaration = items_declaration
            .strip_suffix(POINTER)
            .unwrap_or(&items_declaration);

        return format!("{}<{}>{}", container, items_declaration, POINTER);
    }

    let type_name = resolve_schema_type_name(config, property);
    if config.is_value_primitive(&type_name) {
        type_name
    } else {
        format!("{}{}", type_name, POINTER)
    }
}

/// The mutable container to instantiate for arrays and maps.
///
/// `None` for every other kind: primitives and models are never instantiated
/// by generated initializers.
pub fn instantiation_type(property: &SchemaProperty) -> Option<&'static str> {
    match property.kind {
        SchemaKind::Array(_) => Some(ARRAY_INSTANTIATION_TYPE),
        SchemaKind::Map(_) => Some(MAP_INSTANTIATION_TYPE),
        _ => None,
    }
}

/// Default-value expression for a property. Generated models never carry one.
pub fn default_value(_property: &SchemaProperty) -> Option<String> {
    None
}

/// The initializer a model uses to populate a non-container property of the
/// given resolved type.
pub fn setter_name(type_name: &str) -> &'static str {
    if type_name == "NSDictionary" {
        "initWithDictionary"
    } else {
        "initWithValues"
    }
}
