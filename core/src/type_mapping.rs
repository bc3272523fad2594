#![deny(missing_docs)]

//! # Type Mapping
//!
//! The primitive table: schema type names (`string`, `long`, `array`, ...) to
//! Objective-C type names (`NSString`, `NSNumber`, `NSArray`, ...).
//!
//! Lookups never fail. A schema type absent from the table resolves to its own
//! name, which lets newer schema features pass through until the table learns
//! about them.

use indexmap::IndexMap;
use std::fmt::Display;
use std::str::FromStr;

/// Schema primitive kinds understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `boolean`
    Boolean,
    /// `integer` (32 bit).
    Integer,
    /// `long` (`integer` with `int64` format).
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `string`
    String,
    /// `date`
    Date,
    /// `DateTime` (`string` with `date-time` format).
    DateTime,
    /// Free-form `object`.
    Object,
    /// A string enumeration.
    Enum,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [PrimitiveKind; 10] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Integer,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::String,
        PrimitiveKind::Date,
        PrimitiveKind::DateTime,
        PrimitiveKind::Object,
        PrimitiveKind::Enum,
    ];

    /// The schema type name used as the type-mapping key.
    pub fn schema_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Date => "date",
            PrimitiveKind::DateTime => "DateTime",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Enum => "enum",
        }
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.schema_name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = ();

    /// Accepts the schema names plus the common spellings `date-time` and `Date`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(PrimitiveKind::Boolean),
            "integer" => Ok(PrimitiveKind::Integer),
            "long" => Ok(PrimitiveKind::Long),
            "float" => Ok(PrimitiveKind::Float),
            "double" => Ok(PrimitiveKind::Double),
            "string" => Ok(PrimitiveKind::String),
            "date" | "Date" => Ok(PrimitiveKind::Date),
            "DateTime" | "datetime" | "date-time" => Ok(PrimitiveKind::DateTime),
            "object" => Ok(PrimitiveKind::Object),
            "enum" => Ok(PrimitiveKind::Enum),
            _ => Err(()),
        }
    }
}

/// Schema type name of the array container.
pub const ARRAY_TYPE: &str = "array";
/// Schema type name of the map container.
pub const MAP_TYPE: &str = "map";

/// Table keys that are neither primitives nor containers.
pub const SCHEMA_TYPE_ALIASES: &[&str] = &["int", "number", "List"];

/// Objective-C header names that generated code may include without a prefix.
pub const DEFAULT_INCLUDES: &[&str] = &[
    "bool",
    "BOOL",
    "int",
    "NSString",
    "NSObject",
    "NSArray",
    "NSNumber",
    "NSDate",
    "NSDictionary",
    "NSMutableArray",
    "NSMutableDictionary",
];

/// Type names treated as native to Objective-C rather than user defined.
pub const LANGUAGE_SPECIFIC_PRIMITIVES: &[&str] =
    &["NSNumber", "NSString", "NSObject", "NSDate", "bool", "BOOL"];

/// Built-ins with reference semantics, declared as `Type*`.
pub const FOUNDATION_TYPES: &[&str] = &[
    "NSNumber",
    "NSObject",
    "NSString",
    "NSDate",
    "NSDictionary",
];

/// Mutable concrete container used when instantiating an array.
pub const ARRAY_INSTANTIATION_TYPE: &str = "NSMutableArray";
/// Mutable concrete container used when instantiating a map.
pub const MAP_INSTANTIATION_TYPE: &str = "NSMutableDictionary";

/// Mapping from schema type names to Objective-C type names.
///
/// Insertion order is kept so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMappingTable {
    entries: IndexMap<String, String>,
}

impl Default for TypeMappingTable {
    fn default() -> Self {
        let entries = [
            ("enum", "NSString"),
            ("date", "NSDate"),
            ("Date", "NSDate"),
            ("DateTime", "NSDate"),
            ("boolean", "NSNumber"),
            ("string", "NSString"),
            ("integer", "NSNumber"),
            ("int", "NSNumber"),
            ("float", "NSNumber"),
            ("long", "NSNumber"),
            ("double", "NSNumber"),
            (ARRAY_TYPE, "NSArray"),
            (MAP_TYPE, "NSDictionary"),
            ("number", "NSNumber"),
            ("List", "NSArray"),
            ("object", "NSObject"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { entries }
    }
}

impl TypeMappingTable {
    /// Builds the default table with `overrides` applied on top.
    ///
    /// Overrides replace existing entries in place and append new ones.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::default();
        for (schema_type, target) in overrides {
            table.entries.insert(schema_type.clone(), target.clone());
        }
        table
    }

    /// The mapped Objective-C name, if the table has one.
    pub fn get(&self, schema_type: &str) -> Option<&str> {
        self.entries.get(schema_type).map(String::as_str)
    }

    /// Resolves a schema type name, falling back to the name itself.
    pub fn resolve<'a>(&'a self, schema_type: &'a str) -> &'a str {
        self.get(schema_type).unwrap_or(schema_type)
    }

    /// Whether the schema type has an entry.
    pub fn contains(&self, schema_type: &str) -> bool {
        self.entries.contains_key(schema_type)
    }

    /// Schema type names with an entry.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Mapped Objective-C names (may repeat).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}
