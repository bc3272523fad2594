#![deny(missing_docs)]

//! # Schema Properties
//!
//! The resolver's input: one field of a model or one operation parameter,
//! with its declared kind. Composite kinds own their element property.
//!
//! Properties can also be written as short type expressions, which is how the
//! CLI and most tests build them:
//!
//! | Expression          | Kind                                   |
//! |---------------------|----------------------------------------|
//! | `string`, `long`    | primitive                              |
//! | `array<T>`          | array of `T`                           |
//! | `map<T>`            | map with values of `T`                 |
//! | `Pet`, `tag`        | model reference                        |
//! | `number`, `type:X`  | other schema type, looked up verbatim  |

use crate::error::{AppError, AppResult};
use crate::type_mapping::{PrimitiveKind, ARRAY_TYPE, MAP_TYPE, SCHEMA_TYPE_ALIASES};
use std::fmt::Display;
use std::str::FromStr;

/// The declared kind of a schema property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    /// A primitive from the closed primitive set.
    Primitive(PrimitiveKind),
    /// An array whose items are described by the boxed property.
    Array(Box<SchemaProperty>),
    /// A string-keyed map whose values are described by the boxed property.
    Map(Box<SchemaProperty>),
    /// A reference to a user-defined model, by its schema name.
    Model(String),
    /// Any other schema type name (`number`, `UUID`, `file`, ...).
    Other(String),
}

impl SchemaKind {
    /// The schema type name used to query the type-mapping table.
    pub fn schema_type(&self) -> &str {
        match self {
            SchemaKind::Primitive(kind) => kind.schema_name(),
            SchemaKind::Array(_) => ARRAY_TYPE,
            SchemaKind::Map(_) => MAP_TYPE,
            SchemaKind::Model(name) | SchemaKind::Other(name) => name,
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Primitive(kind) => write!(f, "{}", kind),
            SchemaKind::Array(items) => write!(f, "array<{}>", items.kind),
            SchemaKind::Map(values) => write!(f, "map<{}>", values.kind),
            SchemaKind::Model(name) => write!(f, "model:{}", name),
            SchemaKind::Other(name) => write!(f, "type:{}", name),
        }
    }
}

impl FromStr for SchemaKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(s.trim(), s)
    }
}

fn parse_kind(expr: &str, full: &str) -> AppResult<SchemaKind> {
    if expr.is_empty() {
        return Err(AppError::InvalidTypeExpression(format!(
            "empty type in `{}`",
            full
        )));
    }

    if let Some(inner) = generic_argument(expr, ARRAY_TYPE, full)? {
        let items = parse_kind(inner, full)?;
        return Ok(SchemaKind::Array(Box::new(SchemaProperty::new("", items))));
    }
    if let Some(inner) = generic_argument(expr, MAP_TYPE, full)? {
        let values = parse_kind(inner, full)?;
        return Ok(SchemaKind::Map(Box::new(SchemaProperty::new("", values))));
    }

    if expr.contains(['<', '>']) || expr.contains(char::is_whitespace) {
        return Err(AppError::InvalidTypeExpression(format!(
            "malformed type `{}` in `{}`",
            expr, full
        )));
    }

    if let Some(name) = expr.strip_prefix("model:") {
        return named(name, full).map(SchemaKind::Model);
    }
    if let Some(name) = expr.strip_prefix("type:") {
        return named(name, full).map(SchemaKind::Other);
    }
    if expr == ARRAY_TYPE || expr == MAP_TYPE {
        return Err(AppError::InvalidTypeExpression(format!(
            "`{}` needs an element type, e.g. `{}<string>`",
            expr, expr
        )));
    }

    if let Ok(kind) = expr.parse::<PrimitiveKind>() {
        return Ok(SchemaKind::Primitive(kind));
    }

    if SCHEMA_TYPE_ALIASES.contains(&expr) {
        Ok(SchemaKind::Other(expr.to_string()))
    } else {
        Ok(SchemaKind::Model(expr.to_string()))
    }
}

/// Returns the `T` of `container<T>`, `None` when `expr` is not that container.
fn generic_argument<'a>(expr: &'a str, container: &str, full: &str) -> AppResult<Option<&'a str>> {
    let Some(rest) = expr.strip_prefix(container) else {
        return Ok(None);
    };
    let Some(rest) = rest.trim_start().strip_prefix('<') else {
        return Ok(None);
    };
    match rest.strip_suffix('>') {
        Some(inner) => Ok(Some(inner.trim())),
        None => Err(AppError::InvalidTypeExpression(format!(
            "unclosed `<` in `{}`",
            full
        ))),
    }
}

fn named(name: &str, full: &str) -> AppResult<String> {
    if name.is_empty() {
        Err(AppError::InvalidTypeExpression(format!(
            "missing name in `{}`",
            full
        )))
    } else {
        Ok(name.to_string())
    }
}

/// One field of a model or one parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaProperty {
    /// The raw name as written in the schema.
    pub name: String,
    /// The declared kind.
    pub kind: SchemaKind,
}

impl SchemaProperty {
    /// Creates a property.
    pub fn new(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a primitive property.
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(name, SchemaKind::Primitive(kind))
    }

    /// Creates a model-reference property.
    pub fn model(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Model(model.into()))
    }

    /// Creates an array property; the items take the array's name.
    pub fn array_of(name: impl Into<String>, items: SchemaKind) -> Self {
        let name = name.into();
        let items = SchemaProperty::new(name.clone(), items);
        Self::new(name, SchemaKind::Array(Box::new(items)))
    }

    /// Creates a map property; the values take the map's name.
    pub fn map_of(name: impl Into<String>, values: SchemaKind) -> Self {
        let name = name.into();
        let values = SchemaProperty::new(name.clone(), values);
        Self::new(name, SchemaKind::Map(Box::new(values)))
    }

    /// Parses a type expression such as `array<model:Tag>` into a named property.
    pub fn parse(name: impl Into<String>, expr: &str) -> AppResult<Self> {
        let name = name.into();
        let mut kind: SchemaKind = expr.parse()?;
        rename_elements(&mut kind, &name);
        Ok(Self::new(name, kind))
    }

    /// The schema type name (`string`, `array`, `map`, or the referenced name).
    pub fn schema_type(&self) -> &str {
        self.kind.schema_type()
    }

    /// The element property of an array or map.
    pub fn element(&self) -> Option<&SchemaProperty> {
        match &self.kind {
            SchemaKind::Array(inner) | SchemaKind::Map(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether this property is an array or a map.
    pub fn is_container(&self) -> bool {
        self.element().is_some()
    }
}

fn rename_elements(kind: &mut SchemaKind, name: &str) {
    if let SchemaKind::Array(inner) | SchemaKind::Map(inner) = kind {
        inner.name = name.to_string();
        rename_elements(&mut inner.kind, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        let cases = vec![
            ("string", PrimitiveKind::String),
            ("long", PrimitiveKind::Long),
            ("boolean", PrimitiveKind::Boolean),
            ("date-time", PrimitiveKind::DateTime),
        ];

        for (input, expected) in cases {
            let kind: SchemaKind = input.parse().expect(input);
            assert_eq!(kind, SchemaKind::Primitive(expected));
        }
    }

    #[test]
    fn test_parse_named_types() {
        assert_eq!("Pet".parse::<SchemaKind>().unwrap(), SchemaKind::Model("Pet".into()));
        assert_eq!(
            "model:tag".parse::<SchemaKind>().unwrap(),
            SchemaKind::Model("tag".into())
        );
        assert_eq!(
            "number".parse::<SchemaKind>().unwrap(),
            SchemaKind::Other("number".into())
        );
        assert_eq!(
            "type:UUID".parse::<SchemaKind>().unwrap(),
            SchemaKind::Other("UUID".into())
        );
    }

    #[test]
    fn test_parse_lowercase_model_names() {
        for name in ["tag", "pet", "order_item"] {
            assert_eq!(
                name.parse::<SchemaKind>().unwrap(),
                SchemaKind::Model(name.into())
            );
        }
        assert_eq!("int".parse::<SchemaKind>().unwrap(), SchemaKind::Other("int".into()));
        assert_eq!("List".parse::<SchemaKind>().unwrap(), SchemaKind::Other("List".into()));
    }

    #[test]
    fn test_parse_nested_containers() {
        let prop = SchemaProperty::parse("matrix", "array<array<map<model:Tag>>>").unwrap();
        assert_eq!(prop.schema_type(), "array");

        let inner = prop.element().unwrap();
        assert_eq!(inner.schema_type(), "array");
        assert_eq!(inner.name, "matrix");

        let innermost = inner.element().unwrap();
        assert_eq!(innermost.schema_type(), "map");
        assert_eq!(innermost.element().unwrap().kind, SchemaKind::Model("Tag".into()));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "array", "map", "array<string", "array<>", "model:", "Pet<Tag>", "a b"] {
            let res = bad.parse::<SchemaKind>();
            assert!(
                matches!(res, Err(AppError::InvalidTypeExpression(_))),
                "`{}` should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let kind: SchemaKind = "map<array<model:Tag>>".parse().unwrap();
        assert_eq!(kind.to_string(), "map<array<model:Tag>>");
    }

    #[test]
    fn test_constructors() {
        let tags = SchemaProperty::array_of("tags", SchemaKind::Model("Tag".into()));
        assert!(tags.is_container());
        assert_eq!(tags.element().unwrap().name, "tags");

        let id = SchemaProperty::primitive("id", PrimitiveKind::Long);
        assert!(!id.is_container());
        assert_eq!(id.schema_type(), "long");
    }
}
