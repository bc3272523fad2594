#![deny(missing_docs)]

//! # Fotition Core
//!
//! Schema-to-Objective-C type and name resolution for the Fotition client
//! generator.
//!
//! Build a [`ResolverConfig`] once from [`GeneratorOptions`], then ask an
//! [`ObjcResolver`] for declarations and identifiers:
//!
//! ```
//! use fotition_core::{GeneratorOptions, ObjcResolver, ResolverConfig, SchemaProperty, TypeResolver};
//!
//! let config = ResolverConfig::new(GeneratorOptions::default()).unwrap();
//! let resolver = ObjcResolver::new(&config);
//!
//! let tags = SchemaProperty::parse("tags", "array<model:Tag>").unwrap();
//! assert_eq!(resolver.declare_type(&tags), "NSArray<FTTag>*");
//! assert_eq!(resolver.to_variable_name("created_at"), "createdAt");
//! ```

/// Shared error types.
pub mod error;

/// Generator options and the immutable resolution tables.
pub mod config;

/// Primitive table (schema type -> Objective-C type).
pub mod type_mapping;

/// Schema properties and type expressions.
pub mod property;

/// Identifier normalization.
pub mod naming;

/// Model and API naming.
pub mod models;

/// Type declarations for primitives and containers.
pub mod composite;

/// The resolver interface.
pub mod resolver;

/// OpenAPI (OAS) schema classification.
pub mod oas;

/// Output folders and file names.
pub mod layout;

pub use composite::{declare_type, instantiation_type, resolve_schema_type_name};
pub use config::{GeneratorOptions, ResolverConfig};
pub use error::{AppError, AppResult};
pub use models::{
    to_api_file_name, to_api_type_name, to_model_file_name, to_model_import_path,
    to_model_type_name,
};
pub use naming::{to_operation_name, to_param_name, to_variable_name};
pub use oas::{model_properties, property_from_schema};
pub use property::{SchemaKind, SchemaProperty};
pub use resolver::{ObjcResolver, TypeResolver};
pub use type_mapping::{PrimitiveKind, TypeMappingTable};
