#![deny(missing_docs)]

//! # Resolver Interface
//!
//! The call surface the template-driven emitter uses. One method per question
//! the emitter asks about a schema element; every method is a pure function of
//! the borrowed configuration and its argument.

use crate::composite;
use crate::config::ResolverConfig;
use crate::error::AppResult;
use crate::models;
use crate::naming;
use crate::property::SchemaProperty;

/// Trait for resolving schema elements to target-language types and names.
pub trait TypeResolver {
    /// Full type declaration, e.g. `NSArray<FTTag>*`.
    fn declare_type(&self, property: &SchemaProperty) -> String;

    /// Mutable container to instantiate, `None` for non-containers.
    fn instantiation_type(&self, property: &SchemaProperty) -> Option<String>;

    /// Resolved type name before pointer decoration, e.g. `NSArray`.
    fn resolve_schema_type_name(&self, property: &SchemaProperty) -> String;

    /// Default-value expression, `None` when the emitter should write none.
    fn default_value(&self, property: &SchemaProperty) -> Option<String>;

    /// Variable name for a model field.
    fn to_variable_name(&self, raw: &str) -> String;

    /// Parameter name; same rules as [`TypeResolver::to_variable_name`].
    fn to_param_name(&self, raw: &str) -> String;

    /// Method name for an operation. Fails on reserved words.
    fn to_operation_name(&self, raw: &str) -> AppResult<String>;

    /// Public type name of a model.
    fn to_model_type_name(&self, raw: &str) -> String;

    /// File name of a model (equal to its type name).
    fn to_model_file_name(&self, raw: &str) -> String;

    /// Public type name of an API group.
    fn to_api_type_name(&self, raw: &str) -> String;

    /// File name of an API group (equal to its type name).
    fn to_api_file_name(&self, raw: &str) -> String;

    /// Import path for an already resolved model name.
    fn to_model_import_path(&self, model_name: &str) -> String;
}

/// The Objective-C resolver, borrowing an immutable [`ResolverConfig`].
///
/// Cheap to create and `Copy`; make one per thread or share one freely.
#[derive(Debug, Clone, Copy)]
pub struct ObjcResolver<'a> {
    config: &'a ResolverConfig,
}

impl<'a> ObjcResolver<'a> {
    /// Creates a resolver over `config`.
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this resolver reads.
    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }
}

impl TypeResolver for ObjcResolver<'_> {
    fn declare_type(&self, property: &SchemaProperty) -> String {
        composite::declare_type(self.config, property)
    }

    fn instantiation_type(&self, property: &SchemaProperty) -> Option<String> {
        composite::instantiation_type(property).map(str::to_string)
    }

    fn resolve_schema_type_name(&self, property: &SchemaProperty) -> String {
        composite::resolve_schema_type_name(self.config, property)
    }

    fn default_value(&self, property: &SchemaProperty) -> Option<String> {
        composite::default_value(property)
    }

    fn to_variable_name(&self, raw: &str) -> String {
        naming::to_variable_name(self.config, raw)
    }

    fn to_param_name(&self, raw: &str) -> String {
        naming::to_param_name(self.config, raw)
    }

    fn to_operation_name(&self, raw: &str) -> AppResult<String> {
        naming::to_operation_name(self.config, raw)
    }

    fn to_model_type_name(&self, raw: &str) -> String {
        models::to_model_type_name(self.config, raw)
    }

    fn to_model_file_name(&self, raw: &str) -> String {
        models::to_model_file_name(self.config, raw)
    }

    fn to_api_type_name(&self, raw: &str) -> String {
        models::to_api_type_name(self.config, raw)
    }

    fn to_api_file_name(&self, raw: &str) -> String {
        models::to_api_file_name(self.config, raw)
    }

    fn to_model_import_path(&self, model_name: &str) -> String {
        models::to_model_import_path(self.config, model_name)
    }
}
