#![deny(missing_docs)]

//! # Configuration
//!
//! Two layers:
//!
//! 1. [`GeneratorOptions`]: the user-facing scalars (class prefix, source
//!    folder, project name, ...) as read from an options file or the CLI.
//! 2. [`ResolverConfig`]: the immutable tables every resolution call reads,
//!    built once from the options. It is never mutated after construction and
//!    can be shared across threads by reference.

use crate::error::{AppError, AppResult};
use crate::naming::RESERVED_WORDS;
use crate::type_mapping::{
    TypeMappingTable, DEFAULT_INCLUDES, FOUNDATION_TYPES, LANGUAGE_SPECIFIC_PRIMITIVES,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default prefix for generated classes.
pub const DEFAULT_CLASS_PREFIX: &str = "FT";
/// Default source folder for generated code.
pub const DEFAULT_SOURCE_FOLDER: &str = "fotition-objc-client";
/// Default root output folder.
pub const DEFAULT_OUTPUT_FOLDER: &str = "generated-code/fotition-objc";

/// Generator options, serialized with camelCase keys.
///
/// Unknown keys are ignored so a shared generator config file can carry
/// options meant for other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Prefix for generated classes (e.g. `FT` -> `FTPet`).
    pub class_prefix: String,
    /// Source folder for generated code.
    pub source_folder: String,
    /// Name of the Xcode project; falls back to `source_folder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Namespace joined in front of model imports. Empty means none.
    pub model_package: String,
    /// Root output folder.
    pub output_folder: PathBuf,
    /// Extra or replacement entries for the type-mapping table.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub type_mappings: IndexMap<String, String>,
    /// Import aliases; their targets count as built-in type names.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub import_mappings: IndexMap<String, String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            source_folder: DEFAULT_SOURCE_FOLDER.to_string(),
            project_name: None,
            model_package: String::new(),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            type_mappings: IndexMap::new(),
            import_mappings: IndexMap::new(),
        }
    }
}

impl GeneratorOptions {
    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(AppError::Config(format!(
                "Unsupported options file (expected .json, .yaml or .yml): {:?}",
                path
            ))),
        }
    }

    /// Parses options from JSON.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses options from YAML.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The effective project name.
    pub fn project_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or(&self.source_folder)
    }

    /// Checks that the options can produce legal identifiers and paths.
    pub fn validate(&self) -> AppResult<()> {
        let prefix = &self.class_prefix;
        if prefix.starts_with(|c: char| c.is_ascii_digit())
            || !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::Config(format!(
                "classPrefix `{}` must be empty or match [A-Za-z_][A-Za-z0-9_]*",
                prefix
            )));
        }

        if self.source_folder.trim().is_empty() {
            return Err(AppError::Config("sourceFolder must not be empty".into()));
        }

        if self.project_name().trim().is_empty() {
            return Err(AppError::Config("projectName must not be empty".into()));
        }

        for (schema_type, target) in &self.type_mappings {
            if schema_type.trim().is_empty() {
                return Err(AppError::Config(
                    "typeMappings keys must not be empty".into(),
                ));
            }
            if !is_identifier(target) {
                return Err(AppError::Config(format!(
                    "typeMappings `{}` -> `{}`: target must match [A-Za-z_][A-Za-z0-9_]*",
                    schema_type, target
                )));
            }
        }

        Ok(())
    }
}

/// Immutable resolution tables derived from [`GeneratorOptions`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    options: GeneratorOptions,
    type_mapping: TypeMappingTable,
    language_primitives: HashSet<String>,
    foundation_types: HashSet<String>,
    reserved_words: HashSet<String>,
    known_builtins: HashSet<String>,
}

impl ResolverConfig {
    /// Validates the options and builds every table once.
    pub fn new(options: GeneratorOptions) -> AppResult<Self> {
        options.validate()?;

        let type_mapping = TypeMappingTable::with_overrides(&options.type_mappings);
        let language_primitives = to_set(LANGUAGE_SPECIFIC_PRIMITIVES);
        let foundation_types = to_set(FOUNDATION_TYPES);
        let reserved_words = to_set(RESERVED_WORDS);

        // A name is built-in when any of these sets claims it.
        let mut known_builtins: HashSet<String> = type_mapping
            .keys()
            .chain(type_mapping.values())
            .map(str::to_string)
            .collect();
        known_builtins.extend(foundation_types.iter().cloned());
        known_builtins.extend(options.import_mappings.values().cloned());
        known_builtins.extend(DEFAULT_INCLUDES.iter().map(|s| s.to_string()));
        known_builtins.extend(language_primitives.iter().cloned());

        tracing::debug!(
            class_prefix = %options.class_prefix,
            source_folder = %options.source_folder,
            builtins = known_builtins.len(),
            "resolver config ready"
        );

        Ok(Self {
            options,
            type_mapping,
            language_primitives,
            foundation_types,
            reserved_words,
            known_builtins,
        })
    }

    /// The options this config was built from.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Prefix for generated classes.
    pub fn class_prefix(&self) -> &str {
        &self.options.class_prefix
    }

    /// The primitive table.
    pub fn type_mapping(&self) -> &TypeMappingTable {
        &self.type_mapping
    }

    /// Whether `name` is native to Objective-C rather than user defined.
    pub fn is_language_primitive(&self, name: &str) -> bool {
        self.language_primitives.contains(name)
    }

    /// Whether `name` is a built-in with reference semantics.
    pub fn is_foundation_type(&self, name: &str) -> bool {
        self.foundation_types.contains(name)
    }

    /// A built-in value type (`BOOL`, `bool`): declared without a pointer.
    pub fn is_value_primitive(&self, name: &str) -> bool {
        self.is_language_primitive(name) && !self.is_foundation_type(name)
    }

    /// Whether `name` cannot be used verbatim as an identifier.
    pub fn is_reserved_word(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Whether `name` is a built-in type name and so never gets the class prefix.
    pub fn is_known_builtin(&self, name: &str) -> bool {
        self.known_builtins.contains(name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let opts = GeneratorOptions::default();
        assert_eq!(opts.class_prefix, "FT");
        assert_eq!(opts.source_folder, "fotition-objc-client");
        assert_eq!(opts.project_name(), "fotition-objc-client");
        assert_eq!(opts.model_package, "");
    }

    #[test]
    fn test_project_name_follows_source_folder() {
        let opts = GeneratorOptions {
            source_folder: "PetstoreClient".into(),
            ..Default::default()
        };
        assert_eq!(opts.project_name(), "PetstoreClient");

        let opts = GeneratorOptions {
            project_name: Some("Petstore".into()),
            ..opts
        };
        assert_eq!(opts.project_name(), "Petstore");
    }

    #[test]
    fn test_json_options_with_unknown_keys() {
        let json = r#"{ "classPrefix": "SW", "sourceFolder": "Sources", "podVersion": "1.0" }"#;
        let opts = GeneratorOptions::from_json_str(json).unwrap();
        assert_eq!(opts.class_prefix, "SW");
        assert_eq!(opts.source_folder, "Sources");
        assert_eq!(opts.project_name(), "Sources");
        assert_eq!(opts.output_folder, PathBuf::from(DEFAULT_OUTPUT_FOLDER));
    }

    #[test]
    fn test_yaml_options_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "classPrefix: PS\nprojectName: Petstore\ntypeMappings:\n  UUID: NSUUID\n"
        )
        .unwrap();

        let opts = GeneratorOptions::from_path(file.path()).unwrap();
        assert_eq!(opts.class_prefix, "PS");
        assert_eq!(opts.project_name(), "Petstore");
        assert_eq!(opts.type_mappings.get("UUID").map(String::as_str), Some("NSUUID"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let res = GeneratorOptions::from_path(file.path());
        assert!(matches!(res, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        for prefix in ["1X", "F-T", "F T"] {
            let opts = GeneratorOptions {
                class_prefix: prefix.into(),
                ..Default::default()
            };
            assert!(matches!(ResolverConfig::new(opts), Err(AppError::Config(_))));
        }

        let empty_prefix = GeneratorOptions {
            class_prefix: String::new(),
            ..Default::default()
        };
        assert!(ResolverConfig::new(empty_prefix).is_ok());
    }

    #[test]
    fn test_invalid_type_mappings_rejected() {
        let cases = [
            r#"{ "typeMappings": { "boolean": "" } }"#,
            r#"{ "typeMappings": { "UUID": "NS-UUID" } }"#,
            r#"{ "typeMappings": { "UUID": "9UUID" } }"#,
            r#"{ "typeMappings": { "": "NSUUID" } }"#,
        ];

        for json in cases {
            let opts = GeneratorOptions::from_json_str(json).unwrap();
            assert!(
                matches!(ResolverConfig::new(opts), Err(AppError::Config(_))),
                "{}",
                json
            );
        }

        let opts =
            GeneratorOptions::from_json_str(r#"{ "typeMappings": { "boolean": "BOOL", "UUID": "NSUUID" } }"#)
                .unwrap();
        assert!(ResolverConfig::new(opts).is_ok());
    }

    #[test]
    fn test_builtin_membership() {
        let config = ResolverConfig::new(GeneratorOptions::default()).unwrap();

        // type-mapping keys and values
        assert!(config.is_known_builtin("string"));
        assert!(config.is_known_builtin("NSString"));
        // default includes only
        assert!(config.is_known_builtin("NSMutableArray"));
        assert!(config.is_known_builtin("BOOL"));
        assert!(!config.is_known_builtin("Pet"));

        assert!(config.is_value_primitive("BOOL"));
        assert!(!config.is_value_primitive("NSNumber"));
        assert!(config.is_foundation_type("NSDictionary"));
        assert!(!config.is_language_primitive("NSDictionary"));
    }

    #[test]
    fn test_import_mappings_are_builtin() {
        let mut import_mappings = IndexMap::new();
        import_mappings.insert("Money".to_string(), "SKMoney".to_string());
        let opts = GeneratorOptions {
            import_mappings,
            ..Default::default()
        };
        let config = ResolverConfig::new(opts).unwrap();
        assert!(config.is_known_builtin("SKMoney"));
        assert!(!config.is_known_builtin("Money"));
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolverConfig>();
    }
}
