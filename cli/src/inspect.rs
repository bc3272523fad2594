#![deny(missing_docs)]

//! # Inspect Commands
//!
//! Prints what the resolver decides for a type expression or a raw name,
//! without emitting any files.
//!
//! - `declare array<model:Tag>` -> resolved name, declaration, instantiation.
//! - `name operation get_pet` -> `getPet`.
//! - `options` -> the effective options and output folders.

use crate::error::CliResult;
use fotition_core::composite::setter_name;
use fotition_core::layout::{api_file_folder, model_file_folder};
use fotition_core::{GeneratorOptions, ObjcResolver, ResolverConfig, SchemaProperty, TypeResolver};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the declare command.
#[derive(clap::Args, Debug, Clone)]
pub struct DeclareArgs {
    /// Type expression, e.g. `string`, `array<model:Tag>`, `map<long>`.
    pub type_expr: String,

    /// Property name, used for the variable name line.
    #[clap(long, default_value = "value")]
    pub name: String,
}

/// Which naming rule to apply.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Model field variable.
    Variable,
    /// Operation parameter.
    Param,
    /// Operation method (fails on reserved words).
    Operation,
    /// Model class name.
    Model,
    /// Model file name.
    ModelFile,
    /// API class name.
    Api,
    /// API file name.
    ApiFile,
    /// Import path of a resolved model name.
    Import,
}

/// Arguments for the name command.
#[derive(clap::Args, Debug, Clone)]
pub struct NameArgs {
    /// Naming rule.
    #[clap(value_enum)]
    pub kind: NameKind,

    /// Raw names from the schema.
    #[clap(required = true)]
    pub raw: Vec<String>,
}

/// Output format for the options command.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the options command.
#[derive(clap::Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Prints the resolution of a type expression.
pub fn declare(args: &DeclareArgs, config: &ResolverConfig, out: &mut impl Write) -> CliResult<()> {
    let resolver = ObjcResolver::new(config);
    let property = SchemaProperty::parse(args.name.as_str(), &args.type_expr)?;

    let type_name = resolver.resolve_schema_type_name(&property);
    writeln!(out, "kind:          {}", property.kind)?;
    writeln!(out, "type:          {}", type_name)?;
    writeln!(out, "declaration:   {}", resolver.declare_type(&property))?;
    writeln!(
        out,
        "instantiation: {}",
        resolver
            .instantiation_type(&property)
            .unwrap_or_else(|| "-".to_string())
    )?;
    if !property.is_container() {
        writeln!(out, "setter:        {}", setter_name(&type_name))?;
    }
    writeln!(
        out,
        "variable:      {}",
        resolver.to_variable_name(&property.name)
    )?;

    Ok(())
}

/// Prints one normalized name per raw input.
///
/// Stops at the first operation id that is a reserved word.
pub fn name(args: &NameArgs, config: &ResolverConfig, out: &mut impl Write) -> CliResult<()> {
    let resolver = ObjcResolver::new(config);

    for raw in &args.raw {
        let resolved = match args.kind {
            NameKind::Variable => resolver.to_variable_name(raw),
            NameKind::Param => resolver.to_param_name(raw),
            NameKind::Operation => resolver.to_operation_name(raw)?,
            NameKind::Model => resolver.to_model_type_name(raw),
            NameKind::ModelFile => resolver.to_model_file_name(raw),
            NameKind::Api => resolver.to_api_type_name(raw),
            NameKind::ApiFile => resolver.to_api_file_name(raw),
            NameKind::Import => resolver.to_model_import_path(raw),
        };
        writeln!(out, "{}", resolved)?;
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EffectiveOptions {
    #[serde(flatten)]
    options: GeneratorOptions,
    model_file_folder: PathBuf,
    api_file_folder: PathBuf,
}

/// Prints the effective options, with the project name filled in.
pub fn options(args: &OptionsArgs, config: &ResolverConfig, out: &mut impl Write) -> CliResult<()> {
    let mut options = config.options().clone();
    options.project_name = Some(options.project_name().to_string());

    let effective = EffectiveOptions {
        options,
        model_file_folder: model_file_folder(config),
        api_file_folder: api_file_folder(config),
    };

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &effective)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &effective)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use fotition_core::AppError;

    fn config() -> ResolverConfig {
        ResolverConfig::new(GeneratorOptions::default()).unwrap()
    }

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> CliResult<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_declare_model_array() {
        let args = DeclareArgs {
            type_expr: "array<model:Tag>".into(),
            name: "tags".into(),
        };
        let output = run(|out| declare(&args, &config(), out));

        assert!(output.contains("type:          NSArray\n"));
        assert!(output.contains("declaration:   NSArray<FTTag>*\n"));
        assert!(output.contains("instantiation: NSMutableArray\n"));
        assert!(!output.contains("setter:"));
        assert!(output.contains("variable:      tags\n"));
    }

    #[test]
    fn test_declare_scalar() {
        let args = DeclareArgs {
            type_expr: "object".into(),
            name: "created_at".into(),
        };
        let output = run(|out| declare(&args, &config(), out));
        assert!(output.contains("declaration:   NSObject*\n"));
        assert!(output.contains("instantiation: -\n"));
        assert!(output.contains("setter:        initWithValues\n"));
        assert!(output.contains("variable:      createdAt\n"));
    }

    #[test]
    fn test_declare_rejects_bad_expression() {
        let args = DeclareArgs {
            type_expr: "array<".into(),
            name: "x".into(),
        };
        let res = declare(&args, &config(), &mut Vec::new());
        assert!(matches!(
            res,
            Err(CliError::Core(AppError::InvalidTypeExpression(_)))
        ));
    }

    #[test]
    fn test_name_kinds() {
        let cases = vec![
            (NameKind::Variable, "pet_id", "petId"),
            (NameKind::Param, "return", "_return"),
            (NameKind::Operation, "find_pets", "findPets"),
            (NameKind::Model, "pet_id", "FTPetId"),
            (NameKind::ModelFile, "string", "String"),
            (NameKind::Api, "pet", "FTPetApi"),
            (NameKind::ApiFile, "pet", "FTPetApi"),
            (NameKind::Import, "FTPet", "FTPet"),
        ];

        for (kind, raw, expected) in cases {
            let args = NameArgs {
                kind,
                raw: vec![raw.to_string()],
            };
            let output = run(|out| name(&args, &config(), out));
            assert_eq!(output, format!("{}\n", expected), "{:?}", kind);
        }
    }

    #[test]
    fn test_operation_conflict_is_an_error() {
        let args = NameArgs {
            kind: NameKind::Operation,
            raw: vec!["getPets".into(), "return".into()],
        };
        let mut buf = Vec::new();
        let res = name(&args, &config(), &mut buf);

        assert!(matches!(
            res,
            Err(CliError::Core(AppError::NamingConflict { .. }))
        ));
        assert_eq!(String::from_utf8(buf).unwrap(), "getPets\n");
    }

    #[test]
    fn test_options_json() {
        let args = OptionsArgs {
            format: OutputFormat::Json,
        };
        let output = run(|out| options(&args, &config(), out));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["classPrefix"], "FT");
        assert_eq!(value["projectName"], "fotition-objc-client");
        assert!(value["modelFileFolder"]
            .as_str()
            .unwrap()
            .ends_with("fotition-objc-client"));
    }

    #[test]
    fn test_options_yaml() {
        let args = OptionsArgs {
            format: OutputFormat::Yaml,
        };
        let output = run(|out| options(&args, &config(), out));
        assert!(output.contains("classPrefix: FT"));
        assert!(output.contains("sourceFolder: fotition-objc-client"));
    }
}
