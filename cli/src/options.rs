#![deny(missing_docs)]

//! # Generator Options
//!
//! Resolves the effective [`GeneratorOptions`]: defaults, then the options
//! file, then flags (or their `FOTITION_*` environment variables).

use crate::error::CliResult;
use fotition_core::{GeneratorOptions, ResolverConfig};
use std::path::PathBuf;

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// JSON or YAML options file (`classPrefix`, `sourceFolder`, ...).
    #[clap(long, global = true, env = "FOTITION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prefix for generated classes.
    #[clap(long, global = true, env = "FOTITION_CLASS_PREFIX")]
    pub class_prefix: Option<String>,

    /// Source folder for generated code.
    #[clap(long, global = true, env = "FOTITION_SOURCE_FOLDER")]
    pub source_folder: Option<String>,

    /// Name of the Xcode project (defaults to the source folder).
    #[clap(long, global = true, env = "FOTITION_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Namespace prepended to model imports.
    #[clap(long, global = true, env = "FOTITION_MODEL_PACKAGE")]
    pub model_package: Option<String>,

    /// Root output folder.
    #[clap(long, global = true, env = "FOTITION_OUTPUT_FOLDER")]
    pub output_folder: Option<PathBuf>,
}

impl OptionArgs {
    /// Merges the options file and the flags over the defaults.
    pub fn load(&self) -> CliResult<GeneratorOptions> {
        let mut opts = match &self.config {
            Some(path) => {
                tracing::debug!(?path, "loading options file");
                GeneratorOptions::from_path(path)?
            }
            None => GeneratorOptions::default(),
        };

        if let Some(prefix) = &self.class_prefix {
            opts.class_prefix = prefix.clone();
        }
        if let Some(folder) = &self.source_folder {
            opts.source_folder = folder.clone();
        }
        if let Some(name) = &self.project_name {
            opts.project_name = Some(name.clone());
        }
        if let Some(package) = &self.model_package {
            opts.model_package = package.clone();
        }
        if let Some(folder) = &self.output_folder {
            opts.output_folder = folder.clone();
        }

        Ok(opts)
    }

    /// Loads the options and builds the resolver configuration.
    pub fn resolver_config(&self) -> CliResult<ResolverConfig> {
        Ok(ResolverConfig::new(self.load()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use fotition_core::AppError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let opts = OptionArgs::default().load().unwrap();
        assert_eq!(opts, GeneratorOptions::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(
            &path,
            r#"{ "classPrefix": "SW", "sourceFolder": "FromFile", "modelPackage": "Models" }"#,
        )
        .unwrap();

        let args = OptionArgs {
            config: Some(path),
            class_prefix: Some("PS".into()),
            ..Default::default()
        };
        let opts = args.load().unwrap();

        assert_eq!(opts.class_prefix, "PS");
        assert_eq!(opts.source_folder, "FromFile");
        assert_eq!(opts.project_name(), "FromFile");
        assert_eq!(opts.model_package, "Models");
    }

    #[test]
    fn test_invalid_prefix_surfaces_config_error() {
        let args = OptionArgs {
            class_prefix: Some("9Lives".into()),
            ..Default::default()
        };
        let res = args.resolver_config();
        assert!(matches!(res, Err(CliError::Core(AppError::Config(_)))));
    }
}
