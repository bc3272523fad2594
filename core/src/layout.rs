#![deny(missing_docs)]

//! # Output Layout
//!
//! Where generated files go and what they are called on disk. Nothing here
//! touches the filesystem; the emitter owns all I/O.

use crate::config::ResolverConfig;
use crate::models::{to_api_file_name, to_model_file_name};
use std::path::PathBuf;

/// Generator name as selected on the command line.
pub const GENERATOR_NAME: &str = "fotition-objc";
/// One-line description of the generator.
pub const GENERATOR_HELP: &str = "Generates an Objective-C client library for Fotition.";

/// Extensions each model and API class is emitted with: header, then body.
pub const CLASS_FILE_EXTENSIONS: [&str; 2] = [".h", ".m"];

/// Folder that receives model files: `<outputFolder>/<sourceFolder>`.
pub fn model_file_folder(config: &ResolverConfig) -> PathBuf {
    let opts = config.options();
    opts.output_folder.join(&opts.source_folder)
}

/// Folder that receives API files. Same as [`model_file_folder`].
pub fn api_file_folder(config: &ResolverConfig) -> PathBuf {
    model_file_folder(config)
}

/// Header and body paths for a model, e.g. `.../FTPet.h` and `.../FTPet.m`.
pub fn model_file_paths(config: &ResolverConfig, raw: &str) -> Vec<PathBuf> {
    class_file_paths(model_file_folder(config), &to_model_file_name(config, raw))
}

/// Header and body paths for an API group, e.g. `.../FTPetApi.h`.
pub fn api_file_paths(config: &ResolverConfig, raw: &str) -> Vec<PathBuf> {
    class_file_paths(api_file_folder(config), &to_api_file_name(config, raw))
}

fn class_file_paths(folder: PathBuf, stem: &str) -> Vec<PathBuf> {
    CLASS_FILE_EXTENSIONS
        .iter()
        .map(|ext| folder.join(format!("{}{}", stem, ext)))
        .collect()
}
