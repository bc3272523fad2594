#![deny(missing_docs)]

//! # Model Naming
//!
//! Public type names and file names for models and API groups.
//!
//! Built-in names (`string`, `NSString`, `BOOL`, ...) are only camel-cased;
//! everything else is a user model and gets the class prefix so it cannot
//! collide with a Foundation class.

use crate::config::ResolverConfig;
use crate::naming::{camelize, sanitize};

/// Type name of a model, e.g. `pet_id` -> `FTPetId`, `string` -> `String`.
pub fn to_model_type_name(config: &ResolverConfig, raw: &str) -> String {
    let name = sanitize(raw);

    if config.is_known_builtin(&name) {
        tracing::trace!(raw, "built-in type name, no prefix");
        return camelize(&name, false);
    }

    tracing::trace!(raw, prefix = config.class_prefix(), "user model, prefixed");
    format!("{}{}", config.class_prefix(), camelize(&name, false))
}

/// File name of a model. Always equal to [`to_model_type_name`].
pub fn to_model_file_name(config: &ResolverConfig, raw: &str) -> String {
    to_model_type_name(config, raw)
}

/// Type name of an API group, e.g. `pet` -> `FTPetApi`.
///
/// API groups are never built-ins, so the prefix is always applied.
pub fn to_api_type_name(config: &ResolverConfig, raw: &str) -> String {
    format!(
        "{}{}Api",
        config.class_prefix(),
        camelize(&sanitize(raw), false)
    )
}

/// File name of an API group. Always equal to [`to_api_type_name`].
pub fn to_api_file_name(config: &ResolverConfig, raw: &str) -> String {
    to_api_type_name(config, raw)
}

/// Import path of an already resolved model name.
///
/// Joins the configured model package with `.`; with no package the name is
/// returned as is.
pub fn to_model_import_path(config: &ResolverConfig, model_name: &str) -> String {
    let package = &config.options().model_package;
    if package.is_empty() {
        model_name.to_string()
    } else {
        format!("{}.{}", package, model_name)
    }
}
