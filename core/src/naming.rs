#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Turns raw schema names (field names, parameter names, operation ids) into
//! legal Objective-C identifiers.
//!
//! Variables and parameters collide silently: a reserved word or a leading
//! digit gets an `_` prefix. Operations do not: an operation id that is a
//! reserved word is a `NamingConflict`, because escaping it would change the
//! public selector of the generated client.

use crate::config::ResolverConfig;
use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// Objective-C (and C) words that cannot be used verbatim as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "auto",
    "else",
    "long",
    "switch",
    "break",
    "enum",
    "register",
    "typedef",
    "case",
    "extern",
    "return",
    "union",
    "char",
    "float",
    "short",
    "unsigned",
    "const",
    "for",
    "signed",
    "void",
    "continue",
    "goto",
    "sizeof",
    "volatile",
    "default",
    "if",
    "id",
    "static",
    "while",
    "do",
    "int",
    "struct",
    "_Packed",
    "double",
    "protocol",
    "interface",
    "implementation",
    "NSObject",
    "NSInteger",
    "NSNumber",
    "CGFloat",
    "property",
    "nonatomic",
    "retain",
    "strong",
    "weak",
    "unsafe_unretained",
    "readwrite",
    "readonly",
];

/// Replaces every character outside `[A-Za-z0-9_]` with `_`.
///
/// e.g. `created-at` -> `created_at`
pub fn sanitize(name: &str) -> String {
    static ILLEGAL_RE: OnceLock<Regex> = OnceLock::new();
    let illegal_re =
        ILLEGAL_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex"));
    illegal_re.replace_all(name, "_").into_owned()
}

/// Converts an underscore separated name to CamelCase.
///
/// Each run of underscores is dropped and the character after it is
/// uppercased; a trailing run collapses to a single `_`. Other characters keep
/// their case, so `NSString` stays `NSString` and `pet_id` becomes `PetId`.
/// With `lower_first` the first character is lowercased instead (`petId`).
pub fn camelize(word: &str, lower_first: bool) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        while chars.peek() == Some(&'_') {
            chars.next();
        }
        match chars.next() {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push('_'),
        }
    }

    let mut rest = out.chars();
    match rest.next() {
        Some(first) if lower_first => first.to_lowercase().chain(rest).collect(),
        Some(first) => first.to_uppercase().chain(rest).collect(),
        None => out,
    }
}

/// Prefixes a colliding identifier with `_`.
pub fn escape_reserved_word(name: &str) -> String {
    format!("_{}", name)
}

/// Single uppercase letters and a lone `_` are left alone.
fn is_single_upper_or_underscore(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c == '_' || c.is_ascii_uppercase()
    )
}

/// Converts a raw field name into an Objective-C variable name.
///
/// e.g. `created_at` -> `createdAt`, `return` -> `_return`, `1st` -> `_1st`
pub fn to_variable_name(config: &ResolverConfig, raw: &str) -> String {
    let name = sanitize(raw);

    if is_single_upper_or_underscore(&name) {
        return name;
    }

    let name = camelize(&name, true);

    if config.is_reserved_word(&name) || name.starts_with(|c: char| c.is_ascii_digit()) {
        let escaped = escape_reserved_word(&name);
        tracing::debug!(raw, escaped = %escaped, "escaped variable name");
        return escaped;
    }

    name
}

/// Converts a raw parameter name; identical to [`to_variable_name`].
pub fn to_param_name(config: &ResolverConfig, raw: &str) -> String {
    to_variable_name(config, raw)
}

/// Converts a raw operation id into an Objective-C method name.
///
/// # Errors
///
/// `AppError::NamingConflict` when the raw id is a reserved word, or when
/// normalization turns it into one (e.g. `Return` -> `return`).
pub fn to_operation_name(config: &ResolverConfig, raw: &str) -> AppResult<String> {
    if config.is_reserved_word(raw) {
        return Err(AppError::NamingConflict {
            name: raw.to_string(),
        });
    }

    let name = camelize(&sanitize(raw), true);

    if config.is_reserved_word(&name) {
        return Err(AppError::NamingConflict {
            name: raw.to_string(),
        });
    }

    Ok(name)
}
