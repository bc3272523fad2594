use fotition_core::{GeneratorOptions, ObjcResolver, PrimitiveKind, ResolverConfig, SchemaProperty, TypeResolver};
use proptest::prelude::*;
use std::sync::OnceLock;

fn config() -> &'static ResolverConfig {
    static CONFIG: OnceLock<ResolverConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ResolverConfig::new(GeneratorOptions::default()).unwrap())
}

proptest! {
    #[test]
    fn variable_name_is_idempotent(raw in "[A-Za-z0-9_]{0,24}") {
        let resolver = ObjcResolver::new(config());
        let once = resolver.to_variable_name(&raw);
        let twice = resolver.to_variable_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn variable_name_is_a_legal_identifier(raw in "\\PC{1,24}") {
        let resolver = ObjcResolver::new(config());
        let name = resolver.to_variable_name(&raw);
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert!(!config().is_reserved_word(&name));
    }

    #[test]
    fn model_file_name_equals_type_name(raw in "\\PC{0,24}") {
        let resolver = ObjcResolver::new(config());
        prop_assert_eq!(resolver.to_model_file_name(&raw), resolver.to_model_type_name(&raw));
    }

    #[test]
    fn api_file_name_equals_type_name(raw in "[a-z_-]{0,16}") {
        let resolver = ObjcResolver::new(config());
        let name = resolver.to_api_type_name(&raw);
        prop_assert!(name.starts_with("FT"));
        prop_assert!(name.ends_with("Api"));
        prop_assert_eq!(resolver.to_api_file_name(&raw), name);
    }

    #[test]
    fn primitive_kinds_resolve_to_non_empty_names(idx in 0usize..PrimitiveKind::ALL.len()) {
        let resolver = ObjcResolver::new(config());
        let prop = SchemaProperty::primitive("field", PrimitiveKind::ALL[idx]);
        prop_assert!(!resolver.resolve_schema_type_name(&prop).is_empty());
    }
}
