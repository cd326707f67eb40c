use proptest::prelude::*;
use proptest::test_runner::Config;
use sis_map::{
    AliasRegistry, BUILTIN_TABLES, ColumnResolver, RegistryError, VariantTable, normalize_header,
    unmatched_columns,
};
use sis_model::CanonicalField;

fn known_variants() -> Vec<&'static str> {
    BUILTIN_TABLES
        .iter()
        .flat_map(|table| table.entries.iter().map(|(raw, _)| *raw))
        .collect()
}

fn header_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(known_variants()).prop_map(str::to_string),
        (prop::sample::select(known_variants()), any::<bool>(), "[ \t]{0,3}").prop_map(
            |(raw, upper, pad)| {
                let cased = if upper {
                    raw.to_uppercase()
                } else {
                    raw.to_lowercase()
                };
                format!("{pad}{cased}{pad}")
            }
        ),
        "[A-Za-z0-9 _#&]{0,24}",
    ]
}

#[test]
fn builtin_registry_builds() {
    let registry = AliasRegistry::builtin().unwrap();
    assert_eq!(BUILTIN_TABLES.len(), 6);
    assert_eq!(BUILTIN_TABLES[0].system, "Skyward");
    assert_eq!(BUILTIN_TABLES[5].system, "Generic");
    assert!(!registry.is_empty());
}

#[test]
fn every_canonical_name_resolves_to_itself() {
    let registry = AliasRegistry::builtin().unwrap();
    for field in CanonicalField::ALL {
        assert_eq!(registry.lookup(field.as_str()), Some(field), "{field}");
    }
}

#[test]
fn common_exports_resolve() {
    let registry = AliasRegistry::builtin().unwrap();
    let cases = [
        ("Incident Number", CanonicalField::IncidentNumber),
        ("Incident Date & Time", CanonicalField::IncidentDate),
        ("Building", CanonicalField::Campus),
        ("Start Date", CanonicalField::ConsequenceStartDate),
        ("End Date", CanonicalField::ConsequenceEndDate),
        ("Consequence Type", CanonicalField::ConsequenceType),
        ("Instructional Minutes", CanonicalField::InstructionalMinutes),
    ];
    for (raw, expected) in cases {
        assert_eq!(registry.lookup(raw), Some(expected), "{raw}");
    }
    assert_eq!(registry.lookup("Student ID"), None);
}

#[test]
fn first_contributing_system_is_recorded() {
    let registry = AliasRegistry::builtin().unwrap();
    let entry = registry.entry("incident number").unwrap();
    assert_eq!(entry.system, "Skyward");
    assert_eq!(entry.key, "incident number");
}

#[test]
fn conflicting_tables_fail_the_build() {
    let tables = [
        BUILTIN_TABLES[0],
        VariantTable {
            system: "Rogue",
            entries: &[("Building", CanonicalField::Location)],
        },
    ];
    assert!(matches!(
        AliasRegistry::from_tables(&tables),
        Err(RegistryError::Conflict {
            system: "Rogue",
            existing: CanonicalField::Campus,
            ..
        })
    ));
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn resolved_and_unmatched_partition_headers(
        headers in prop::collection::vec(header_strategy(), 0..12)
    ) {
        let registry = AliasRegistry::builtin().unwrap();
        let resolver = ColumnResolver::new(&registry);
        let resolved = resolver.resolve(&headers, "Incident");
        let unmatched = unmatched_columns(&headers, &resolved);

        for header in &headers {
            let in_resolved = resolved.contains(header);
            let in_unmatched = unmatched.contains(header);
            prop_assert!(in_resolved != in_unmatched, "header {:?}", header);
        }
        prop_assert_eq!(resolved.len() + unmatched.len(), headers.len());
    }

    #[test]
    fn resolution_is_deterministic(
        headers in prop::collection::vec(header_strategy(), 0..12),
        label in "[a-z]{0,10}"
    ) {
        let registry = AliasRegistry::builtin().unwrap();
        let resolver = ColumnResolver::new(&registry);
        let first = resolver.resolve(&headers, "Consequence");
        let second = resolver.resolve(&headers, &label);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            unmatched_columns(&headers, &first),
            unmatched_columns(&headers, &second)
        );
    }

    #[test]
    fn resolves_only_on_exact_normalized_key(header in header_strategy()) {
        let registry = AliasRegistry::builtin().unwrap();
        let key = normalize_header(&header);
        let exact = registry
            .entries()
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.canonical);
        prop_assert_eq!(registry.lookup(&header), exact);
    }

    #[test]
    fn single_character_deletion_never_borrows_another_key(
        raw in prop::sample::select(known_variants()),
        position in any::<prop::sample::Index>()
    ) {
        let registry = AliasRegistry::builtin().unwrap();
        let chars: Vec<char> = raw.chars().collect();
        let drop_at = position.index(chars.len());
        let edited: String = chars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != drop_at)
            .map(|(_, c)| *c)
            .collect();

        // The edit resolves only if it is itself a registry key.
        let own_key = registry
            .entries()
            .iter()
            .any(|entry| entry.key == normalize_header(&edited));
        prop_assert_eq!(registry.lookup(&edited).is_some(), own_key);
    }
}
