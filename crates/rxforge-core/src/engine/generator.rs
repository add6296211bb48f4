use super::error::EngineError;
use crate::core::catalog::Catalog;
use crate::core::models::compound::GeneratedCompound;
use crate::core::utils::modifiers::parse_modifiers;
use tracing::{debug, instrument};

/// The only modifier that edits the identifier token.
pub const TOKEN_EDITING_MODIFIER: &str = "anti-inflammatory";
/// Appended to the token once per occurrence of [`TOKEN_EDITING_MODIFIER`] (a methyl group).
pub const TOKEN_EDIT_SUFFIX: &str = "C";

/// Builds a compound from a catalog base, a disease and a comma-separated modifier list.
///
/// Each modifier, in order, appends ` with {modifier} properties` to the display name. A
/// non-empty disease then appends ` targeted at {disease}`. The token starts as the base token
/// and only grows for `anti-inflammatory` occurrences; other modifiers leave it untouched.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `base_key` is not in the catalog.
#[instrument(level = "debug", skip(catalog))]
pub fn generate(
    catalog: &Catalog,
    base_key: &str,
    disease: &str,
    modifiers_text: &str,
) -> Result<GeneratedCompound, EngineError> {
    let base = catalog
        .base(base_key)
        .ok_or_else(|| EngineError::InvalidInput {
            key: base_key.to_string(),
            available: catalog.base_keys().join(", "),
        })?;

    let mut display_name = base.name.clone();
    let mut token = base.token.clone();

    for modifier in parse_modifiers(modifiers_text) {
        display_name.push_str(&format!(" with {} properties", modifier));
        if modifier == TOKEN_EDITING_MODIFIER {
            token.push_str(TOKEN_EDIT_SUFFIX);
        }
    }

    if !disease.is_empty() {
        display_name.push_str(&format!(" targeted at {}", disease));
    }

    debug!("Generated '{}' with token '{}'", display_name, token);
    Ok(GeneratedCompound {
        display_name,
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn generate_aspirin_for_chronic_pain() {
        let compound = generate(
            &catalog(),
            "aspirin-like",
            "chronic pain",
            "anti-inflammatory",
        )
        .unwrap();
        assert_eq!(
            compound.display_name,
            "Acetylsalicylic acid derivative with anti-inflammatory properties targeted at chronic pain"
        );
        assert_eq!(compound.token, "CC(=O)OC1=CC=CC=C1C(=O)OC");
    }

    #[test]
    fn generate_fails_for_unknown_base_key() {
        let result = generate(&catalog(), "unknown-key", "", "");
        match result {
            Err(EngineError::InvalidInput { key, available }) => {
                assert_eq!(key, "unknown-key");
                assert!(available.contains("aspirin-like"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn generate_without_modifiers_or_disease_returns_base_record() {
        let compound = generate(&catalog(), "custom", "", "").unwrap();
        assert_eq!(compound.display_name, "Novel synthetic compound");
        assert_eq!(compound.token, "C1CCCCC1");
    }

    #[test]
    fn display_name_starts_with_registered_name_for_every_base() {
        let catalog = catalog();
        for (key, base) in catalog.bases() {
            let compound = generate(&catalog, key, "fever", "targeted, bioavailability").unwrap();
            assert!(compound.display_name.starts_with(&base.name));
        }
    }

    #[test]
    fn modifier_clauses_follow_input_order_and_skip_blanks() {
        let compound = generate(&catalog(), "ibuprofen-like", "", "targeted, ,glowing,,targeted")
            .unwrap();
        assert_eq!(
            compound.display_name,
            "Ibuprofen derivative with targeted properties with glowing properties with targeted properties"
        );
        assert_eq!(compound.display_name.matches(" properties").count(), 3);
    }

    #[test]
    fn disease_clause_comes_after_all_modifiers() {
        let compound = generate(&catalog(), "penicillin-like", "infection", "bioavailability")
            .unwrap();
        assert!(
            compound
                .display_name
                .ends_with("with bioavailability properties targeted at infection")
        );
    }

    #[test]
    fn only_anti_inflammatory_edits_the_token() {
        let catalog = catalog();
        let base_token = &catalog.base("ibuprofen-like").unwrap().token;

        let untouched = generate(&catalog, "ibuprofen-like", "", "targeted,bioavailability,x")
            .unwrap();
        assert_eq!(&untouched.token, base_token);

        let edited = generate(
            &catalog,
            "ibuprofen-like",
            "",
            "anti-inflammatory, targeted, anti-inflammatory",
        )
        .unwrap();
        assert_eq!(edited.token, format!("{}CC", base_token));
    }

    #[test]
    fn token_edit_requires_exact_modifier_text() {
        let compound = generate(&catalog(), "custom", "", "Anti-Inflammatory").unwrap();
        assert_eq!(compound.token, "C1CCCCC1");
    }
}
