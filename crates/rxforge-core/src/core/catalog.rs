use super::models::compound::{BaseCompound, ModifierEffect};
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

static BUILTIN_BASES: Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "aspirin-like" => ("Acetylsalicylic acid derivative", "CC(=O)OC1=CC=CC=C1C(=O)O"),
    "penicillin-like" => (
        "Beta-lactam antibiotic derivative",
        "CC1(C)SC2C(NC(=O)CC3=CC=CC=C3)C(=O)N2C1C(=O)O"
    ),
    "ibuprofen-like" => ("Ibuprofen derivative", "CC(C)CC1=CC=C(C=C1)C(C)C(=O)O"),
    "custom" => ("Novel synthetic compound", "C1CCCCC1"),
};

static BUILTIN_MODIFIERS: Map<&'static str, ModifierEffect> = phf_map! {
    "anti-inflammatory" => ModifierEffect::new(1.2, 0.9, 1.1),
    "bioavailability" => ModifierEffect::new(1.1, 1.2, 0.8),
    "targeted" => ModifierEffect::new(1.3, 1.0, 1.0),
};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid catalog '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    bases: BTreeMap<String, BaseCompound>,
    #[serde(default)]
    modifiers: BTreeMap<String, ModifierEffect>,
}

/// The read-only base compound and modifier effect tables.
///
/// Built once at startup, either from the built-in defaults or from a TOML file, and then only
/// looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    bases: BTreeMap<String, BaseCompound>,
    modifiers: BTreeMap<String, ModifierEffect>,
}

impl Catalog {
    /// The built-in tables: four bases and three modifiers.
    pub fn builtin() -> Self {
        let bases = BUILTIN_BASES
            .entries()
            .map(|(key, (name, token))| (key.to_string(), BaseCompound::new(name, token)))
            .collect();
        let modifiers = BUILTIN_MODIFIERS
            .entries()
            .map(|(name, effect)| (name.to_string(), *effect))
            .collect();
        Self { bases, modifiers }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let label = path.to_string_lossy().to_string();
        debug!("Loading catalog from {}", label);
        let content = std::fs::read_to_string(path).map_err(|e| CatalogLoadError::Io {
            path: label.clone(),
            source: e,
        })?;
        Self::parse(&content, &label)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogLoadError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, label: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| CatalogLoadError::Toml {
            path: label.to_string(),
            source: e,
        })?;

        let invalid = |reason: String| CatalogLoadError::Invalid {
            path: label.to_string(),
            reason,
        };

        if file.bases.is_empty() {
            return Err(invalid("at least one base compound is required".to_string()));
        }
        if let Some(key) = file.bases.keys().find(|k| k.trim().is_empty()) {
            return Err(invalid(format!("base key '{}' is blank", key)));
        }
        if let Some((name, _)) = file.modifiers.iter().find(|(_, e)| !e.is_valid()) {
            return Err(invalid(format!(
                "modifier '{}' has a negative or non-finite factor",
                name
            )));
        }

        Ok(Self {
            bases: file.bases,
            modifiers: file.modifiers,
        })
    }

    pub fn base(&self, key: &str) -> Option<&BaseCompound> {
        self.bases.get(key)
    }

    /// Looks up a modifier's effect, falling back to the neutral effect for unknown names.
    pub fn modifier_effect(&self, name: &str) -> ModifierEffect {
        self.modifiers
            .get(name)
            .copied()
            .unwrap_or(ModifierEffect::NEUTRAL)
    }

    pub fn is_known_modifier(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    pub fn bases(&self) -> impl Iterator<Item = (&str, &BaseCompound)> {
        self.bases.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn modifiers(&self) -> impl Iterator<Item = (&str, &ModifierEffect)> {
        self.modifiers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn base_keys(&self) -> Vec<&str> {
        self.bases.keys().map(String::as_str).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
