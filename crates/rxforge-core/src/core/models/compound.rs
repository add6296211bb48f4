use serde::{Deserialize, Serialize};

/// A starting record selectable by key from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseCompound {
    pub name: String,  // Registered display name (e.g., "Ibuprofen derivative")
    pub token: String, // Opaque identifier token, handled as plain text
}

impl BaseCompound {
    pub fn new(name: &str, token: &str) -> Self {
        Self {
            name: name.to_string(),
            token: token.to_string(),
        }
    }
}

/// Multiplicative factors a modifier applies to the simulated metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModifierEffect {
    pub efficacy: f64,
    pub safety: f64,
    pub side_effects: f64,
}

impl ModifierEffect {
    /// The effect used for modifiers missing from the catalog.
    pub const NEUTRAL: ModifierEffect = ModifierEffect {
        efficacy: 1.0,
        safety: 1.0,
        side_effects: 1.0,
    };

    pub const fn new(efficacy: f64, safety: f64, side_effects: f64) -> Self {
        Self {
            efficacy,
            safety,
            side_effects,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.efficacy, self.safety, self.side_effects]
            .iter()
            .all(|f| f.is_finite() && *f >= 0.0)
    }
}

impl Default for ModifierEffect {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// A compound produced by the generator. Transient, with no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCompound {
    pub display_name: String,
    pub token: String,
}
