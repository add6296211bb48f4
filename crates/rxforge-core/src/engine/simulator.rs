use super::config::{BonusOverflow, DiseaseBonus, SimulationConfig};
use crate::core::catalog::Catalog;
use crate::core::models::compound::{GeneratedCompound, ModifierEffect};
use crate::core::models::trial::{Metrics, PERCENT_MAX, TrialResult};
use crate::core::utils::modifiers::parse_modifiers;
use rand::Rng;
use tracing::{debug, instrument, trace};

const PERCENT_DRAW_MAX: u32 = 100;
const SEVERITY_DRAW_MAX: u32 = 50;

/// Draws the five raw metrics as independent uniform integers.
///
/// Efficacy, safety and potency come from `[0, 100]`; side effects and toxicity from `[0, 50]`.
/// Both ends are inclusive.
pub fn draw_metrics(rng: &mut impl Rng) -> Metrics {
    Metrics {
        efficacy: rng.gen_range(0..=PERCENT_DRAW_MAX) as f64,
        safety: rng.gen_range(0..=PERCENT_DRAW_MAX) as f64,
        side_effects: rng.gen_range(0..=SEVERITY_DRAW_MAX) as f64,
        potency: rng.gen_range(0..=PERCENT_DRAW_MAX) as f64,
        toxicity: rng.gen_range(0..=SEVERITY_DRAW_MAX) as f64,
    }
}

/// Multiplies efficacy, safety and side effects by every effect in turn.
///
/// Potency and toxicity are never touched by modifiers.
pub fn apply_modifiers(
    metrics: Metrics,
    effects: impl IntoIterator<Item = ModifierEffect>,
) -> Metrics {
    effects.into_iter().fold(metrics, |m, effect| Metrics {
        efficacy: m.efficacy * effect.efficacy,
        safety: m.safety * effect.safety,
        side_effects: m.side_effects * effect.side_effects,
        ..m
    })
}

/// Adds the disease bonus to efficacy when the disease mentions the bonus keyword.
pub fn apply_disease_bonus(metrics: Metrics, bonus: &DiseaseBonus, disease: &str) -> Metrics {
    if !bonus.applies_to(disease) {
        return metrics;
    }
    let boosted = metrics.efficacy + bonus.efficacy;
    let efficacy = match bonus.overflow {
        BonusOverflow::Clamp => boosted.clamp(0.0, PERCENT_MAX),
        BonusOverflow::Preserve => boosted,
    };
    trace!(
        "Disease bonus '{}' applied: efficacy {:.1} -> {:.1}",
        bonus.keyword, metrics.efficacy, efficacy
    );
    Metrics { efficacy, ..metrics }
}

/// Runs randomized trials against generated compounds.
#[derive(Debug, Clone, Copy)]
pub struct TrialSimulator<'a> {
    catalog: &'a Catalog,
    config: &'a SimulationConfig,
}

impl<'a> TrialSimulator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SimulationConfig) -> Self {
        Self { catalog, config }
    }

    /// Draws fresh metrics from `rng`, scores them and evaluates the verdict.
    #[instrument(level = "debug", skip_all, fields(compound = %compound.display_name))]
    pub fn simulate(
        &self,
        compound: &GeneratedCompound,
        disease: &str,
        modifiers_text: &str,
        rng: &mut impl Rng,
    ) -> TrialResult {
        let raw = draw_metrics(rng);
        debug!("Raw metrics drawn: {:?}", raw);
        self.evaluate(compound, disease, modifiers_text, raw)
    }

    /// The deterministic half of a trial: scores already-drawn metrics and evaluates the verdict.
    ///
    /// The verdict is computed on the unrounded scores.
    pub fn evaluate(
        &self,
        compound: &GeneratedCompound,
        disease: &str,
        modifiers_text: &str,
        raw: Metrics,
    ) -> TrialResult {
        let metrics = self.score(raw, disease, modifiers_text);
        let verdict = self.config.criteria.evaluate(&metrics);
        debug!("Scored metrics: {:?} => {}", metrics, verdict);

        TrialResult {
            display_name: compound.display_name.clone(),
            token: compound.token.clone(),
            metrics,
            verdict,
        }
    }

    /// Applies modifier effects, clamps every metric, then applies the disease bonus.
    pub fn score(&self, raw: Metrics, disease: &str, modifiers_text: &str) -> Metrics {
        let effects = parse_modifiers(modifiers_text)
            .into_iter()
            .map(|name| self.catalog.modifier_effect(name));
        let modified = apply_modifiers(raw, effects).clamped();
        apply_disease_bonus(modified, &self.config.disease_bonus, disease)
    }
}
