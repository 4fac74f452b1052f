use crate::dedup::dedup;
use crate::filters::{first_rejecting_idx, Candidate, FilterToggles, FILTERS};
use crate::models::{Combo, GenerateError, GenerateReport, StageCount};
use crate::pool::DigitPools;
use crate::score::rank;
use crate::sums::SumPolicy;

pub const STAGE_INITIAL: &str = "espace_initial";
pub const STAGE_SUMS: &str = "politique_sommes";
pub const STAGE_FILTERS: &str = "filtres";
pub const STAGE_DEDUP: &str = "deduplication";

#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub toggles: FilterToggles,
    pub sum_policy: SumPolicy,
}

/// Point d'entrée : parse les quatre champs puis déroule le pipeline.
pub fn run(
    hot: &str,
    cold: &str,
    due: &str,
    seed: &str,
    config: &GenerateConfig,
) -> Result<GenerateReport, GenerateError> {
    let pools = DigitPools::parse(hot, cold, due, seed)?;
    Ok(generate(&pools, config))
}

/// Déroule le pipeline complet : énumération exhaustive de alphabet^5,
/// politique de sommes, filtres (attribution au premier rejet),
/// déduplication en forme "box" puis classement Trap v3.
///
/// Un étage vide n'est pas une erreur : les collections vides se propagent
/// jusqu'au bout. Aucun état partagé, ré-invocable librement.
pub fn generate(pools: &DigitPools, config: &GenerateConfig) -> GenerateReport {
    let alphabet = pools.alphabet();
    let a = alphabet.len();
    let total = a.pow(5);
    let seed_sum = pools.seed_sum();

    let mut sum_survivors = 0usize;
    let mut sum_removed = 0usize;
    let mut filter_removed = vec![0usize; FILTERS.len()];
    let mut survivors: Vec<Combo> = Vec::new();

    // Énumération en odomètre : la position de droite varie le plus vite,
    // ordre lexicographique sur l'alphabet trié.
    for index in 0..total {
        let mut digits = [0u8; 5];
        let mut rest = index;
        for pos in (0..5).rev() {
            digits[pos] = alphabet[rest % a];
            rest /= a;
        }

        let candidate = Candidate::new(digits);

        if !config.sum_policy.accepts(candidate.sum, seed_sum) {
            sum_removed += 1;
            continue;
        }
        sum_survivors += 1;

        match first_rejecting_idx(&candidate, pools, &config.toggles) {
            Some(idx) => filter_removed[idx] += 1,
            None => survivors.push(Combo::new(digits)),
        }
    }

    let deduped = dedup(&survivors);
    let dedup_removed = survivors.len() - deduped.len();
    let scored = rank(&deduped);

    let stages = vec![
        StageCount::now(STAGE_INITIAL, total),
        StageCount::now(STAGE_SUMS, sum_survivors),
        StageCount::now(STAGE_FILTERS, survivors.len()),
        StageCount::now(STAGE_DEDUP, deduped.len()),
    ];

    let mut removals: Vec<(String, usize)> = Vec::new();
    if sum_removed > 0 {
        removals.push((STAGE_SUMS.to_string(), sum_removed));
    }
    for (filter, &count) in FILTERS.iter().zip(&filter_removed) {
        if count > 0 {
            removals.push((filter.name.to_string(), count));
        }
    }
    if dedup_removed > 0 {
        removals.push((STAGE_DEDUP.to_string(), dedup_removed));
    }

    GenerateReport {
        stages,
        removals,
        deduped,
        scored,
    }
}
